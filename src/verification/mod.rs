//! verification — lead-time verification aggregation for forecast models.
//!
//! Purpose
//! -------
//! Turn pre-computed verification artifacts (per-sample RMSE / bias arrays,
//! per-step landfall errors, threshold skill datasets) into the per-model
//! arrays a figure needs: means with standard-error bands, pooled box-plot
//! distributions, and skill-score series.
//!
//! Key behaviors
//! -------------
//! - [`core`] holds the pure transforms (`summarize`, `lookup_or_missing`,
//!   `windowed_concat`, `threshold_metric_series`) and the lead-time axis.
//! - [`panels`] applies them across the model keys of one figure panel and
//!   records which models were present, absent from the artifact, or
//!   missing because the artifact itself was missing.
//! - [`errors`] defines [`VerifyError`] / [`VerifyResult`], shared by the
//!   whole crate.
//!
//! Invariants & assumptions
//! ------------------------
//! - Missing artifacts and missing model keys are data gaps: they are
//!   logged, substituted with all-missing data, and never end a run.
//! - Every other error (malformed artifacts, shape mismatches, missing
//!   dataset variables) propagates to the caller.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use ar_verification::verification::prelude::*;
//! use ndarray::array;
//!
//! let mut table = SampleTable::new(2);
//! table.insert("tigge", SampleArray::new(array![[1.0, 2.0], [3.0, f64::NAN]]))?;
//!
//! let panel = summarize_variable(Some(&table), "TMQ", &["tigge", "aurora"], 2);
//! assert_eq!(panel.models[0].summary.mean, array![2.0, 2.0]);
//! assert!(panel.models[1].summary.mean.iter().all(|m| m.is_nan()));
//! # Ok::<(), VerifyError>(())
//! ```

pub mod core;
pub mod errors;
pub mod panels;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{VerifyError, VerifyResult};
pub use self::panels::{
    BoxPanel, LinePanel, MetricPanel, ModelStatus, PanelStatus, landfall_panels, skill_panels,
    summarize_variable,
};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::core::{
        LabeledDataset, LandfallWindowSpec, LeadTimeAxis, SampleArray, SampleTable, SummaryArray,
        lookup_or_missing, summarize, threshold_metric_series, windowed_concat,
    };
    pub use super::errors::{VerifyError, VerifyResult};
    pub use super::panels::{
        BoxPanel, LinePanel, MetricPanel, ModelStatus, PanelStatus, landfall_panels,
        skill_panels, summarize_variable,
    };
}
