//! core — lead-time verification transforms.
//!
//! Purpose
//! -------
//! Collect the pure, single-pass transforms that turn raw verification
//! artifacts into plot-ready arrays: per-step summaries of sample arrays,
//! missing-model substitution, trailing landfall windows, threshold skill
//! series, and the lead-time axis they are drawn against.
//!
//! Key behaviors
//! -------------
//! - [`summarize`] reduces a [`SampleArray`] to per-step mean / std / count /
//!   SEM ([`SummaryArray`]) with an explicit missing-value policy.
//! - [`lookup_or_missing`] resolves a model key in a [`SampleTable`] and
//!   substitutes an all-missing array for an absent key.
//! - [`windowed_concat`] pools per-step landfall errors over a trailing
//!   window ([`LandfallErrorWindow`], [`LandfallWindowSpec`]).
//! - [`threshold_metric_series`] extracts a CSI / POD / FAR series and its
//!   attribute-derived standard error from a [`LabeledDataset`].
//! - [`LeadTimeAxis`] maps step indices to days and builds window labels.
//!
//! Invariants & assumptions
//! ------------------------
//! - `NaN` is the only missing-value sentinel ([`MISSING`]).
//! - Every transform is stateless and deterministic; inputs are never
//!   mutated.
//!
//! Conventions
//! -----------
//! - Sample arrays are `(n_samples, n_steps)`: rows are forecast cases,
//!   columns lead-time steps. Step indices are 0-based except landfall
//!   window end steps, which are 1-based inclusive.
//! - This module performs no file I/O. The only side effect is a
//!   `tracing` warning when a model key is substituted.
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each transform; the panel and integration tests
//!   exercise them together against artifacts on disk.

pub mod lead_time;
pub mod lookup;
pub mod samples;
pub mod summary;
pub mod threshold;
pub mod window;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::lead_time::LeadTimeAxis;
pub use self::lookup::{SampleTable, lookup_or_missing};
pub use self::samples::{MISSING, SampleArray};
pub use self::summary::{SummaryArray, summarize};
pub use self::threshold::{
    DataVariable, LabeledDataset, MetricSeries, metric_variable_name, sem_from_attrs,
    threshold_metric_series,
};
pub use self::window::{LandfallErrorWindow, LandfallWindowSpec, windowed_concat};
