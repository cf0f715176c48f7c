//! Per-lead-time summaries of sample arrays (mean and standard error).
//!
//! Purpose
//! -------
//! Reduce a [`SampleArray`] of shape `(n_samples, n_steps)` to one mean and
//! one standard error of the mean per lead-time step. These are the line and
//! shaded-band inputs of the RMSE / bias figures.
//!
//! Key behaviors
//! -------------
//! - [`summarize`] skips missing entries column by column.
//! - A column with no valid entries yields a missing mean, a missing
//!   standard deviation, `count = 0`, and `sem = 0`.
//! - [`SummaryArray::band`] returns the `mean ± sem` envelope.
//!
//! Invariants & assumptions
//! ------------------------
//! - Standard deviations use the population convention (ddof = 0).
//! - Each column is reduced in a single pass in row order over its valid
//!   entries, so repeated calls are bit-identical.
//! - `sem` is never missing: absence of samples is a zero-width band.
//!
//! Missing-value policy
//! --------------------
//! | quantity | policy |
//! |----------|--------|
//! | `mean`   | skip missing; all-missing column propagates `NaN` |
//! | `std`    | skip missing; all-missing column propagates `NaN` |
//! | `count`  | counts non-missing entries |
//! | `sem`    | `std / sqrt(count)` for `count > 0`, else `0` |
//!
//! Testing notes
//! -------------
//! - Unit tests cover the reference 2×2 example, all-missing columns,
//!   row-order invariance, single-sample columns, and the `band` envelope.
use crate::verification::core::samples::{MISSING, SampleArray};
use ndarray::Array1;
use statrs::statistics::Statistics;

/// `SummaryArray` — per-step statistics of one (model, variable) pair.
///
/// Fields
/// ------
/// - `mean`: `Array1<f64>`
///   Mean over valid samples; `NaN` where no sample is valid.
/// - `std`: `Array1<f64>`
///   Population standard deviation over valid samples; `NaN` where no sample
///   is valid.
/// - `count`: `Array1<usize>`
///   Number of valid samples per step.
/// - `sem`: `Array1<f64>`
///   Standard error of the mean; `0.0` where `count == 0`.
///
/// Invariants
/// ----------
/// - All four arrays have length `n_steps` of the source [`SampleArray`].
/// - `sem[i]` is finite and `>= 0` whenever the valid samples are finite.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryArray {
    pub mean: Array1<f64>,
    pub std: Array1<f64>,
    pub count: Array1<usize>,
    pub sem: Array1<f64>,
}

impl SummaryArray {
    /// Summary of `n_steps` steps with no valid samples anywhere.
    pub fn all_missing(n_steps: usize) -> SummaryArray {
        SummaryArray {
            mean: Array1::from_elem(n_steps, MISSING),
            std: Array1::from_elem(n_steps, MISSING),
            count: Array1::zeros(n_steps),
            sem: Array1::zeros(n_steps),
        }
    }

    /// Number of lead-time steps summarized.
    pub fn n_steps(&self) -> usize {
        self.mean.len()
    }

    /// Lower and upper edges of the `mean ± sem` band.
    ///
    /// Missing means propagate into both edges.
    pub fn band(&self) -> (Array1<f64>, Array1<f64>) {
        (&self.mean - &self.sem, &self.mean + &self.sem)
    }
}

/// Summarize a sample array into per-step mean, standard deviation, count,
/// and standard error of the mean.
///
/// Parameters
/// ----------
/// - `samples`: `&SampleArray`
///   Scores of shape `(n_samples, n_steps)`; `NaN` marks missing entries.
///
/// Returns
/// -------
/// `SummaryArray`
///   Arrays of length `n_steps`, see the module-level missing-value policy.
///
/// Panics
/// ------
/// - Never panics.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use ar_verification::verification::core::{samples::SampleArray, summary::summarize};
/// let samples = SampleArray::new(array![[1.0, 2.0], [3.0, f64::NAN]]);
/// let summary = summarize(&samples);
/// assert_eq!(summary.mean, array![2.0, 2.0]);
/// assert_eq!(summary.count, array![2, 1]);
/// assert_eq!(summary.sem[1], 0.0);
/// ```
pub fn summarize(samples: &SampleArray) -> SummaryArray {
    let n_steps = samples.n_steps();
    let mut mean = Array1::from_elem(n_steps, MISSING);
    let mut std = Array1::from_elem(n_steps, MISSING);
    let mut count = Array1::zeros(n_steps);
    let mut sem = Array1::zeros(n_steps);

    let mut valid: Vec<f64> = Vec::with_capacity(samples.n_samples());
    for step in 0..n_steps {
        valid.clear();
        valid.extend(samples.step(step).iter().copied().filter(|v| !v.is_nan()));
        if valid.is_empty() {
            continue;
        }

        let n = valid.len();
        let step_std = valid.iter().population_std_dev();
        mean[step] = valid.iter().mean();
        std[step] = step_std;
        count[step] = n;
        sem[step] = step_std / (n as f64).sqrt();
    }

    SummaryArray { mean, std, count, sem }
}
