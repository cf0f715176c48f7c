//! Sample arrays: raw per-sample, per-lead-time verification scores.
//!
//! Purpose
//! -------
//! Wrap the `(n_samples, n_steps)` score matrix produced upstream for one
//! (model, variable) pair. Rows are independent forecast cases, columns are
//! lead-time steps. Missing entries carry the [`MISSING`] sentinel.
//!
//! Invariants & assumptions
//! ------------------------
//! - Missing values are `NaN`; any `NaN` is treated as missing regardless of
//!   payload bits.
//! - The step count is fixed per figure; the row count is not.
//! - A `SampleArray` is never mutated after construction.
use ndarray::{Array2, ArrayView1, Axis};

/// Missing-value sentinel for sample, summary, and window arrays.
pub const MISSING: f64 = f64::NAN;

/// `SampleArray` — raw verification scores for one (model, variable) pair.
///
/// Fields
/// ------
/// - `values`: `Array2<f64>`
///   Shape `(n_samples, n_steps)`. `NaN` marks a sample unavailable at that
///   lead time.
///
/// Notes
/// -----
/// - Zero rows is a valid shape: every column then summarizes as all-missing.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleArray {
    values: Array2<f64>,
}

impl SampleArray {
    /// Wrap an existing `(n_samples, n_steps)` matrix.
    pub fn new(values: Array2<f64>) -> SampleArray {
        SampleArray { values }
    }

    /// Build an all-missing array with a single row of `n_steps` entries.
    ///
    /// This is the substitute used when a model key or a whole artifact is
    /// unavailable; it summarizes to a missing mean and a zero SEM at every
    /// step.
    pub fn missing(n_steps: usize) -> SampleArray {
        SampleArray { values: Array2::from_elem((1, n_steps), MISSING) }
    }

    /// Number of independent samples (rows).
    pub fn n_samples(&self) -> usize {
        self.values.nrows()
    }

    /// Number of lead-time steps (columns).
    pub fn n_steps(&self) -> usize {
        self.values.ncols()
    }

    /// View of the values at lead-time step `step` across all samples.
    ///
    /// Panics
    /// ------
    /// - If `step >= self.n_steps()`.
    pub fn step(&self, step: usize) -> ArrayView1<'_, f64> {
        self.values.index_axis(Axis(1), step)
    }

    /// `true` if every entry is the missing sentinel (or there are no rows).
    pub fn is_all_missing(&self) -> bool {
        self.values.iter().all(|v| v.is_nan())
    }

    /// Borrow the underlying matrix.
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Consume the wrapper and return the underlying matrix.
    pub fn into_inner(self) -> Array2<f64> {
        self.values
    }
}

impl From<Array2<f64>> for SampleArray {
    fn from(values: Array2<f64>) -> Self {
        SampleArray::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Verify that `SampleArray::missing` yields one fully missing row of the
    // requested width.
    //
    // Given
    // -----
    // - `n_steps = 41`.
    //
    // Expect
    // ------
    // - Shape `(1, 41)`, every entry `NaN`.
    fn missing_builds_single_all_nan_row() {
        let samples = SampleArray::missing(41);

        assert_eq!(samples.n_samples(), 1);
        assert_eq!(samples.n_steps(), 41);
        assert!(samples.is_all_missing());
    }

    #[test]
    // Purpose
    // -------
    // Ensure `step` returns the column across samples, not a row.
    //
    // Given
    // -----
    // - `[[1, 2], [3, NaN]]`.
    //
    // Expect
    // ------
    // - `step(0) == [1, 3]`, `step(1)[1]` is `NaN`.
    fn step_returns_column_view() {
        let samples = SampleArray::new(array![[1.0, 2.0], [3.0, f64::NAN]]);

        assert_eq!(samples.step(0), array![1.0, 3.0]);
        assert_eq!(samples.step(1)[0], 2.0);
        assert!(samples.step(1)[1].is_nan());
        assert!(!samples.is_all_missing());
    }
}
