//! Trailing lead-time windows over per-step landfall errors.
//!
//! Purpose
//! -------
//! Pool the per-case landfall errors of several consecutive lead-time steps
//! into one distribution, the input of a landfall-error box plot.
//!
//! Key behaviors
//! -------------
//! - [`windowed_concat`] slices the step sequence `[end - window, end)` and
//!   concatenates the slice into one flat array.
//! - An `end_index` past the end of the sequence yields an empty window
//!   ("no data for this lead time"), never an out-of-range failure.
//! - [`LandfallWindowSpec`] bundles the target end steps and the shared
//!   window width of a box-plot figure.
//!
//! Conventions
//! -----------
//! - `end_index` is a 1-based step count: the window ends at, and includes,
//!   the step at 0-based position `end_index - 1`.
//! - Windows extend on the earlier side only. When `window_size` exceeds
//!   `end_index` the window starts at step 0.
//! - Missing values inside the per-step arrays are passed through unchanged.
use crate::verification::errors::{VerifyError, VerifyResult};
use ndarray::Array1;

/// Default box-plot end steps (days 4, 7, and 10 at 6-hour spacing).
pub const DEFAULT_END_STEPS: [usize; 3] = [17, 29, 41];

/// Default number of steps pooled on the earlier side of each end step.
pub const DEFAULT_WINDOW: usize = 12;

/// `LandfallErrorWindow` — pooled errors for one model and one window.
#[derive(Debug, Clone, PartialEq)]
pub struct LandfallErrorWindow {
    values: Array1<f64>,
}

impl LandfallErrorWindow {
    pub fn empty() -> LandfallErrorWindow {
        LandfallErrorWindow { values: Array1::zeros(0) }
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_inner(self) -> Array1<f64> {
        self.values
    }
}

/// Concatenate the per-step error arrays in the trailing window ending at
/// `end_index`.
///
/// Parameters
/// ----------
/// - `per_step`: `&[Array1<f64>]`
///   Sequence indexed by lead-time step; each element holds a
///   variable-length set of per-case errors.
/// - `end_index`: `usize`
///   1-based inclusive right edge of the window.
/// - `window_size`: `usize`
///   Number of steps to pool, counting back from `end_index`.
///
/// Returns
/// -------
/// `LandfallErrorWindow`
///   - Elements of `per_step[end_index - window_size .. end_index]` in step
///     order, flattened.
///   - Empty when `end_index > per_step.len()`, when `end_index == 0`, or
///     when `window_size == 0`.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use ar_verification::verification::core::window::windowed_concat;
/// let per_step = vec![array![1.0], array![2.0, 3.0], array![4.0, 5.0, 6.0]];
/// let window = windowed_concat(&per_step, 3, 2);
/// assert_eq!(window.values(), &array![2.0, 3.0, 4.0, 5.0, 6.0]);
/// ```
pub fn windowed_concat(
    per_step: &[Array1<f64>], end_index: usize, window_size: usize,
) -> LandfallErrorWindow {
    if end_index > per_step.len() {
        return LandfallErrorWindow::empty();
    }
    let start = end_index.saturating_sub(window_size);
    let slice = &per_step[start..end_index];

    let values = Array1::from_iter(slice.iter().flat_map(|errors| errors.iter().copied()));
    LandfallErrorWindow { values }
}

/// `LandfallWindowSpec` — end steps and window width of a box-plot figure.
///
/// Invariants
/// ----------
/// - `end_steps` is non-empty and every entry is `>= 1`.
/// - `window >= 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct LandfallWindowSpec {
    end_steps: Vec<usize>,
    window: usize,
}

impl LandfallWindowSpec {
    /// Validate and build a window specification.
    ///
    /// Errors
    /// ------
    /// - `VerifyError::InvalidWindow`
    ///   Returned when `window == 0` or any end step is `0`.
    /// - `VerifyError::InvalidConfig`
    ///   Returned when `end_steps` is empty.
    pub fn new(end_steps: Vec<usize>, window: usize) -> VerifyResult<LandfallWindowSpec> {
        if end_steps.is_empty() {
            return Err(VerifyError::InvalidConfig {
                field: "landfall.timesteps",
                reason: "at least one end step is required".to_string(),
            });
        }
        for &end_index in &end_steps {
            if window == 0 || end_index == 0 {
                return Err(VerifyError::InvalidWindow { end_index, window_size: window });
            }
        }
        Ok(LandfallWindowSpec { end_steps, window })
    }

    pub fn end_steps(&self) -> &[usize] {
        &self.end_steps
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// One pooled window per end step, in end-step order.
    pub fn windows(&self, per_step: &[Array1<f64>]) -> Vec<LandfallErrorWindow> {
        self.end_steps.iter().map(|&end| windowed_concat(per_step, end, self.window)).collect()
    }
}

impl Default for LandfallWindowSpec {
    fn default() -> Self {
        LandfallWindowSpec { end_steps: DEFAULT_END_STEPS.to_vec(), window: DEFAULT_WINDOW }
    }
}
