//! ar_verification — lead-time verification aggregation for atmospheric-river
//! forecast models, with optional Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the core aggregation transforms to Python via the `_ar_verification`
//! extension module. The crate turns pre-computed verification artifacts into
//! the per-model arrays behind three figures: RMSE / bias against lead time,
//! pooled landfall-error distributions, and threshold skill scores.
//!
//! Key behaviors
//! -------------
//! - [`verification`]: core transforms, per-figure panels, and the shared
//!   [`verification::VerifyError`].
//! - [`artifacts`]: JSON artifact readers.
//! - [`config`]: TOML run configuration and the explicit render style.
//! - [`figures`]: artifact → panel aggregation per figure.
//! - [`render`]: the [`render::RenderSink`] seam and the
//!   [`render::render_all`] driver.
//! - With `python-bindings`, define the `#[pymodule]` initializer and the
//!   `summarize`, `windowed_concat`, and `sem_from_attrs` functions.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner modules; this file performs only
//!   FFI glue, input conversion, and error mapping.
//! - `NaN` is the missing-value sentinel on both sides of the boundary.
//!
//! Conventions
//! -----------
//! - Lead-time steps are 0-based array indices; landfall end steps are
//!   1-based and inclusive.
//! - Errors from core Rust code are `VerifyError` values internally and are
//!   converted to `ValueError` at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Rust callers load a [`config::VerifyConfig`] and pass a sink to
//!   [`render::render_all`], or call the inner modules directly.
//! - Plotting code in Python may call the bound transforms on arrays it has
//!   already loaded.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules and by the
//!   artifact-to-sink integration test under `tests/`.

pub mod artifacts;
pub mod config;
pub mod figures;
pub mod render;
pub mod utils;
pub mod verification;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    utils::{extract_f64_array, extract_f64_matrix},
    verification::core::{SampleArray, sem_from_attrs as core_sem_from_attrs},
};

/// summarize — per-step mean, standard error, and valid count of a sample
/// matrix.
///
/// Parameters
/// ----------
/// - `samples`: 2-D `(n_samples, n_steps)` array-like of `float64`; `NaN`
///   or `None` marks a missing value.
///
/// Returns
/// -------
/// `(mean, sem, count)` numpy arrays of length `n_steps`. All-missing steps
/// have `mean = NaN`, `sem = 0`, `count = 0`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(text_signature = "(samples, /)")]
fn summarize<'py>(
    py: Python<'py>, samples: &Bound<'py, PyAny>,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<u64>>)> {
    let samples = SampleArray::new(extract_f64_matrix(samples)?);
    let summary = crate::verification::core::summarize(&samples);
    let count: Vec<u64> = summary.count.iter().map(|&c| c as u64).collect();
    Ok((summary.mean.into_pyarray(py), summary.sem.into_pyarray(py), count.into_pyarray(py)))
}

/// windowed_concat — pool per-step landfall errors over a trailing window.
///
/// `end_index` is 1-based and inclusive; an `end_index` past the last step
/// yields an empty array.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(text_signature = "(per_step, end_index, window_size, /)")]
fn windowed_concat<'py>(
    py: Python<'py>, per_step: Vec<Bound<'py, PyAny>>, end_index: usize, window_size: usize,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let per_step =
        per_step.iter().map(|step| extract_f64_array(step)).collect::<PyResult<Vec<_>>>()?;
    let window =
        crate::verification::core::windowed_concat(&per_step, end_index, window_size);
    Ok(window.into_inner().into_pyarray(py))
}

/// sem_from_attrs — standard error from a metric's `std` and `count`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(text_signature = "(std, count, /)")]
fn sem_from_attrs(std: f64, count: f64) -> f64 {
    core_sem_from_attrs(std, count)
}

/// _ar_verification — PyO3 module initializer for the Python extension.
///
/// Registers the aggregation functions on the `_ar_verification` module.
/// Invoked by Python when importing the compiled extension.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _ar_verification<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(summarize, m)?)?;
    m.add_function(wrap_pyfunction!(windowed_concat, m)?)?;
    m.add_function(wrap_pyfunction!(sem_from_attrs, m)?)?;
    Ok(())
}
