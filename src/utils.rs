//! Conversion helpers for the Python bindings.
//!
//! Inputs arrive either as contiguous `float64` numpy arrays or as plain
//! Python sequences; `None` entries in sequences become the `NaN` missing
//! sentinel.
#[cfg(feature = "python-bindings")]
use ndarray::{Array1, Array2};

#[cfg(feature = "python-bindings")]
use numpy::{PyReadonlyArray1, PyReadonlyArray2};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::verification::{core::MISSING, errors::VerifyError};

/// Extract a 1-D `float64` array from a numpy array or a sequence of
/// `float | None`.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_array(raw_data: &Bound<'_, PyAny>) -> PyResult<Array1<f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        return Ok(arr_ro.as_array().to_owned());
    }

    let values: Vec<Option<f64>> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray or sequence of float64")
    })?;
    Ok(values.into_iter().map(|v| v.unwrap_or(MISSING)).collect())
}

/// Extract a 2-D `(n_samples, n_steps)` `float64` array from a numpy array
/// or a sequence of equal-length rows.
///
/// Errors
/// ------
/// - `TypeError` when the input is neither.
/// - `ValueError` (via [`VerifyError::StepCountMismatch`]) on ragged rows.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_matrix(raw_data: &Bound<'_, PyAny>) -> PyResult<Array2<f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray2<f64>>() {
        return Ok(arr_ro.as_array().to_owned());
    }

    let rows: Vec<Vec<Option<f64>>> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 2-D numpy.ndarray or sequence of float64 rows")
    })?;
    let n_steps = rows.first().map_or(0, Vec::len);
    let mut flat = Vec::with_capacity(rows.len() * n_steps);
    for row in &rows {
        if row.len() != n_steps {
            return Err(VerifyError::StepCountMismatch {
                key: "samples".to_string(),
                expected: n_steps,
                actual: row.len(),
            }
            .into());
        }
        flat.extend(row.iter().map(|v| v.unwrap_or(MISSING)));
    }
    Array2::from_shape_vec((rows.len(), n_steps), flat)
        .map_err(|err| PyTypeError::new_err(err.to_string()))
}
