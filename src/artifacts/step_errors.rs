//! Reader for per-step landfall-error artifacts.
use crate::{
    artifacts::{fill_missing, read_json},
    verification::errors::VerifyResult,
};
use ndarray::Array1;
use std::path::Path;

/// Read a `[[f64 | null, ..], ..]` artifact: one variable-length array of
/// per-case landfall errors per lead-time step.
pub fn read_step_errors(path: &Path) -> VerifyResult<Vec<Array1<f64>>> {
    let raw: Vec<Vec<Option<f64>>> = read_json(path)?;
    Ok(raw.into_iter().map(|step| Array1::from_vec(fill_missing(step))).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verification::errors::VerifyError;
    use ndarray::array;
    use std::fs;

    #[test]
    // Purpose
    // -------
    // Verify variable-length steps, empty steps, and `null` handling.
    //
    // Given
    // -----
    // - `[[0.5], [], [-1.0, null]]`.
    //
    // Expect
    // ------
    // - Three steps of lengths 1, 0, 2; the `null` reads as `NaN`.
    fn read_step_errors_keeps_ragged_steps() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tigge_lat_landfall_error_degrees.json");
        fs::write(&path, "[[0.5], [], [-1.0, null]]").unwrap();

        let steps = read_step_errors(&path).unwrap();

        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0], array![0.5]);
        assert!(steps[1].is_empty());
        assert_eq!(steps[2][0], -1.0);
        assert!(steps[2][1].is_nan());
    }

    #[test]
    fn read_step_errors_missing_file_is_recoverable() {
        let dir = tempfile::tempdir().unwrap();

        let err = read_step_errors(&dir.path().join("aurora_ft.json")).unwrap_err();

        assert!(matches!(err, VerifyError::MissingArtifact { .. }));
        assert!(err.is_recoverable());
    }
}
