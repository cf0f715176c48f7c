//! artifacts — readers for pre-computed verification artifacts.
//!
//! Purpose
//! -------
//! Read the JSON artifacts written by the upstream verification jobs into
//! the core types of [`crate::verification::core`]:
//!
//! | artifact | reader | core type |
//! |----------|--------|-----------|
//! | `{ model: [[f64 \| null, ..], ..] }` | [`read_sample_table`] | `SampleTable` |
//! | `[[f64 \| null, ..], ..]` | [`read_step_errors`] | `Vec<Array1<f64>>` |
//! | `{ coords, variables }` | [`read_labeled_dataset`] | `LabeledDataset` |
//!
//! Key behaviors
//! -------------
//! - `null` entries become the `NaN` missing sentinel.
//! - A path that does not exist is reported as the recoverable
//!   `VerifyError::MissingArtifact`; [`optional`] turns it into `Ok(None)`
//!   after logging a warning.
//! - Unreadable files map to `VerifyError::Io`; unparsable or mis-shaped
//!   contents map to `VerifyError::MalformedArtifact` /
//!   `VerifyError::StepCountMismatch`. These are fatal.
//!
//! Conventions
//! -----------
//! - Readers do a single read per artifact and never write.

pub mod dataset;
pub mod sample_table;
pub mod step_errors;

pub use self::dataset::read_labeled_dataset;
pub use self::sample_table::read_sample_table;
pub use self::step_errors::read_step_errors;

use crate::verification::errors::{VerifyError, VerifyResult};
use serde::de::DeserializeOwned;
use std::{fs, path::Path};
use tracing::{debug, warn};

/// Read and deserialize one JSON artifact.
///
/// Errors
/// ------
/// - `VerifyError::MissingArtifact` when `path` does not exist.
/// - `VerifyError::Io` when it exists but cannot be read.
/// - `VerifyError::MalformedArtifact` when the JSON does not match `T`.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> VerifyResult<T> {
    let shown = path.display().to_string();
    if !path.exists() {
        return Err(VerifyError::MissingArtifact { path: shown });
    }
    let text = fs::read_to_string(path)
        .map_err(|err| VerifyError::Io { path: shown.clone(), reason: err.to_string() })?;
    debug!(path = %shown, bytes = text.len(), "artifact read");
    serde_json::from_str(&text)
        .map_err(|err| VerifyError::MalformedArtifact { path: shown, reason: err.to_string() })
}

/// Turn a recoverable artifact gap into `Ok(None)`, logging a warning.
/// Fatal errors pass through unchanged.
pub fn optional<T>(result: VerifyResult<T>) -> VerifyResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_recoverable() => {
            warn!(%err, "skipping unavailable artifact");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Replace JSON `null`s with the `NaN` missing sentinel.
pub(crate) fn fill_missing(values: Vec<Option<f64>>) -> Vec<f64> {
    values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Verify the recoverable / fatal split of `optional`.
    //
    // Given
    // -----
    // - `Ok(3)`, a `MissingArtifact`, and a `MalformedArtifact`.
    //
    // Expect
    // ------
    // - `Some(3)`, `None`, and the malformed error unchanged.
    fn optional_swallows_only_recoverable_errors() {
        let missing: VerifyResult<u8> = Err(VerifyError::MissingArtifact { path: "x".into() });
        let malformed: VerifyResult<u8> =
            Err(VerifyError::MalformedArtifact { path: "x".into(), reason: "eof".into() });

        assert_eq!(optional(Ok(3)).unwrap(), Some(3));
        assert_eq!(optional(missing).unwrap(), None);
        assert!(matches!(optional(malformed), Err(VerifyError::MalformedArtifact { .. })));
    }

    #[test]
    fn read_json_reports_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = read_json::<Vec<f64>>(&path).unwrap_err();

        assert!(matches!(err, VerifyError::MissingArtifact { .. }));
    }

    #[test]
    // Purpose
    // -------
    // Verify a present artifact is read, logged, and parsed, and that a parse
    // failure names the file.
    //
    // Given
    // -----
    // - `ok.json` holding `[1.0, 2.5]` and `bad.json` holding `[1.0,`.
    //
    // Expect
    // ------
    // - `[1.0, 2.5]` for the first; `MalformedArtifact` with the full path
    //   for the second.
    fn read_json_parses_present_file_and_names_malformed_one() {
        let dir = tempfile::tempdir().unwrap();
        let ok = dir.path().join("ok.json");
        let bad = dir.path().join("bad.json");
        fs::write(&ok, "[1.0, 2.5]").unwrap();
        fs::write(&bad, "[1.0,").unwrap();

        assert_eq!(read_json::<Vec<f64>>(&ok).unwrap(), vec![1.0, 2.5]);
        match read_json::<Vec<f64>>(&bad).unwrap_err() {
            VerifyError::MalformedArtifact { path, .. } => assert_eq!(path, bad.display().to_string()),
            other => panic!("expected MalformedArtifact, got {other:?}"),
        }
    }

    #[test]
    fn fill_missing_maps_null_to_nan() {
        let filled = fill_missing(vec![Some(1.5), None]);

        assert_eq!(filled[0], 1.5);
        assert!(filled[1].is_nan());
    }
}
