//! Reader for per-model sample-array artifacts (RMSE / bias samples).
use crate::{
    artifacts::{fill_missing, read_json},
    verification::{
        core::{SampleArray, SampleTable},
        errors::{VerifyError, VerifyResult},
    },
};
use ndarray::Array2;
use std::{collections::BTreeMap, path::Path};

type RawRows = Vec<Vec<Option<f64>>>;

/// Read a `{ model: [[f64 | null, ..], ..] }` artifact into a
/// [`SampleTable`] of `n_steps` lead-time steps.
///
/// Errors
/// ------
/// - `VerifyError::MissingArtifact` / `Io` / `MalformedArtifact` from the
///   underlying JSON read.
/// - `VerifyError::StepCountMismatch` when any row of any model does not
///   have exactly `n_steps` entries; `key` names the model.
pub fn read_sample_table(path: &Path, n_steps: usize) -> VerifyResult<SampleTable> {
    let raw: BTreeMap<String, RawRows> = read_json(path)?;

    let mut table = SampleTable::new(n_steps);
    for (key, rows) in raw {
        let samples = rows_to_samples(path, &key, rows, n_steps)?;
        table.insert(key, samples)?;
    }
    Ok(table)
}

fn rows_to_samples(
    path: &Path, key: &str, rows: RawRows, n_steps: usize,
) -> VerifyResult<SampleArray> {
    let n_samples = rows.len();
    let mut flat = Vec::with_capacity(n_samples * n_steps);
    for row in rows {
        if row.len() != n_steps {
            return Err(VerifyError::StepCountMismatch {
                key: key.to_string(),
                expected: n_steps,
                actual: row.len(),
            });
        }
        flat.extend(fill_missing(row));
    }
    let values = Array2::from_shape_vec((n_samples, n_steps), flat)
        .map_err(|err| VerifyError::MalformedArtifact {
            path: path.display().to_string(),
            reason: format!("model '{key}': {err}"),
        })?;
    Ok(SampleArray::new(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Parsing a well-formed table with `null` entries.
    // - Ragged rows, empty sample lists, and malformed JSON.
    // -------------------------------------------------------------------------

    fn write(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    // Purpose
    // -------
    // Verify a well-formed table round-trips into sample arrays.
    //
    // Given
    // -----
    // - "tigge" with rows `[1, 2]`, `[3, null]`; "aurora" with one row.
    //
    // Expect
    // ------
    // - Two entries of 2 steps; the `null` reads as `NaN`.
    fn read_sample_table_parses_models_and_nulls() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "TMQ_RMSE.json", r#"{"tigge": [[1.0, 2.0], [3.0, null]], "aurora": [[0.5, 0.25]]}"#);

        let table = read_sample_table(&path, 2).unwrap();

        assert_eq!(table.len(), 2);
        let tigge = table.get("tigge").unwrap();
        assert_eq!(tigge.n_samples(), 2);
        assert!(tigge.values()[[1, 1]].is_nan());
        assert_eq!(table.get("aurora").unwrap().values()[[0, 1]], 0.25);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a row of the wrong width is rejected with the model key.
    //
    // Given
    // -----
    // - A 3-step table where one "graphcast37" row has 2 entries.
    //
    // Expect
    // ------
    // - `StepCountMismatch { key: "graphcast37", expected: 3, actual: 2 }`.
    fn read_sample_table_rejects_ragged_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "PSL_RMSE.json", r#"{"graphcast37": [[1.0, 2.0, 3.0], [1.0, 2.0]]}"#);

        let err = read_sample_table(&path, 3).unwrap_err();

        assert_eq!(
            err,
            VerifyError::StepCountMismatch { key: "graphcast37".into(), expected: 3, actual: 2 }
        );
    }

    #[test]
    fn read_sample_table_accepts_model_without_samples() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "WIND850_RMSE.json", r#"{"panguweather": []}"#);

        let table = read_sample_table(&path, 4).unwrap();

        let samples = table.get("panguweather").unwrap();
        assert_eq!(samples.n_samples(), 0);
        assert_eq!(samples.n_steps(), 4);
    }

    #[test]
    fn read_sample_table_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "TMQ_bias.json", r#"{"tigge": [[1.0, "x"]]}"#);

        let err = read_sample_table(&path, 2).unwrap_err();

        assert!(matches!(err, VerifyError::MalformedArtifact { .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    // Purpose
    // -------
    // Ensure shape errors carry the artifact path and name the model only
    // in the reason.
    //
    // Given
    // -----
    // - A direct `rows_to_samples` call for "tigge" on a valid 1×2 row, and
    //   a malformed file read through `read_sample_table`.
    //
    // Expect
    // ------
    // - The valid rows convert; the malformed file's error path is the file
    //   path, never a model key.
    fn sample_errors_report_artifact_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "PSL_RMSE.json", r#"{"tigge": [[1.0, 2.0]"#);

        let samples = rows_to_samples(&path, "tigge", vec![vec![Some(1.0), None]], 2).unwrap();
        assert_eq!(samples.n_samples(), 1);
        assert!(samples.values()[[0, 1]].is_nan());

        match read_sample_table(&path, 2).unwrap_err() {
            VerifyError::MalformedArtifact { path: reported, .. } => {
                assert_eq!(reported, path.display().to_string());
                assert_ne!(reported, "tigge");
            }
            other => panic!("expected MalformedArtifact, got {other:?}"),
        }
    }
}
