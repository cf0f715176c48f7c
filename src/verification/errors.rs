//! verification::errors — shared error type for the aggregation stack.
//!
//! Purpose
//! -------
//! Provide a single error enum and result alias for everything between
//! reading a verification artifact and handing aggregated arrays to a
//! rendering sink. Two variants are *recoverable* data-availability gaps;
//! every other variant is fatal for the run.
//!
//! Key behaviors
//! -------------
//! - Define [`VerifyResult`] and [`VerifyError`] as the canonical result and
//!   error types for the `verification`, `artifacts`, `config`, and `render`
//!   modules.
//! - Classify errors through [`VerifyError::is_recoverable`], so callers can
//!   substitute all-missing data for `MissingArtifact` / `MissingModelKey`
//!   and propagate everything else with `?`.
//! - Implement `From<VerifyError> for PyErr` when the `python-bindings`
//!   feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Only `MissingArtifact` and `MissingModelKey` are ever substituted.
//!   Malformed artifacts and shape mismatches are not recovered from.
//! - Payloads are small (paths, keys, lengths) so the enum stays cheap to
//!   clone and compare in tests.
//!
//! Testing notes
//! -------------
//! - Unit tests check that `Display` embeds payloads and that the
//!   recoverable classification matches the two documented variants.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type VerifyResult<T> = Result<T, VerifyError>;

/// Error conditions raised while loading, aggregating, or rendering
/// verification data.
#[derive(Debug, Clone, PartialEq)]
pub enum VerifyError {
    // ---- Recoverable data gaps ----
    /// The expected artifact file does not exist.
    MissingArtifact { path: String },

    /// The artifact was read but lacks an expected model key.
    MissingModelKey { key: String },

    // ---- Artifact reading ----
    /// The artifact exists but could not be read.
    Io { path: String, reason: String },

    /// The artifact was read but its contents do not have the expected layout.
    MalformedArtifact { path: String, reason: String },

    /// A sample row or summary does not have the step count of its figure.
    StepCountMismatch { key: String, expected: usize, actual: usize },

    // ---- Labeled datasets ----
    /// A labeled dataset lacks the requested variable.
    MissingVariable { name: String },

    /// A dataset variable lacks a required scalar attribute.
    MissingAttribute { variable: String, attr: &'static str },

    // ---- Configuration ----
    /// A configuration value violates its documented constraint.
    InvalidConfig { field: &'static str, reason: String },

    /// A landfall window request cannot be satisfied (zero-width window).
    InvalidWindow { end_index: usize, window_size: usize },

    // ---- Rendering ----
    /// The rendering sink reported a failure.
    Render { reason: String },
}

impl VerifyError {
    /// `true` for the two data-availability gaps that are substituted with
    /// all-missing data instead of ending the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, VerifyError::MissingArtifact { .. } | VerifyError::MissingModelKey { .. })
    }
}

impl std::error::Error for VerifyError {}

impl std::fmt::Display for VerifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Recoverable data gaps ----
            VerifyError::MissingArtifact { path } => {
                write!(f, "Artifact {path} not found.")
            }
            VerifyError::MissingModelKey { key } => {
                write!(f, "Model key '{key}' not found in artifact.")
            }
            // ---- Artifact reading ----
            VerifyError::Io { path, reason } => {
                write!(f, "Failed to read artifact {path}: {reason}")
            }
            VerifyError::MalformedArtifact { path, reason } => {
                write!(f, "Malformed artifact {path}: {reason}")
            }
            VerifyError::StepCountMismatch { key, expected, actual } => {
                write!(
                    f,
                    "Step count mismatch for '{key}': expected {expected} lead-time steps, got {actual}"
                )
            }
            // ---- Labeled datasets ----
            VerifyError::MissingVariable { name } => {
                write!(f, "Dataset has no variable named '{name}'.")
            }
            VerifyError::MissingAttribute { variable, attr } => {
                write!(f, "Dataset variable '{variable}' has no '{attr}' attribute.")
            }
            // ---- Configuration ----
            VerifyError::InvalidConfig { field, reason } => {
                write!(f, "Invalid configuration value for '{field}': {reason}")
            }
            VerifyError::InvalidWindow { end_index, window_size } => {
                write!(
                    f,
                    "Invalid landfall window: end index {end_index}, window size {window_size}. End step and window must be >= 1."
                )
            }
            // ---- Rendering ----
            VerifyError::Render { reason } => write!(f, "Rendering failed: {reason}"),
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<VerifyError> for PyErr {
    fn from(err: VerifyError) -> PyErr {
        PyValueError::new_err(format!("VerifyError: {err}"))
    }
}
