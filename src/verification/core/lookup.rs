//! Keyed sample tables and the missing-model substitution policy.
//!
//! Purpose
//! -------
//! Hold the per-model sample arrays for one verification variable and
//! resolve model keys against it. An absent key is a data-availability gap,
//! not a failure: [`lookup_or_missing`] substitutes an all-missing array so
//! the figure shows a blank line for that model.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every array in a [`SampleTable`] has the table's step count; this is
//!   checked on insertion.
//! - Keys are compared verbatim (case-sensitive).
use crate::verification::{
    core::samples::SampleArray,
    errors::{VerifyError, VerifyResult},
};
use std::{borrow::Cow, collections::BTreeMap};
use tracing::warn;

/// `SampleTable` — model key → sample array for one verification variable.
///
/// Fields
/// ------
/// - `n_steps`: lead-time steps shared by every entry.
/// - `entries`: arrays keyed by model identifier, iterated in key order.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable {
    n_steps: usize,
    entries: BTreeMap<String, SampleArray>,
}

impl SampleTable {
    /// Empty table whose entries must all have `n_steps` columns.
    pub fn new(n_steps: usize) -> SampleTable {
        SampleTable { n_steps, entries: BTreeMap::new() }
    }

    /// Insert (or replace) the array for `key`.
    ///
    /// Errors
    /// ------
    /// - `VerifyError::StepCountMismatch`
    ///   Returned when `samples.n_steps() != self.n_steps()`.
    pub fn insert(&mut self, key: impl Into<String>, samples: SampleArray) -> VerifyResult<()> {
        let key = key.into();
        if samples.n_steps() != self.n_steps {
            return Err(VerifyError::StepCountMismatch {
                key,
                expected: self.n_steps,
                actual: samples.n_steps(),
            });
        }
        self.entries.insert(key, samples);
        Ok(())
    }

    /// Look up `key`, reporting an absent key as `MissingModelKey`.
    pub fn get(&self, key: &str) -> VerifyResult<&SampleArray> {
        self.entries.get(key).ok_or_else(|| VerifyError::MissingModelKey { key: key.to_string() })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Model keys present in the table, in key order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Resolve `model_key` in `table`, substituting an all-missing array when
/// the key is absent.
///
/// Parameters
/// ----------
/// - `model_key`: model identifier to resolve.
/// - `table`: per-model sample arrays for one variable.
///
/// Returns
/// -------
/// `Cow<'_, SampleArray>`
///   - `Cow::Borrowed` of the stored array when the key is present.
///   - `Cow::Owned(SampleArray::missing(table.n_steps()))` otherwise; a
///     warning is logged.
///
/// Notes
/// -----
/// - Never fails. The substitute has exactly `table.n_steps()` columns.
pub fn lookup_or_missing<'a>(model_key: &str, table: &'a SampleTable) -> Cow<'a, SampleArray> {
    match table.get(model_key) {
        Ok(samples) => Cow::Borrowed(samples),
        Err(err) => {
            warn!(model = model_key, %err, "substituting all-missing samples");
            Cow::Owned(SampleArray::missing(table.n_steps()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Step-count enforcement on insertion.
    // - Present-key borrowing and absent-key substitution in
    //   `lookup_or_missing`.
    // -------------------------------------------------------------------------

    fn table_with_tigge() -> SampleTable {
        let mut table = SampleTable::new(3);
        table
            .insert("tigge", SampleArray::new(array![[1.0, 2.0, 3.0], [2.0, 3.0, 4.0]]))
            .expect("3-step array fits a 3-step table");
        table
    }

    #[test]
    // Purpose
    // -------
    // Ensure inserting an array with the wrong width is rejected.
    //
    // Given
    // -----
    // - A 3-step table and a 2-column array.
    //
    // Expect
    // ------
    // - `StepCountMismatch { expected: 3, actual: 2 }` and the table stays
    //   unchanged.
    fn insert_rejects_step_count_mismatch() {
        let mut table = table_with_tigge();

        let result = table.insert("aurora", SampleArray::new(Array2::zeros((4, 2))));

        assert_eq!(
            result.unwrap_err(),
            VerifyError::StepCountMismatch { key: "aurora".into(), expected: 3, actual: 2 }
        );
        assert!(!table.contains("aurora"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    // Purpose
    // -------
    // Verify that a present key is borrowed without copying.
    //
    // Given
    // -----
    // - A table holding "tigge".
    //
    // Expect
    // ------
    // - `Cow::Borrowed` pointing at the stored array.
    fn lookup_or_missing_borrows_present_key() {
        let table = table_with_tigge();

        let resolved = lookup_or_missing("tigge", &table);

        assert!(matches!(resolved, Cow::Borrowed(_)));
        assert_eq!(resolved.n_samples(), 2);
    }

    #[test]
    // Purpose
    // -------
    // Verify the absent-key substitution policy.
    //
    // Given
    // -----
    // - A 3-step table without "fourcastnet".
    //
    // Expect
    // ------
    // - An owned array with exactly 3 steps, fully missing.
    // - `get` reports the same key as `MissingModelKey`.
    fn lookup_or_missing_substitutes_absent_key() {
        let table = table_with_tigge();

        let resolved = lookup_or_missing("fourcastnet", &table);

        assert!(matches!(resolved, Cow::Owned(_)));
        assert_eq!(resolved.n_steps(), 3);
        assert!(resolved.is_all_missing());
        assert_eq!(
            table.get("fourcastnet").unwrap_err(),
            VerifyError::MissingModelKey { key: "fourcastnet".into() }
        );
    }
}
