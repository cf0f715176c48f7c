//! Reader for labeled skill-score datasets.
//!
//! Layout:
//!
//! ```json
//! {
//!   "coords": { "time": [1, 2, 3] },
//!   "variables": {
//!     "CSI_1000": { "values": [0.8, 0.7, null], "attrs": { "std": 0.3, "count": 120 } }
//!   }
//! }
//! ```
use crate::{
    artifacts::{fill_missing, read_json},
    verification::{
        core::{DataVariable, LabeledDataset},
        errors::VerifyResult,
    },
};
use ndarray::Array1;
use serde::Deserialize;
use std::{collections::BTreeMap, path::Path};

#[derive(Debug, Deserialize)]
struct RawDataset {
    #[serde(default)]
    coords: BTreeMap<String, Vec<Option<f64>>>,
    #[serde(default)]
    variables: BTreeMap<String, RawVariable>,
}

#[derive(Debug, Deserialize)]
struct RawVariable {
    values: Vec<Option<f64>>,
    #[serde(default)]
    attrs: BTreeMap<String, f64>,
}

/// Read a labeled dataset artifact.
pub fn read_labeled_dataset(path: &Path) -> VerifyResult<LabeledDataset> {
    let raw: RawDataset = read_json(path)?;

    let coords = raw
        .coords
        .into_iter()
        .map(|(name, values)| (name, Array1::from_vec(fill_missing(values))))
        .collect();
    let variables = raw
        .variables
        .into_iter()
        .map(|(name, var)| {
            let values = Array1::from_vec(fill_missing(var.values));
            (name, DataVariable { values, attrs: var.attrs })
        })
        .collect();

    Ok(LabeledDataset { coords, variables })
}
