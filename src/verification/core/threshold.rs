//! Threshold skill-score series (CSI / POD / FAR) from labeled datasets.
//!
//! Purpose
//! -------
//! Extract a pre-computed categorical skill score at a given distance
//! threshold from a labeled multi-variable dataset and derive its standard
//! error from the stored `std` / `count` attributes.
//!
//! Invariants & assumptions
//! ------------------------
//! - Variables are named `"{metric}_{threshold}"`, e.g. `"CSI_1000"`.
//! - The `std` and `count` attributes are trusted as written upstream. They
//!   are not recomputed or validated; a zero count yields an infinite
//!   standard error.
//! - The series is returned unmodified; no filtering happens here.
use crate::verification::errors::{VerifyError, VerifyResult};
use ndarray::Array1;
use std::collections::BTreeMap;

/// Name of the lead-time coordinate in skill datasets.
pub const TIME_COORD: &str = "time";

/// One named variable of a [`LabeledDataset`].
#[derive(Debug, Clone, PartialEq)]
pub struct DataVariable {
    pub values: Array1<f64>,
    pub attrs: BTreeMap<String, f64>,
}

impl DataVariable {
    pub fn new(values: Array1<f64>) -> DataVariable {
        DataVariable { values, attrs: BTreeMap::new() }
    }

    /// Builder-style attribute setter.
    pub fn with_attr(mut self, name: impl Into<String>, value: f64) -> DataVariable {
        self.attrs.insert(name.into(), value);
        self
    }
}

/// `LabeledDataset` — coordinates plus named variables with scalar
/// attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabeledDataset {
    pub coords: BTreeMap<String, Array1<f64>>,
    pub variables: BTreeMap<String, DataVariable>,
}

impl LabeledDataset {
    pub fn new() -> LabeledDataset {
        LabeledDataset::default()
    }

    pub fn with_coord(mut self, name: impl Into<String>, values: Array1<f64>) -> LabeledDataset {
        self.coords.insert(name.into(), values);
        self
    }

    pub fn with_variable(mut self, name: impl Into<String>, var: DataVariable) -> LabeledDataset {
        self.variables.insert(name.into(), var);
        self
    }

    pub fn variable(&self, name: &str) -> VerifyResult<&DataVariable> {
        self.variables
            .get(name)
            .ok_or_else(|| VerifyError::MissingVariable { name: name.to_string() })
    }

    /// Lead-time coordinate in steps, or `None` when the dataset has none.
    pub fn time(&self) -> Option<&Array1<f64>> {
        self.coords.get(TIME_COORD)
    }
}

/// `MetricSeries` — a skill-score series and its broadcast standard error.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    pub series: Array1<f64>,
    pub std_error: Array1<f64>,
}

impl MetricSeries {
    /// Lower and upper edges of the `series ± std_error` band.
    pub fn band(&self) -> (Array1<f64>, Array1<f64>) {
        (&self.series - &self.std_error, &self.series + &self.std_error)
    }
}

/// Variable name for `metric` at `threshold`, e.g. `("CSI", 1000)` →
/// `"CSI_1000"`.
pub fn metric_variable_name(metric: &str, threshold: u32) -> String {
    format!("{metric}_{threshold}")
}

/// Standard error of a metric from its stored `std` and `count`
/// attributes. `count = 0` gives an infinite error.
pub fn sem_from_attrs(std: f64, count: f64) -> f64 {
    std / count.sqrt()
}

/// Extract the `"{metric}_{threshold}"` series and its standard error.
///
/// Returns
/// -------
/// `VerifyResult<MetricSeries>`
///   `series` is the stored values unchanged; `std_error` is
///   `std / sqrt(count)` repeated over the series length.
///
/// Errors
/// ------
/// - `VerifyError::MissingVariable` when the variable is absent.
/// - `VerifyError::MissingAttribute` when `std` or `count` is absent.
pub fn threshold_metric_series(
    dataset: &LabeledDataset, metric: &str, threshold: u32,
) -> VerifyResult<MetricSeries> {
    let name = metric_variable_name(metric, threshold);
    let var = dataset.variable(&name)?;

    let get_attr = |attr: &'static str| {
        var.attrs
            .get(attr)
            .copied()
            .ok_or_else(|| VerifyError::MissingAttribute { variable: name.clone(), attr })
    };
    let std = get_attr("std")?;
    let count = get_attr("count")?;

    let std_error = Array1::from_elem(var.values.len(), sem_from_attrs(std, count));
    Ok(MetricSeries { series: var.values.clone(), std_error })
}
