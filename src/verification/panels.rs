//! panels — per-figure aggregation across model keys.
//!
//! Purpose
//! -------
//! Apply the core transforms to every model of one figure panel, in the
//! panel's model order, and record for each model whether its data was
//! present or substituted. A panel is what the rendering sink consumes.
//!
//! Key behaviors
//! -------------
//! - [`summarize_variable`] builds a [`LinePanel`] (mean ± SEM per model) for
//!   one verification variable. A missing artifact marks the whole panel
//!   [`PanelStatus::DataMissing`]; a missing model key marks only that
//!   model.
//! - [`landfall_panels`] builds one [`BoxPanel`] per landfall end step, each
//!   holding one pooled error distribution per model.
//! - [`skill_panels`] builds one [`MetricPanel`] per skill metric, each
//!   holding one series per model against lead time in days. A model
//!   without a dataset gets an all-missing series on the configured axis.
//!
//! Invariants & assumptions
//! ------------------------
//! - Panel entries follow the caller's model order, not artifact order.
//! - Substituted models always carry arrays of the panel's full length, so
//!   downstream plotting never needs to special-case them.
//! - Skill datasets are trusted; missing variables there are fatal.
use crate::verification::{
    core::{
        LabeledDataset, LandfallErrorWindow, LandfallWindowSpec, LeadTimeAxis, MISSING,
        MetricSeries, SampleTable, SummaryArray, lookup_or_missing, summarize,
        threshold::TIME_COORD, threshold_metric_series,
    },
    errors::{VerifyError, VerifyResult},
};
use ndarray::Array1;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Data availability of one model within a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelStatus {
    /// The model's data was found and aggregated.
    Present,
    /// The artifact was read but had no entry for this model.
    MissingModelKey,
    /// The artifact holding this model's data does not exist.
    MissingArtifact,
}

/// Data availability of a whole panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelStatus {
    /// Every model is present.
    Complete,
    /// At least one model was substituted, at least one is present.
    Partial,
    /// No model has data; the panel should be annotated as missing.
    DataMissing,
}

impl PanelStatus {
    fn from_models<'a>(statuses: impl Iterator<Item = &'a ModelStatus>) -> PanelStatus {
        let (mut present, mut missing) = (0usize, 0usize);
        for status in statuses {
            match status {
                ModelStatus::Present => present += 1,
                _ => missing += 1,
            }
        }
        match (present, missing) {
            (0, _) => PanelStatus::DataMissing,
            (_, 0) => PanelStatus::Complete,
            _ => PanelStatus::Partial,
        }
    }
}

/// Mean ± SEM of one model for one variable.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSummary {
    pub key: String,
    pub status: ModelStatus,
    pub summary: SummaryArray,
}

/// Line panel: one [`ModelSummary`] per model for one variable.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePanel {
    pub variable: String,
    pub status: PanelStatus,
    pub models: Vec<ModelSummary>,
}

impl LinePanel {
    pub fn model(&self, key: &str) -> Option<&ModelSummary> {
        self.models.iter().find(|m| m.key == key)
    }
}

/// Pooled landfall errors of one model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDistribution {
    pub key: String,
    pub status: ModelStatus,
    pub window: LandfallErrorWindow,
}

/// Box panel: one distribution per model for one landfall end step.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPanel {
    pub end_step: usize,
    pub label: String,
    pub distributions: Vec<ModelDistribution>,
}

/// Skill series of one model against lead time in days.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelMetric {
    pub key: String,
    pub status: ModelStatus,
    pub days: Array1<f64>,
    pub metric: MetricSeries,
}

/// Metric panel: one series per model for one skill metric.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricPanel {
    pub metric: String,
    pub threshold: u32,
    pub status: PanelStatus,
    pub series: Vec<ModelMetric>,
}

/// Summarize one verification variable for every model of a line panel.
///
/// Parameters
/// ----------
/// - `table`: `Option<&SampleTable>`
///   Per-model samples for `variable`; `None` when the artifact was missing.
/// - `variable`: name of the verification variable (panel title key).
/// - `models`: model keys in plotting order.
/// - `n_steps`: step count used for substitutes when `table` is `None`.
///   When a table is present its own step count applies.
///
/// Returns
/// -------
/// `LinePanel` with one entry per model, substituted entries summarizing
/// to missing means and zero SEM.
pub fn summarize_variable(
    table: Option<&SampleTable>, variable: &str, models: &[impl AsRef<str>], n_steps: usize,
) -> LinePanel {
    let entries: Vec<ModelSummary> = match table {
        None => {
            warn!(variable, "artifact missing; every model substituted");
            models
                .iter()
                .map(|key| ModelSummary {
                    key: key.as_ref().to_string(),
                    status: ModelStatus::MissingArtifact,
                    summary: SummaryArray::all_missing(n_steps),
                })
                .collect()
        }
        Some(table) => models
            .iter()
            .map(|key| {
                let key = key.as_ref();
                let status = if table.contains(key) {
                    ModelStatus::Present
                } else {
                    ModelStatus::MissingModelKey
                };
                let samples = lookup_or_missing(key, table);
                ModelSummary { key: key.to_string(), status, summary: summarize(&samples) }
            })
            .collect(),
    };

    let status = PanelStatus::from_models(entries.iter().map(|m| &m.status));
    info!(variable, ?status, models = entries.len(), "line panel aggregated");
    LinePanel { variable: variable.to_string(), status, models: entries }
}

/// Build one box panel per landfall end step.
///
/// Parameters
/// ----------
/// - `sequences`: per-step error sequences keyed by model; a model absent
///   from the map had no artifact and gets empty distributions.
/// - `models`: model keys in plotting order.
/// - `spec`: end steps and window width.
/// - `axis`: lead-time axis used for the panel labels.
pub fn landfall_panels(
    sequences: &BTreeMap<String, Vec<Array1<f64>>>, models: &[impl AsRef<str>],
    spec: &LandfallWindowSpec, axis: &LeadTimeAxis,
) -> Vec<BoxPanel> {
    let per_model: Vec<(String, ModelStatus, Vec<LandfallErrorWindow>)> = models
        .iter()
        .map(|key| {
            let key = key.as_ref();
            match sequences.get(key) {
                Some(per_step) => (key.to_string(), ModelStatus::Present, spec.windows(per_step)),
                None => {
                    warn!(model = key, "landfall errors missing; plotting empty distributions");
                    let empty = vec![LandfallErrorWindow::empty(); spec.end_steps().len()];
                    (key.to_string(), ModelStatus::MissingArtifact, empty)
                }
            }
        })
        .collect();

    spec.end_steps()
        .iter()
        .enumerate()
        .map(|(idx, &end_step)| BoxPanel {
            end_step,
            label: axis.window_label(end_step, spec.window()),
            distributions: per_model
                .iter()
                .map(|(key, status, windows)| ModelDistribution {
                    key: key.clone(),
                    status: *status,
                    window: windows[idx].clone(),
                })
                .collect(),
        })
        .collect()
}

/// Build one metric panel per skill metric.
///
/// Parameters
/// ----------
/// - `datasets`: `(series key, dataset)` pairs in plotting order; `None`
///   when the model's dataset artifact was missing.
/// - `metrics`: metric names, e.g. `["CSI", "POD", "FAR"]`.
/// - `threshold`: distance threshold in km selecting `"{metric}_{threshold}"`.
/// - `axis`: converts each dataset's `time` coordinate (in steps) to days,
///   and gives the lead times of substituted series.
///
/// Errors
/// ------
/// - `VerifyError::MissingVariable` when a dataset lacks the metric variable
///   or the `time` coordinate.
/// - `VerifyError::MissingAttribute` when `std` / `count` are absent.
pub fn skill_panels(
    datasets: &[(String, Option<LabeledDataset>)], metrics: &[impl AsRef<str>], threshold: u32,
    axis: &LeadTimeAxis,
) -> VerifyResult<Vec<MetricPanel>> {
    let mut panels = Vec::with_capacity(metrics.len());
    for metric in metrics {
        let metric = metric.as_ref();
        let mut series = Vec::with_capacity(datasets.len());
        for (key, dataset) in datasets {
            let entry = match dataset {
                Some(dataset) => {
                    let time = dataset
                        .time()
                        .ok_or_else(|| VerifyError::MissingVariable { name: TIME_COORD.to_string() })?;
                    ModelMetric {
                        key: key.clone(),
                        status: ModelStatus::Present,
                        days: axis.coordinate_days(time),
                        metric: threshold_metric_series(dataset, metric, threshold)?,
                    }
                }
                None => ModelMetric {
                    key: key.clone(),
                    status: ModelStatus::MissingArtifact,
                    days: axis.days(),
                    metric: MetricSeries {
                        series: Array1::from_elem(axis.n_steps(), MISSING),
                        std_error: Array1::zeros(axis.n_steps()),
                    },
                },
            };
            series.push(entry);
        }
        let status = PanelStatus::from_models(series.iter().map(|m| &m.status));
        info!(metric, threshold, ?status, models = series.len(), "metric panel aggregated");
        panels.push(MetricPanel { metric: metric.to_string(), threshold, status, series });
    }
    Ok(panels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verification::core::{DataVariable, SampleArray};
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Line panels for present tables, missing keys, and missing artifacts.
    // - Box panels with present and missing landfall sequences.
    // - Skill panels, including the missing-`time` error path.
    //
    // They intentionally DO NOT cover:
    // - Reading artifacts from disk (see `artifacts` and the integration
    //   tests).
    // -------------------------------------------------------------------------

    fn rmse_table() -> SampleTable {
        let mut table = SampleTable::new(2);
        table.insert("tigge", SampleArray::new(array![[1.0, 2.0], [3.0, f64::NAN]])).unwrap();
        table.insert("aurora", SampleArray::new(array![[2.0, 4.0]])).unwrap();
        table
    }

    #[test]
    // Purpose
    // -------
    // Verify model order, per-model status, and partial panel status.
    //
    // Given
    // -----
    // - A table with "tigge" and "aurora"; requested order
    //   `["aurora", "fourcastnet", "tigge"]`.
    //
    // Expect
    // ------
    // - Entries in requested order; "fourcastnet" is `MissingModelKey` with
    //   a missing mean and zero SEM of length 2; panel is `Partial`.
    fn summarize_variable_marks_missing_keys() {
        let table = rmse_table();

        let panel = summarize_variable(Some(&table), "TMQ", &["aurora", "fourcastnet", "tigge"], 2);

        let keys: Vec<&str> = panel.models.iter().map(|m| m.key.as_str()).collect();
        assert_eq!(keys, ["aurora", "fourcastnet", "tigge"]);
        assert_eq!(panel.status, PanelStatus::Partial);

        let missing = panel.model("fourcastnet").unwrap();
        assert_eq!(missing.status, ModelStatus::MissingModelKey);
        assert_eq!(missing.summary.n_steps(), 2);
        assert!(missing.summary.mean.iter().all(|m| m.is_nan()));
        assert_eq!(missing.summary.sem, array![0.0, 0.0]);

        let tigge = panel.model("tigge").unwrap();
        assert_eq!(tigge.status, ModelStatus::Present);
        assert_eq!(tigge.summary.mean, array![2.0, 2.0]);
        assert_relative_eq!(tigge.summary.sem[0], std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a missing artifact substitutes every model and flags the panel.
    //
    // Given
    // -----
    // - `table = None`, two models, 41 steps.
    //
    // Expect
    // ------
    // - Both entries `MissingArtifact`, length 41, panel `DataMissing`.
    fn summarize_variable_missing_artifact_flags_panel() {
        let panel = summarize_variable(None, "PSL", &["tigge", "aurora"], 41);

        assert_eq!(panel.status, PanelStatus::DataMissing);
        for entry in &panel.models {
            assert_eq!(entry.status, ModelStatus::MissingArtifact);
            assert_eq!(entry.summary.n_steps(), 41);
        }
    }

    #[test]
    fn summarize_variable_all_present_is_complete() {
        let panel = summarize_variable(Some(&rmse_table()), "TMQ", &["tigge", "aurora"], 2);

        assert_eq!(panel.status, PanelStatus::Complete);
    }

    #[test]
    // Purpose
    // -------
    // Verify box panels: one per end step, one distribution per model, and
    // empty distributions for a model without an artifact.
    //
    // Given
    // -----
    // - "tigge" with steps `[[1], [2, 3], [4, 5, 6]]`; "aurora" absent.
    // - End steps `[2, 3]`, window 1.
    //
    // Expect
    // ------
    // - Panel 0: tigge `[2, 3]`, aurora empty; panel 1: tigge `[4, 5, 6]`.
    // - Labels built from a daily lead-time axis.
    fn landfall_panels_pool_per_end_step() {
        let mut sequences = BTreeMap::new();
        sequences.insert("tigge".to_string(), vec![array![1.0], array![2.0, 3.0], array![4.0, 5.0, 6.0]]);
        let spec = LandfallWindowSpec::new(vec![2, 3], 1).unwrap();
        let axis = LeadTimeAxis::new(41, 24.0).unwrap();

        let panels = landfall_panels(&sequences, &["tigge", "aurora"], &spec, &axis);

        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0].end_step, 2);
        assert_eq!(panels[0].label, "Days 0.0 - 1.0");
        assert_eq!(panels[1].label, "Days 1.0 - 2.0");
        assert_eq!(panels[0].distributions[0].window.values(), &array![2.0, 3.0]);
        assert_eq!(panels[0].distributions[1].status, ModelStatus::MissingArtifact);
        assert!(panels[0].distributions[1].window.is_empty());
        assert_eq!(panels[1].distributions[0].window.values(), &array![4.0, 5.0, 6.0]);
    }

    fn skill_dataset(csi: Array1<f64>, time: Array1<f64>) -> LabeledDataset {
        LabeledDataset::new().with_coord(TIME_COORD, time).with_variable(
            "CSI_1000",
            DataVariable::new(csi).with_attr("std", 0.4).with_attr("count", 16.0),
        )
    }

    #[test]
    // Purpose
    // -------
    // Verify skill panels convert time to days and keep model order.
    //
    // Given
    // -----
    // - Two datasets with `CSI_1000` and `time = [1, 2]`.
    //
    // Expect
    // ------
    // - One CSI panel, two series, days `[0.25, 0.5]`, std error 0.1.
    fn skill_panels_build_series_per_model() {
        let datasets = vec![
            ("HRES".to_string(), Some(skill_dataset(array![0.9, 0.8], array![1.0, 2.0]))),
            ("Aurora".to_string(), Some(skill_dataset(array![0.7, 0.6], array![1.0, 2.0]))),
        ];

        let panels = skill_panels(&datasets, &["CSI"], 1000, &LeadTimeAxis::default()).unwrap();

        assert_eq!(panels.len(), 1);
        assert_eq!(panels[0].metric, "CSI");
        assert_eq!(panels[0].status, PanelStatus::Complete);
        assert_eq!(panels[0].series[0].key, "HRES");
        assert_eq!(panels[0].series[1].days, array![0.25, 0.5]);
        assert_relative_eq!(panels[0].series[1].metric.std_error[0], 0.1, epsilon = 1e-12);
    }

    #[test]
    fn skill_panels_missing_metric_is_fatal() {
        let datasets = vec![("HRES".to_string(), Some(skill_dataset(array![0.9], array![1.0])))];

        let err = skill_panels(&datasets, &["FAR"], 1000, &LeadTimeAxis::default()).unwrap_err();

        assert_eq!(err, VerifyError::MissingVariable { name: "FAR_1000".into() });
    }

    #[test]
    fn skill_panels_missing_time_is_fatal() {
        let ds = LabeledDataset::new().with_variable(
            "CSI_1000",
            DataVariable::new(array![0.5]).with_attr("std", 0.1).with_attr("count", 4.0),
        );

        let err = skill_panels(&[("HRES".to_string(), Some(ds))], &["CSI"], 1000, &LeadTimeAxis::default())
            .unwrap_err();

        assert_eq!(err, VerifyError::MissingVariable { name: "time".into() });
    }

    #[test]
    // Purpose
    // -------
    // Ensure a model without a dataset keeps its place as a gap.
    //
    // Given
    // -----
    // - "HRES" with `CSI_1000`, "Aurora" with no dataset, 3-step axis.
    //
    // Expect
    // ------
    // - Two series in order; Aurora is `MissingArtifact` with days
    //   `[0, 0.25, 0.5]`, an all-missing series, and zero standard error.
    // - Panel status `Partial`.
    fn skill_panels_substitute_missing_dataset() {
        let axis = LeadTimeAxis::new(3, 6.0).unwrap();
        let datasets = vec![
            ("HRES".to_string(), Some(skill_dataset(array![0.9, 0.8], array![1.0, 2.0]))),
            ("Aurora".to_string(), None),
        ];

        let panels = skill_panels(&datasets, &["CSI"], 1000, &axis).unwrap();

        let panel = &panels[0];
        assert_eq!(panel.status, PanelStatus::Partial);
        assert_eq!(panel.series.len(), 2);
        assert_eq!(panel.series[0].status, ModelStatus::Present);

        let gap = &panel.series[1];
        assert_eq!(gap.key, "Aurora");
        assert_eq!(gap.status, ModelStatus::MissingArtifact);
        assert_eq!(gap.days, array![0.0, 0.25, 0.5]);
        assert!(gap.metric.series.iter().all(|v| v.is_nan()));
        assert_eq!(gap.metric.std_error, array![0.0, 0.0, 0.0]);
    }
}
