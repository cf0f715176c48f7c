//! figures — load artifacts and aggregate the panels of each figure.
//!
//! Purpose
//! -------
//! Glue the artifact readers to the panel builders for the three
//! verification figures, applying the data-gap policy: a missing artifact
//! or model key is logged and substituted, anything else is returned as an
//! error.
//!
//! Key behaviors
//! -------------
//! - [`rmse_panels`]: one [`LinePanel`] per configured variable.
//! - [`landfall_figure_panels`]: one [`BoxPanel`] per configured end step.
//! - [`skill_figure_panels`]: one [`MetricPanel`] per configured metric.
//!   Series are keyed by the skill legend name of each model; a model
//!   whose dataset is missing keeps an all-missing series.
use crate::{
    artifacts::{optional, read_labeled_dataset, read_sample_table, read_step_errors},
    config::{VerifyConfig, style::skill_legend_name},
    verification::{
        errors::VerifyResult,
        panels::{BoxPanel, LinePanel, MetricPanel, landfall_panels, skill_panels, summarize_variable},
    },
};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Aggregate the RMSE / bias line panels.
///
/// Errors
/// ------
/// - Fatal artifact errors (`Io`, `MalformedArtifact`, `StepCountMismatch`).
///   Missing artifacts produce `DataMissing` panels instead.
pub fn rmse_panels(config: &VerifyConfig) -> VerifyResult<Vec<LinePanel>> {
    let n_steps = config.lead_time.n_steps;
    let mut panels = Vec::with_capacity(config.rmse.variables.len());
    for variable in &config.rmse.variables {
        let path = config.rmse_artifact(variable);
        let table = optional(read_sample_table(&path, n_steps))?;
        panels.push(summarize_variable(table.as_ref(), variable, &config.rmse.models, n_steps));
    }
    info!(panels = panels.len(), "RMSE figure aggregated");
    Ok(panels)
}

/// Aggregate the landfall-error box panels.
pub fn landfall_figure_panels(config: &VerifyConfig) -> VerifyResult<Vec<BoxPanel>> {
    let spec = config.landfall_spec()?;
    let axis = config.axis()?;

    let mut sequences = BTreeMap::new();
    for model in &config.landfall.models {
        if let Some(per_step) = optional(read_step_errors(&config.landfall_artifact(model)))? {
            sequences.insert(model.clone(), per_step);
        }
    }

    let panels = landfall_panels(&sequences, &config.landfall.models, &spec, &axis);
    info!(panels = panels.len(), models = sequences.len(), "landfall figure aggregated");
    Ok(panels)
}

/// Aggregate the CSI / POD / FAR metric panels.
///
/// Errors
/// ------
/// - Fatal artifact errors, and `MissingVariable` / `MissingAttribute` from
///   datasets lacking the configured metric at the configured threshold.
pub fn skill_figure_panels(config: &VerifyConfig) -> VerifyResult<Vec<MetricPanel>> {
    let axis = config.axis()?;

    let mut datasets = Vec::with_capacity(config.skill.models.len());
    for model in &config.skill.models {
        let dataset = optional(read_labeled_dataset(&config.skill_artifact(model)))?;
        if dataset.is_none() {
            warn!(model = model.as_str(), "skill dataset missing; plotting an empty series");
        }
        datasets.push((skill_legend_name(model).to_string(), dataset));
    }

    let panels = skill_panels(&datasets, &config.skill.metrics, config.skill.threshold, &axis)?;
    let present = datasets.iter().filter(|(_, dataset)| dataset.is_some()).count();
    info!(panels = panels.len(), models = datasets.len(), present, "skill figure aggregated");
    Ok(panels)
}
