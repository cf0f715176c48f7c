//! config — run configuration for the verification figures.
//!
//! Purpose
//! -------
//! Describe *which* artifacts feed *which* figure panels: the data
//! directory, the lead-time grid, and the model / variable / metric lists of
//! the RMSE, landfall, and skill figures. Rendering options live in
//! [`style::RenderStyle`] and are handed explicitly to the rendering sink.
//!
//! Key behaviors
//! -------------
//! - [`VerifyConfig`] deserializes from TOML; every section and field has a
//!   default matching the published figures, so an empty file is valid.
//! - [`VerifyConfig::validate`] checks the numeric constraints once, before
//!   any artifact is read.
//! - Artifact paths follow the on-disk layout of the figure data directory
//!   (`fig_1/`, `fig_2/`, `fig_3/`).
//!
//! Example
//! -------
//! ```toml
//! [data]
//! dir = "./data"
//!
//! [rmse]
//! variables = ["TMQ", "PSL", "WIND850", "TMQ_bias"]
//!
//! [landfall]
//! timesteps = [17, 29, 41]
//! window = 12
//!
//! [skill]
//! threshold = 500
//! uswc = true
//!
//! [style]
//! darkmode = true
//! ```

pub mod style;

pub use self::style::{FontSizes, Palette, RenderStyle, VariableLabels};

use crate::verification::{
    core::{LandfallWindowSpec, LeadTimeAxis},
    errors::{VerifyError, VerifyResult},
};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerifyConfig {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub lead_time: LeadTimeConfig,

    #[serde(default)]
    pub rmse: RmseConfig,

    #[serde(default)]
    pub landfall: LandfallConfig,

    #[serde(default)]
    pub skill: SkillConfig,

    #[serde(default)]
    pub style: RenderStyle,
}

/// Location of the artifact tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { dir: default_data_dir() }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

/// Lead-time grid shared by every figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadTimeConfig {
    #[serde(default = "default_n_steps")]
    pub n_steps: usize,

    #[serde(default = "default_step_hours")]
    pub step_hours: f64,
}

impl Default for LeadTimeConfig {
    fn default() -> Self {
        Self { n_steps: default_n_steps(), step_hours: default_step_hours() }
    }
}

fn default_n_steps() -> usize {
    crate::verification::core::lead_time::DEFAULT_N_STEPS
}

fn default_step_hours() -> f64 {
    crate::verification::core::lead_time::DEFAULT_STEP_HOURS
}

/// RMSE / bias line figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RmseConfig {
    #[serde(default = "default_rmse_variables")]
    pub variables: Vec<String>,

    #[serde(default = "default_rmse_models")]
    pub models: Vec<String>,
}

impl Default for RmseConfig {
    fn default() -> Self {
        Self { variables: default_rmse_variables(), models: default_rmse_models() }
    }
}

fn default_rmse_variables() -> Vec<String> {
    ["TMQ", "PSL", "WIND850", "TMQ_bias"].map(String::from).to_vec()
}

fn default_rmse_models() -> Vec<String> {
    ["fourcastnet", "fourcastnetv2", "panguweather", "tigge", "graphcast37", "aurora"]
        .map(String::from)
        .to_vec()
}

/// Landfall-error box-plot figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandfallConfig {
    #[serde(default = "default_landfall_models")]
    pub models: Vec<String>,

    /// 1-based end steps of the pooled windows.
    #[serde(default = "default_landfall_timesteps")]
    pub timesteps: Vec<usize>,

    /// Steps pooled on the earlier side of each end step.
    #[serde(default = "default_landfall_window")]
    pub window: usize,
}

impl Default for LandfallConfig {
    fn default() -> Self {
        Self {
            models: default_landfall_models(),
            timesteps: default_landfall_timesteps(),
            window: default_landfall_window(),
        }
    }
}

fn default_landfall_models() -> Vec<String> {
    ["tigge", "graphcast37", "panguweather", "fourcastnet", "fourcastnetv2", "aurora_ft"]
        .map(String::from)
        .to_vec()
}

fn default_landfall_timesteps() -> Vec<usize> {
    crate::verification::core::window::DEFAULT_END_STEPS.to_vec()
}

fn default_landfall_window() -> usize {
    crate::verification::core::window::DEFAULT_WINDOW
}

/// CSI / POD / FAR skill figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillConfig {
    /// Model keys used in artifact file names, in plotting order.
    #[serde(default = "default_skill_models")]
    pub models: Vec<String>,

    #[serde(default = "default_skill_metrics")]
    pub metrics: Vec<String>,

    /// Distance threshold in km (1000 or 500 in the published data).
    #[serde(default = "default_skill_threshold")]
    pub threshold: u32,

    /// Restrict to U.S. West Coast events.
    #[serde(default = "default_true")]
    pub uswc: bool,

    /// Restrict to landfalling events.
    #[serde(default)]
    pub landfalling: bool,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            models: default_skill_models(),
            metrics: default_skill_metrics(),
            threshold: default_skill_threshold(),
            uswc: true,
            landfalling: false,
        }
    }
}

fn default_skill_models() -> Vec<String> {
    ["tigge", "panguweather", "graphcast37", "fourcastnetv2", "fourcastnet", "aurora_ft"]
        .map(String::from)
        .to_vec()
}

fn default_skill_metrics() -> Vec<String> {
    ["CSI", "POD", "FAR"].map(String::from).to_vec()
}

fn default_skill_threshold() -> u32 {
    1000
}

fn default_true() -> bool {
    true
}

impl VerifyConfig {
    /// Parse and validate a TOML document.
    ///
    /// Errors
    /// ------
    /// - `VerifyError::InvalidConfig` with `field = "toml"` when parsing
    ///   fails, or the offending field when validation fails.
    pub fn from_toml_str(text: &str) -> VerifyResult<VerifyConfig> {
        let config: VerifyConfig = toml::from_str(text)
            .map_err(|err| VerifyError::InvalidConfig { field: "toml", reason: err.to_string() })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_path(path: &Path) -> VerifyResult<VerifyConfig> {
        let text = fs::read_to_string(path).map_err(|err| VerifyError::Io {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        VerifyConfig::from_toml_str(&text)
    }

    /// Check numeric constraints.
    ///
    /// Errors
    /// ------
    /// - `VerifyError::InvalidConfig` for `lead_time.n_steps == 0`,
    ///   non-positive `lead_time.step_hours`, `style.font_multiplier <= 0`,
    ///   or an empty model list.
    /// - Errors from [`LandfallWindowSpec::new`] for the landfall section.
    pub fn validate(&self) -> VerifyResult<()> {
        if self.lead_time.n_steps == 0 {
            return Err(VerifyError::InvalidConfig {
                field: "lead_time.n_steps",
                reason: "must be > 0".to_string(),
            });
        }
        self.axis()?;
        self.landfall_spec()?;

        let model_lists: [(&'static str, &[String]); 3] = [
            ("rmse.models", &self.rmse.models),
            ("landfall.models", &self.landfall.models),
            ("skill.models", &self.skill.models),
        ];
        for (field, models) in model_lists {
            if models.is_empty() {
                return Err(VerifyError::InvalidConfig {
                    field,
                    reason: "at least one model is required".to_string(),
                });
            }
        }

        self.style.validate()
    }

    /// Lead-time axis of the configured grid.
    pub fn axis(&self) -> VerifyResult<LeadTimeAxis> {
        LeadTimeAxis::new(self.lead_time.n_steps, self.lead_time.step_hours)
    }

    /// Landfall window specification of the box-plot figure.
    pub fn landfall_spec(&self) -> VerifyResult<LandfallWindowSpec> {
        LandfallWindowSpec::new(self.landfall.timesteps.clone(), self.landfall.window)
    }

    /// Sample-table artifact for an RMSE / bias variable.
    ///
    /// `"TMQ_bias"`-style variables are stored as `{base}_bias.json`, every
    /// other variable as `{var}_RMSE.json`.
    pub fn rmse_artifact(&self, variable: &str) -> PathBuf {
        let file = match variable.strip_suffix("_bias") {
            Some(base) => format!("{base}_bias.json"),
            None => format!("{variable}_RMSE.json"),
        };
        self.data.dir.join("fig_1").join(file)
    }

    /// Per-step landfall-error artifact of one model.
    pub fn landfall_artifact(&self, model: &str) -> PathBuf {
        self.data.dir.join("fig_2").join(format!("{model}_lat_landfall_error_degrees.json"))
    }

    /// Skill-metric dataset artifact of one model.
    pub fn skill_artifact(&self, model: &str) -> PathBuf {
        let uswc = if self.skill.uswc { "_USWC" } else { "" };
        let landfalling = if self.skill.landfalling { "_landfalling" } else { "" };
        self.data.dir.join("fig_3").join(format!("{model}_metrics{uswc}{landfalling}.json"))
    }
}
