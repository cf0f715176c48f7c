//! Rendering style passed explicitly to the rendering sink.
//!
//! The aggregation core needs no styling. Everything a renderer needs to
//! reproduce the published look (model colors per light/dark mode, font
//! sizes, model display names, variable titles and axis labels) is carried
//! by [`RenderStyle`] and handed to each [`crate::render::RenderSink`] call.
use crate::verification::errors::{VerifyError, VerifyResult};
use serde::{Deserialize, Serialize};

/// Color used for model keys without an assigned color.
pub const FALLBACK_COLOR: &str = "#808080";

/// Style options of one figure run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    #[serde(default)]
    pub darkmode: bool,

    /// Scales every base font size.
    #[serde(default = "default_font_multiplier")]
    pub font_multiplier: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self { darkmode: false, font_multiplier: default_font_multiplier() }
    }
}

fn default_font_multiplier() -> f64 {
    1.25
}

impl RenderStyle {
    pub fn validate(&self) -> VerifyResult<()> {
        if !self.font_multiplier.is_finite() || self.font_multiplier <= 0.0 {
            return Err(VerifyError::InvalidConfig {
                field: "style.font_multiplier",
                reason: format!("must be finite and > 0; got {}", self.font_multiplier),
            });
        }
        Ok(())
    }

    pub fn palette(&self) -> Palette {
        if self.darkmode { Palette::Dark } else { Palette::Light }
    }

    /// Model color for this style, falling back to [`FALLBACK_COLOR`].
    pub fn color(&self, model: &str) -> &'static str {
        self.palette().color(model).unwrap_or(FALLBACK_COLOR)
    }

    pub fn font_sizes(&self) -> FontSizes {
        FontSizes::scaled(self.font_multiplier)
    }
}

/// Model color palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Light,
    Dark,
}

impl Palette {
    /// Color of a model key or display name.
    ///
    /// Both the artifact key (`"graphcast37"`) and the display name
    /// (`"GraphCast"`) resolve; `"tigge"` and `"HRES"` are the same baseline.
    pub fn color(self, model: &str) -> Option<&'static str> {
        let color = match (self, model) {
            (Palette::Light, "fourcastnet" | "FourCastNet") => "#5F559B",
            (Palette::Light, "fourcastnetv2" | "FourCastNetV2" | "FourCastNet V2") => "#0072B2",
            (Palette::Light, "graphcast" | "graphcast37" | "GraphCast") => "#A73C52",
            (Palette::Light, "panguweather" | "PanguWeather") => "#CC79A7",
            (Palette::Light, "tigge" | "HRES") => "#000000",
            (Palette::Light, "aurora" | "aurora_ft" | "Aurora") => "#DDAA33",
            (Palette::Dark, "fourcastnet" | "FourCastNet") => "#F44336",
            (Palette::Dark, "fourcastnetv2" | "FourCastNetV2" | "FourCastNet V2") => "#2196F3",
            (Palette::Dark, "graphcast" | "graphcast37" | "GraphCast") => "#AB47BC",
            (Palette::Dark, "panguweather" | "PanguWeather") => "#FF9800",
            (Palette::Dark, "tigge" | "HRES") => "#FFFFFF",
            (Palette::Dark, "aurora" | "aurora_ft" | "Aurora") => "#FFEB3B",
            _ => return None,
        };
        Some(color)
    }
}

/// Display name of a model key; unknown keys are returned unchanged.
pub fn display_name(model: &str) -> &str {
    match model {
        "fourcastnet" => "FourCastNet",
        "fourcastnetv2" => "FourCastNetV2",
        "graphcast" | "graphcast37" => "GraphCast",
        "panguweather" => "PanguWeather",
        "tigge" => "HRES",
        "aurora" | "aurora_ft" => "Aurora",
        other => other,
    }
}

/// Legend name of a model in the skill figure.
///
/// Same as [`display_name`] except for `"fourcastnetv2"`, which the skill
/// legend spells `"FourCastNet V2"`.
pub fn skill_legend_name(model: &str) -> &str {
    match model {
        "fourcastnetv2" => "FourCastNet V2",
        other => display_name(other),
    }
}

/// Font sizes in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizes {
    pub base: f64,
    pub label: f64,
    pub title: f64,
    pub tick: f64,
    pub legend: f64,
    pub suptitle: f64,
}

impl FontSizes {
    /// Base sizes of the line figures scaled by `multiplier`. The legend is
    /// left unscaled.
    pub fn scaled(multiplier: f64) -> FontSizes {
        FontSizes {
            base: 17.0 * multiplier,
            label: 18.0 * multiplier,
            title: 18.0 * multiplier,
            tick: 18.0 * multiplier,
            legend: 18.0,
            suptitle: 15.0 * multiplier,
        }
    }
}

/// Title and axis labeling of one verification variable.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableLabels {
    pub title: String,
    pub ylabel: String,
    /// Factor applied to y tick values for display (Pa → hPa for `PSL`).
    pub y_tick_scale: f64,
}

impl VariableLabels {
    pub fn for_variable(variable: &str) -> VariableLabels {
        let (title, ylabel, y_tick_scale) = match variable {
            "TMQ" => ("Integrated Water Vapor", "RMSE of IWV (kg/m²)", 1.0),
            "TMQ_bias" => ("Integrated Water Vapor Bias", "Bias of IWV (kg/m²)", 1.0),
            "U850" => ("850hPa U-Wind Component", "RMSE of 850hPa U-Wind (m/s)", 1.0),
            "V850" => ("850hPa V-Wind Component", "RMSE of 850hPa V-Wind (m/s)", 1.0),
            "WIND850" => ("850hPa Wind Magnitude", "RMSE of 850hPa Wind (m/s)", 1.0),
            "PSL" => ("Sea Level Pressure", "RMSE of SLP (hPa)", 0.01),
            other => {
                return VariableLabels {
                    title: format!("RMSE for {other}"),
                    ylabel: "RMSE".to_string(),
                    y_tick_scale: 1.0,
                };
            }
        };
        VariableLabels { title: title.to_string(), ylabel: ylabel.to_string(), y_tick_scale }
    }
}
