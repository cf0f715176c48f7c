//! Rendering seam.
//!
//! - [`RenderSink`]: trait implemented by the plotting layer. It receives
//!   fully aggregated panels together with the explicit [`RenderStyle`].
//! - [`Figure`]: which of the three verification figures is being drawn.
//! - [`render_all`]: load, aggregate, and hand every panel to a sink.
//!
//! Panels are delivered in configuration order: variables for the RMSE
//! figure, end steps for the landfall figure, metrics for the skill figure.
//! A sink never sees a partially aggregated figure; fatal errors stop the
//! run before the figure's first panel is emitted.
use crate::{
    config::{RenderStyle, VerifyConfig},
    figures::{landfall_figure_panels, rmse_panels, skill_figure_panels},
    verification::{
        core::LeadTimeAxis,
        errors::VerifyResult,
        panels::{BoxPanel, LinePanel, MetricPanel},
    },
};
use tracing::info;

/// The verification figures, in the order [`render_all`] emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Figure {
    /// Mean ± SEM of RMSE / bias per variable against lead time.
    Rmse,
    /// Pooled landfall-error distributions per end step.
    Landfall,
    /// CSI / POD / FAR against lead time.
    Skill,
}

impl Figure {
    pub fn name(self) -> &'static str {
        match self {
            Figure::Rmse => "rmse",
            Figure::Landfall => "landfall",
            Figure::Skill => "skill",
        }
    }
}

/// Consumer of aggregated panels.
///
/// Required:
/// - `line_panel`: one RMSE / bias variable. `axis` maps step indices of
///   the summaries to lead time in days.
/// - `box_panel`: one landfall end step.
/// - `metric_panel`: one skill metric.
///
/// Optional:
/// - `begin_figure` / `finish_figure`: called around each figure's panels.
///
/// Errors
/// ------
/// Implementations report their own failures as `VerifyError::Render`;
/// any error returned stops [`render_all`].
pub trait RenderSink {
    // Required methods
    fn line_panel(
        &mut self, panel: &LinePanel, axis: &LeadTimeAxis, style: &RenderStyle,
    ) -> VerifyResult<()>;
    fn box_panel(&mut self, panel: &BoxPanel, style: &RenderStyle) -> VerifyResult<()>;
    fn metric_panel(&mut self, panel: &MetricPanel, style: &RenderStyle) -> VerifyResult<()>;

    // Optional methods
    fn begin_figure(&mut self, _figure: Figure, _style: &RenderStyle) -> VerifyResult<()> {
        Ok(())
    }
    fn finish_figure(&mut self, _figure: Figure, _style: &RenderStyle) -> VerifyResult<()> {
        Ok(())
    }
}

/// Aggregate the RMSE, landfall, and skill figures and hand them to `sink`.
///
/// The configuration is validated first. Missing artifacts and model keys
/// are substituted (see [`crate::figures`]); every other error propagates.
pub fn render_all<S: RenderSink + ?Sized>(config: &VerifyConfig, sink: &mut S) -> VerifyResult<()> {
    config.validate()?;
    let style = &config.style;
    let axis = config.axis()?;

    let lines = rmse_panels(config)?;
    sink.begin_figure(Figure::Rmse, style)?;
    for panel in &lines {
        sink.line_panel(panel, &axis, style)?;
    }
    sink.finish_figure(Figure::Rmse, style)?;
    info!(figure = Figure::Rmse.name(), panels = lines.len(), "figure rendered");

    let boxes = landfall_figure_panels(config)?;
    sink.begin_figure(Figure::Landfall, style)?;
    for panel in &boxes {
        sink.box_panel(panel, style)?;
    }
    sink.finish_figure(Figure::Landfall, style)?;
    info!(figure = Figure::Landfall.name(), panels = boxes.len(), "figure rendered");

    let metrics = skill_figure_panels(config)?;
    sink.begin_figure(Figure::Skill, style)?;
    for panel in &metrics {
        sink.metric_panel(panel, style)?;
    }
    sink.finish_figure(Figure::Skill, style)?;
    info!(figure = Figure::Skill.name(), panels = metrics.len(), "figure rendered");

    Ok(())
}
