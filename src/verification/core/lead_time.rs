//! Lead-time axis: step indices, days, and panel labels.
//!
//! Forecasts are verified on a fixed step grid (6-hourly by default). Step
//! `0` is the initialization time. Landfall windows use 1-based end steps,
//! so their labels subtract one before converting to days.
use crate::verification::errors::{VerifyError, VerifyResult};
use ndarray::Array1;

/// Default spacing between lead-time steps.
pub const DEFAULT_STEP_HOURS: f64 = 6.0;

/// Default number of lead-time steps (0 through 10 days at 6 hours).
pub const DEFAULT_N_STEPS: usize = 41;

/// `LeadTimeAxis` — mapping between step indices and elapsed days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeadTimeAxis {
    n_steps: usize,
    step_hours: f64,
}

impl LeadTimeAxis {
    /// Errors
    /// ------
    /// - `VerifyError::InvalidConfig` when `step_hours` is not finite and
    ///   strictly positive.
    pub fn new(n_steps: usize, step_hours: f64) -> VerifyResult<LeadTimeAxis> {
        if !step_hours.is_finite() || step_hours <= 0.0 {
            return Err(VerifyError::InvalidConfig {
                field: "lead_time.step_hours",
                reason: format!("must be finite and > 0; got {step_hours}"),
            });
        }
        Ok(LeadTimeAxis { n_steps, step_hours })
    }

    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    pub fn step_hours(&self) -> f64 {
        self.step_hours
    }

    /// Steps per day (4 at 6-hour spacing).
    pub fn steps_per_day(&self) -> f64 {
        24.0 / self.step_hours
    }

    /// Lead time in days of the 0-based step `step`.
    pub fn days_for(&self, step: usize) -> f64 {
        step as f64 / self.steps_per_day()
    }

    /// Lead time in days of every step on the axis.
    pub fn days(&self) -> Array1<f64> {
        Array1::from_iter((0..self.n_steps).map(|step| self.days_for(step)))
    }

    /// Convert a step-valued coordinate (e.g. a dataset `time` axis) to days.
    pub fn coordinate_days(&self, steps: &Array1<f64>) -> Array1<f64> {
        steps / self.steps_per_day()
    }

    /// Label of a 1-based end step, e.g. `17` → `"Day 4.0"`.
    pub fn day_label(&self, end_step: usize) -> String {
        format!("Day {:.1}", self.days_for(end_step.saturating_sub(1)))
    }

    /// Label of the window pooling `window` steps before the 1-based
    /// `end_step`, e.g. `(17, 12)` → `"Days 1.0 - 4.0"`.
    pub fn window_label(&self, end_step: usize, window: usize) -> String {
        let last = end_step.saturating_sub(1);
        let first = last.saturating_sub(window);
        format!("Days {:.1} - {:.1}", self.days_for(first), self.days_for(last))
    }
}

impl Default for LeadTimeAxis {
    fn default() -> Self {
        LeadTimeAxis { n_steps: DEFAULT_N_STEPS, step_hours: DEFAULT_STEP_HOURS }
    }
}
