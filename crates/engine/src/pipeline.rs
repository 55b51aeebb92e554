use crate::error::EngineError;
use crate::report::{GaugeReport, NeedleSet};
use chrono::Utc;
use configuration::Config;
use core_types::{Point, SeriesSummary};
use gauge::{Dial, display_range};
use signal::{classify_thresholds, compute_thresholds};

/// The numeric parameters of one gauge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineParams {
    /// Fractional markup over the average for the alert limit.
    pub margin: f64,
    /// Fractional half-width of the display range.
    pub spread: f64,
    pub pivot: Point,
    pub radius: f64,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for EngineParams {
    fn from(config: &Config) -> Self {
        Self {
            margin: config.signal.margin,
            spread: config.gauge.spread,
            pivot: config.gauge.pivot,
            radius: config.gauge.radius,
        }
    }
}

/// A stateless calculator turning a `SeriesSummary` into a `GaugeReport`.
#[derive(Debug, Clone)]
pub struct GaugeEngine {
    params: EngineParams,
}

impl GaugeEngine {
    /// Creates a new engine, rejecting parameters that could never produce a report.
    pub fn new(params: EngineParams) -> Result<Self, EngineError> {
        if !params.margin.is_finite() || params.margin < 0.0 {
            return Err(EngineError::Configuration(format!(
                "margin must be a finite value >= 0, got {}",
                params.margin
            )));
        }
        if !(0.0..1.0).contains(&params.spread) {
            return Err(EngineError::Configuration(format!(
                "spread must be in [0, 1), got {}",
                params.spread
            )));
        }
        if !params.pivot.is_finite() {
            return Err(EngineError::Configuration(
                "pivot coordinates must be finite".to_string(),
            ));
        }
        if !params.radius.is_finite() || params.radius < 0.0 {
            return Err(EngineError::Configuration(format!(
                "radius must be finite and non-negative, got {}",
                params.radius
            )));
        }
        Ok(Self { params })
    }

    pub fn from_config(config: &Config) -> Result<Self, EngineError> {
        Self::new(EngineParams::from(config))
    }

    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    /// Runs the full pipeline for one snapshot.
    ///
    /// Thresholds come first, then the zone, then the dial; all three needles share the
    /// same display range, pivot and radius.
    #[tracing::instrument(
        name = "gauge_evaluate",
        skip_all,
        fields(current = summary.current(), mean = summary.mean())
    )]
    pub fn evaluate(&self, summary: &SeriesSummary) -> Result<GaugeReport, EngineError> {
        let thresholds = compute_thresholds(summary.mean(), self.params.margin)?;
        let zone = classify_thresholds(summary.current(), &thresholds)?;

        let range = display_range(summary.mean(), self.params.spread)?;
        let dial = Dial::new(range, self.params.pivot, self.params.radius)?;
        let needles = NeedleSet {
            current: dial.needle(summary.current())?,
            average: dial.needle(thresholds.average())?,
            limit: dial.needle(thresholds.limit())?,
        };

        tracing::info!(
            %zone,
            average = thresholds.average(),
            limit = thresholds.limit(),
            angle = needles.current.angle_degrees,
            "Gauge evaluated"
        );

        Ok(GaugeReport {
            summary: *summary,
            thresholds,
            zone,
            display_range: range,
            needles,
            generated_at: Utc::now(),
        })
    }
}
