use crate::error::ConfigError;
use core_types::{CoreError, Point, SeriesSummary};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section falls back to its `Default`, so an empty `config.toml` (or none at all)
/// yields the observed production parameters.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub signal: SignalParams,
    pub gauge: GaugeParams,
    pub fallback: FallbackSummary,
    pub logging: Logging,
    pub output: Output,
}

/// Parameters for deriving the alert limit.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SignalParams {
    /// Fractional markup over the average that defines the alert limit.
    /// 0.07 corresponds to 7%.
    pub margin: f64,
}

/// Geometry of the semicircular dial.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GaugeParams {
    /// Fractional half-width of the visible range around the average.
    /// 0.15 shows the average +/- 15%.
    pub spread: f64,
    /// Needle length, in the same units as the pivot.
    pub radius: f64,
    /// Center of the dial.
    pub pivot: Point,
}

/// The snapshot used when no live series is available.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FallbackSummary {
    pub current: f64,
    pub mean: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Logging {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Output {
    pub format: OutputFormat,
}

/// How the CLI renders a gauge report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

// --- Default Implementations ---

impl Default for SignalParams {
    fn default() -> Self {
        Self { margin: 0.07 }
    }
}

impl Default for GaugeParams {
    fn default() -> Self {
        Self {
            spread: 0.15,
            radius: 0.4,
            pivot: Point::new(0.5, 0.25),
        }
    }
}

impl Default for FallbackSummary {
    fn default() -> Self {
        Self {
            current: 1447.0,
            mean: 1370.3,
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

impl FallbackSummary {
    pub fn to_summary(&self) -> Result<SeriesSummary, CoreError> {
        SeriesSummary::new(self.current, self.mean)
    }
}

impl Config {
    /// Checks that every parameter is usable by the engine.
    ///
    /// Unrealistic but usable values are not errors; see [`Config::warnings`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let margin = self.signal.margin;
        if !margin.is_finite() || margin < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "signal.margin must be a finite value >= 0, got {margin}"
            )));
        }

        let spread = self.gauge.spread;
        if !(0.0..1.0).contains(&spread) {
            return Err(ConfigError::ValidationError(format!(
                "gauge.spread must be in [0, 1), got {spread}"
            )));
        }
        if !self.gauge.radius.is_finite() || self.gauge.radius <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "gauge.radius must be greater than 0, got {}",
                self.gauge.radius
            )));
        }
        if !self.gauge.pivot.is_finite() {
            return Err(ConfigError::ValidationError(
                "gauge.pivot coordinates must be finite".to_string(),
            ));
        }

        self.fallback
            .to_summary()
            .map_err(|e| ConfigError::ValidationError(format!("fallback: {e}")))?;

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "logging.level cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Non-fatal configuration warnings.
    ///
    /// Configuration is loaded before the subscriber exists, so the caller logs these
    /// once `init_tracing` has run.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.signal.margin > 1.0 {
            warnings.push(format!(
                "signal.margin {} is above 100%; the alert band is unrealistic",
                self.signal.margin
            ));
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_observed_parameters() {
        let config = Config::default();
        assert_eq!(config.signal.margin, 0.07);
        assert_eq!(config.gauge.spread, 0.15);
        assert_eq!(config.gauge.radius, 0.4);
        assert_eq!(config.gauge.pivot, Point::new(0.5, 0.25));
        assert_eq!(config.output.format, OutputFormat::Table);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn fallback_converts_to_summary() {
        let summary = FallbackSummary::default().to_summary().unwrap();
        assert_eq!(summary.current(), 1447.0);
        assert_eq!(summary.mean(), 1370.3);
    }

    #[test]
    fn rejects_spread_of_one_or_more() {
        let mut config = Config::default();
        config.gauge.spread = 1.0;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));

        config.gauge.spread = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_negative_margin_but_tolerates_large_one() {
        let mut config = Config::default();
        config.signal.margin = -0.01;
        assert!(config.validate().is_err());

        config.signal.margin = 1.5;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn large_margin_is_reported_as_a_warning() {
        assert!(Config::default().warnings().is_empty());

        let mut config = Config::default();
        config.signal.margin = 1.5;
        let warnings = config.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("signal.margin 1.5"));
    }

    #[test]
    fn rejects_bad_geometry_and_fallback() {
        let mut config = Config::default();
        config.gauge.radius = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.gauge.pivot = Point::new(f64::NAN, 0.0);
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.fallback.mean = 0.0;
        assert!(config.validate().is_err());
    }
}
