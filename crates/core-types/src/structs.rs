use crate::error::CoreError;
use crate::rounding::round_money;
use serde::{Deserialize, Serialize};

/// The minimal numeric facts derived from a price history.
///
/// Fields are private so a snapshot can only be built through the validating
/// constructors; a refresh replaces the whole value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesSummary {
    current: f64,
    mean: f64,
}

impl SeriesSummary {
    /// Creates a summary from an already-reduced current value and mean.
    ///
    /// `current` must be finite. `mean` must be finite and strictly positive.
    pub fn new(current: f64, mean: f64) -> Result<Self, CoreError> {
        if !current.is_finite() {
            return Err(CoreError::invalid("current", format!("{current} is not finite")));
        }
        if !mean.is_finite() || mean <= 0.0 {
            return Err(CoreError::invalid(
                "mean",
                format!("{mean} must be finite and greater than 0"),
            ));
        }
        Ok(Self { current, mean })
    }

    /// Reduces a close series (oldest first) to a summary.
    ///
    /// The current value is the last close and the mean is the arithmetic mean of the
    /// whole series; both are rounded to two decimals.
    pub fn from_closes(closes: &[f64]) -> Result<Self, CoreError> {
        let last = *closes
            .last()
            .ok_or_else(|| CoreError::invalid("closes", "series is empty"))?;

        if let Some(bad) = closes.iter().find(|c| !c.is_finite()) {
            return Err(CoreError::invalid("closes", format!("series contains {bad}")));
        }

        let mean = closes.iter().sum::<f64>() / closes.len() as f64;
        tracing::debug!(samples = closes.len(), last, mean, "Reduced close series");

        Self::new(round_money(last)?, round_money(mean)?)
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }
}

/// The reference average and the alert limit derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    average: f64,
    limit: f64,
}

impl Thresholds {
    /// Both values must be finite and `limit` must not be below `average`.
    pub fn new(average: f64, limit: f64) -> Result<Self, CoreError> {
        if !average.is_finite() || !limit.is_finite() {
            return Err(CoreError::invalid(
                "thresholds",
                format!("average {average} and limit {limit} must be finite"),
            ));
        }
        if limit < average {
            return Err(CoreError::invalid(
                "limit",
                format!("{limit} is below the average {average}"),
            ));
        }
        Ok(Self { average, limit })
    }

    pub fn average(&self) -> f64 {
        self.average
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }
}

/// The visible value span of the dial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayRange {
    min_scale: f64,
    max_scale: f64,
}

impl DisplayRange {
    /// A zero-width range (`min_scale == max_scale`) is accepted.
    pub fn new(min_scale: f64, max_scale: f64) -> Result<Self, CoreError> {
        if !min_scale.is_finite() || !max_scale.is_finite() {
            return Err(CoreError::invalid(
                "display_range",
                format!("bounds {min_scale}..{max_scale} must be finite"),
            ));
        }
        if max_scale < min_scale {
            return Err(CoreError::invalid(
                "display_range",
                format!("max_scale {max_scale} is below min_scale {min_scale}"),
            ));
        }
        Ok(Self { min_scale, max_scale })
    }

    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    pub fn width(&self) -> f64 {
        self.max_scale - self.min_scale
    }

    pub fn is_degenerate(&self) -> bool {
        self.min_scale == self.max_scale
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min_scale && value <= self.max_scale
    }
}

/// A point in dial coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Placement of a single needle on the dial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NeedleCoordinate {
    /// 180 at the left end of the dial, 0 at the right end.
    pub angle_degrees: f64,
    pub tip_x: f64,
    pub tip_y: f64,
}

impl NeedleCoordinate {
    pub fn tip(&self) -> Point {
        Point::new(self.tip_x, self.tip_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_rejects_invalid_mean() {
        assert!(SeriesSummary::new(1400.0, 0.0).is_err());
        assert!(SeriesSummary::new(1400.0, -1350.0).is_err());
        assert!(SeriesSummary::new(1400.0, f64::NAN).is_err());
        assert!(SeriesSummary::new(f64::INFINITY, 1350.0).is_err());
    }

    #[test]
    fn summary_allows_any_finite_current() {
        let summary = SeriesSummary::new(-5.0, 1350.0).unwrap();
        assert_eq!(summary.current(), -5.0);
        assert_eq!(summary.mean(), 1350.0);
    }

    #[test]
    fn from_closes_uses_last_close_and_rounded_mean() {
        let summary = SeriesSummary::from_closes(&[1300.0, 1350.0, 1400.111]).unwrap();
        assert_eq!(summary.current(), 1400.11);
        assert_eq!(summary.mean(), 1350.04);
    }

    #[test]
    fn from_closes_rejects_empty_and_non_finite_series() {
        assert!(matches!(
            SeriesSummary::from_closes(&[]),
            Err(CoreError::InvalidInput(field, _)) if field == "closes"
        ));
        assert!(SeriesSummary::from_closes(&[1300.0, f64::NAN, 1400.0]).is_err());
    }

    #[test]
    fn thresholds_require_limit_at_or_above_average() {
        assert!(Thresholds::new(1350.0, 1444.5).is_ok());
        assert!(Thresholds::new(1350.0, 1350.0).is_ok());
        assert!(Thresholds::new(1350.0, 1300.0).is_err());
        assert!(Thresholds::new(f64::NAN, 1300.0).is_err());
    }

    #[test]
    fn display_range_accepts_zero_width_but_not_inverted() {
        let range = DisplayRange::new(100.0, 100.0).unwrap();
        assert!(range.is_degenerate());
        assert_eq!(range.width(), 0.0);
        assert!(DisplayRange::new(101.0, 100.0).is_err());
        assert!(DisplayRange::new(f64::NEG_INFINITY, 100.0).is_err());
    }

    #[test]
    fn point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }
}
