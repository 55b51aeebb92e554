use chrono::{DateTime, Utc};
use core_types::{DisplayRange, NeedleCoordinate, SeriesSummary, Thresholds, Zone};
use serde::Serialize;

/// Needle placements for the three markers drawn on the dial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NeedleSet {
    pub current: NeedleCoordinate,
    /// Drawn at the rounded average while the dial is centred on the unrounded mean,
    /// so it can sit a fraction of a degree off 90.
    pub average: NeedleCoordinate,
    pub limit: NeedleCoordinate,
}

/// Everything the rendering side needs for one refresh.
///
/// This struct is the final output of the `GaugeEngine`. Mapping the zone to copy and
/// colours is left to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeReport {
    pub summary: SeriesSummary,
    pub thresholds: Thresholds,
    pub zone: Zone,
    pub display_range: DisplayRange,
    pub needles: NeedleSet,
    pub generated_at: DateTime<Utc>,
}

impl GaugeReport {
    /// How far the current rate sits above (positive) or below the mean, in percent.
    ///
    /// Measured against the unrounded mean, which is always positive; the rounded
    /// average can be 0.00 for sub-cent means.
    pub fn premium_over_average_pct(&self) -> f64 {
        (self.summary.current() / self.summary.mean() - 1.0) * 100.0
    }

    /// Whether the current rate falls inside the visible range, i.e. its needle is not
    /// pinned to an end of the dial.
    pub fn current_on_scale(&self) -> bool {
        self.display_range.contains(self.summary.current())
    }
}
