use crate::error::GaugeError;
use core_types::{DisplayRange, NeedleCoordinate, Point};
use serde::Serialize;

/// Angle covered by the dial, from the left end (minimum) to the right end (maximum).
pub const DIAL_SWEEP_DEGREES: f64 = 180.0;

/// Position used when the display range has zero width.
const DEGENERATE_RATIO: f64 = 0.5;

/// Places `value` on a semicircular dial of `radius` centred on `pivot`.
///
/// The value is normalised against `min_scale..=max_scale` and clamped to the dial, so
/// out-of-range values pin to the nearest end. A zero-width range puts the needle at the
/// midpoint (90 degrees) whatever the value.
pub fn needle_tip(
    value: f64,
    min_scale: f64,
    max_scale: f64,
    pivot: Point,
    radius: f64,
) -> Result<NeedleCoordinate, GaugeError> {
    if !value.is_finite() {
        return Err(GaugeError::InvalidInput(
            "value".to_string(),
            format!("{value} is not finite"),
        ));
    }
    let range = DisplayRange::new(min_scale, max_scale)?;
    if !range.width().is_finite() {
        return Err(GaugeError::InvalidInput(
            "display_range".to_string(),
            format!("width of {min_scale}..{max_scale} overflows"),
        ));
    }
    validate_geometry(pivot, radius)?;

    let ratio = if range.is_degenerate() {
        DEGENERATE_RATIO
    } else {
        ((value - range.min_scale()) / range.width()).clamp(0.0, 1.0)
    };

    let angle_degrees = DIAL_SWEEP_DEGREES - ratio * DIAL_SWEEP_DEGREES;
    let angle_radians = angle_degrees.to_radians();

    Ok(NeedleCoordinate {
        angle_degrees,
        tip_x: pivot.x + radius * angle_radians.cos(),
        tip_y: pivot.y + radius * angle_radians.sin(),
    })
}

fn validate_geometry(pivot: Point, radius: f64) -> Result<(), GaugeError> {
    if !pivot.is_finite() {
        return Err(GaugeError::InvalidInput(
            "pivot".to_string(),
            format!("({}, {}) is not finite", pivot.x, pivot.y),
        ));
    }
    if !radius.is_finite() || radius < 0.0 {
        return Err(GaugeError::InvalidInput(
            "radius".to_string(),
            format!("{radius} must be finite and non-negative"),
        ));
    }
    Ok(())
}

/// A display range, pivot and radius shared by every needle drawn on one gauge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dial {
    range: DisplayRange,
    pivot: Point,
    radius: f64,
}

impl Dial {
    pub fn new(range: DisplayRange, pivot: Point, radius: f64) -> Result<Self, GaugeError> {
        validate_geometry(pivot, radius)?;
        Ok(Self { range, pivot, radius })
    }

    /// Places one needle. Calls are independent of each other.
    pub fn needle(&self, value: f64) -> Result<NeedleCoordinate, GaugeError> {
        needle_tip(
            value,
            self.range.min_scale(),
            self.range.max_scale(),
            self.pivot,
            self.radius,
        )
    }

    pub fn range(&self) -> &DisplayRange {
        &self.range
    }

    pub fn pivot(&self) -> Point {
        self.pivot
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}
