use crate::error::GaugeError;
use core_types::DisplayRange;

/// The visible span `mean * (1 - spread) ..= mean * (1 + spread)`.
///
/// `spread` must lie in `[0, 1)`; a spread of 0 gives a zero-width range, which the
/// needle geometry handles with its midpoint fallback.
pub fn display_range(mean: f64, spread: f64) -> Result<DisplayRange, GaugeError> {
    if !mean.is_finite() || mean <= 0.0 {
        return Err(GaugeError::InvalidInput(
            "mean".to_string(),
            format!("{mean} must be finite and greater than 0"),
        ));
    }
    if !(0.0..1.0).contains(&spread) {
        return Err(GaugeError::InvalidInput(
            "spread".to_string(),
            format!("{spread} must be in [0, 1)"),
        ));
    }

    Ok(DisplayRange::new(mean * (1.0 - spread), mean * (1.0 + spread))?)
}
