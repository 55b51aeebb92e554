use crate::error::SignalError;
use core_types::{Thresholds, Zone};

/// Places `current` into a zone relative to `average` and `limit`.
///
/// Boundaries are closed on the safer side: exactly at the average is `Buy`, exactly at
/// the limit is `Accumulate`. The caller guarantees `limit >= average`; any finite inputs
/// produce a zone.
pub fn classify(current: f64, average: f64, limit: f64) -> Result<Zone, SignalError> {
    for (name, value) in [("current", current), ("average", average), ("limit", limit)] {
        if !value.is_finite() {
            return Err(SignalError::InvalidInput(
                name.to_string(),
                format!("{value} is not finite"),
            ));
        }
    }

    let zone = if current <= average {
        Zone::Buy
    } else if current <= limit {
        Zone::Accumulate
    } else {
        Zone::Avoid
    };

    tracing::debug!(current, average, limit, %zone, "Classified rate");
    Ok(zone)
}

pub fn classify_thresholds(current: f64, thresholds: &Thresholds) -> Result<Zone, SignalError> {
    classify(current, thresholds.average(), thresholds.limit())
}
