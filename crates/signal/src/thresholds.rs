use crate::error::SignalError;
use core_types::{CoreError, Thresholds, round_money};

/// Derives the alert limit `mean * (1 + margin)`, rounded to two decimals.
///
/// `mean` must be finite and positive. A margin outside `[0, 1]` is unrealistic and is
/// logged as a warning, but the limit is still returned. A limit too large to round
/// (beyond about 7.9e28) is a `Calculation` error.
pub fn compute_limit(mean: f64, margin: f64) -> Result<f64, SignalError> {
    if !mean.is_finite() || mean <= 0.0 {
        return Err(SignalError::InvalidInput(
            "mean".to_string(),
            format!("{mean} must be finite and greater than 0"),
        ));
    }
    if !margin.is_finite() {
        return Err(SignalError::InvalidInput(
            "margin".to_string(),
            format!("{margin} is not finite"),
        ));
    }
    if !(0.0..=1.0).contains(&margin) {
        tracing::warn!(margin, "Alert margin is outside [0, 1]");
    }

    let raw = mean * (1.0 + margin);
    let limit = round_money(raw).map_err(|e| {
        CoreError::Calculation(format!("limit {raw} for mean {mean} and margin {margin}: {e}"))
    })?;
    tracing::debug!(mean, margin, limit, "Computed alert limit");
    Ok(limit)
}

/// Builds the average/limit pair consumed by the classifier and the dial.
///
/// Fails when the margin is negative enough to put the limit below the average.
pub fn compute_thresholds(mean: f64, margin: f64) -> Result<Thresholds, SignalError> {
    let limit = compute_limit(mean, margin)?;
    let average = round_money(mean)?;
    Ok(Thresholds::new(average, limit)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_percent_over_1350() {
        assert_eq!(compute_limit(1350.0, 0.07).unwrap(), 1444.5);
    }

    #[test]
    fn zero_margin_returns_mean() {
        assert_eq!(compute_limit(1370.3, 0.0).unwrap(), 1370.3);
    }

    #[test]
    fn limit_is_rounded_to_cents() {
        // 1370.3 * 1.07 = 1466.221
        assert_eq!(compute_limit(1370.3, 0.07).unwrap(), 1466.22);
    }

    #[test]
    fn rejects_non_positive_or_non_finite_mean() {
        for mean in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(compute_limit(mean, 0.07), Err(SignalError::InvalidInput(_, _))),
                "mean {mean} should be rejected"
            );
        }
    }

    #[test]
    fn limit_beyond_decimal_range_is_a_calculation_error() {
        assert!(matches!(
            compute_limit(1.0e29, 0.07),
            Err(SignalError::Core(CoreError::Calculation(msg))) if msg.starts_with("limit")
        ));
    }

    #[test]
    fn rejects_non_finite_margin() {
        assert!(compute_limit(1350.0, f64::NAN).is_err());
        assert!(compute_limit(1350.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn unrealistic_margin_is_not_fatal() {
        assert_eq!(compute_limit(100.0, 1.5).unwrap(), 250.0);
        assert_eq!(compute_limit(100.0, -0.5).unwrap(), 50.0);
    }

    #[test]
    fn limit_increases_with_margin() {
        let mean = 1350.0;
        let limits: Vec<f64> = (0..=100)
            .map(|step| compute_limit(mean, step as f64 * 0.01).unwrap())
            .collect();
        for pair in limits.windows(2) {
            assert!(pair[1] > pair[0], "{} should exceed {}", pair[1], pair[0]);
        }
    }

    #[test]
    fn thresholds_pair_average_and_limit() {
        let thresholds = compute_thresholds(1350.0, 0.07).unwrap();
        assert_eq!(thresholds.average(), 1350.0);
        assert_eq!(thresholds.limit(), 1444.5);
        assert!(thresholds.limit() >= thresholds.average());
    }

    #[test]
    fn negative_margin_cannot_form_thresholds() {
        assert!(matches!(
            compute_thresholds(1350.0, -0.07),
            Err(SignalError::Core(_))
        ));
    }
}
