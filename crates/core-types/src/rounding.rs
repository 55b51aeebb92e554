//! Monetary rounding shared by every crate that reports an average or a limit.

use crate::error::CoreError;
use rust_decimal::prelude::*;

/// Number of decimal places kept for monetary-style outputs.
pub const MONEY_DP: u32 = 2;

/// Rounds `value` to two decimal places, half away from zero.
///
/// The value is converted to a `Decimal` first so the rounding applies to the decimal
/// reading of the float (e.g. `1444.5000000000002` becomes `1444.50`) rather than to its
/// binary expansion. Non-finite input is `InvalidInput`; a finite value beyond the
/// `Decimal` range (about 7.9e28) is a `Calculation` error.
pub fn round_money(value: f64) -> Result<f64, CoreError> {
    if !value.is_finite() {
        return Err(CoreError::invalid("value", format!("{value} is not finite")));
    }
    let decimal = Decimal::from_f64(value).ok_or_else(|| {
        CoreError::Calculation(format!("{value} exceeds the decimal rounding range"))
    })?;

    decimal
        .round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .ok_or_else(|| CoreError::Calculation(format!("failed to convert rounded {value} back to f64")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round_money(1444.5000000000002).unwrap(), 1444.5);
        assert_eq!(round_money(1370.304).unwrap(), 1370.3);
        assert_eq!(round_money(1.236).unwrap(), 1.24);
        assert_eq!(round_money(-1.236).unwrap(), -1.24);
        assert_eq!(round_money(0.0).unwrap(), 0.0);
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(matches!(round_money(f64::NAN), Err(CoreError::InvalidInput(_, _))));
        assert!(matches!(round_money(f64::INFINITY), Err(CoreError::InvalidInput(_, _))));
    }

    #[test]
    fn huge_finite_values_are_a_calculation_error() {
        assert!(matches!(round_money(1.0e29), Err(CoreError::Calculation(_))));
        assert!(matches!(round_money(-1.0e29), Err(CoreError::Calculation(_))));
    }
}
