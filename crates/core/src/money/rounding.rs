//! Conversions between `f64` inputs and exact decimal minor units.
//!
//! Rounding strategy is round-half-away-from-zero at every boundary:
//! - 0.5 → 1, -0.5 → -1
//! - 1098.5 → 1099
//!
//! Floats are read as the shortest decimal that round-trips, so `10.985` is
//! the decimal 10.985 and not its binary neighbour 10.98499999….

use centum_shared::{MoneyError, MoneyResult};
use rust_decimal::prelude::*;

/// Converts a finite float into the decimal it prints as.
pub(crate) fn decimal_from_f64(value: f64) -> MoneyResult<Decimal> {
    if !value.is_finite() {
        return Err(MoneyError::invalid(format!(
            "expected a finite number, got {value}"
        )));
    }

    // Display for f64 is the shortest representation that round-trips and
    // never uses exponent notation. Digits past 28 decimal places are rounded
    // away, so only magnitudes beyond the 96-bit mantissa fail.
    value
        .to_string()
        .parse::<Decimal>()
        .map_err(|_| MoneyError::overflow(format!("{value} is out of decimal range")))
}

/// Rounds to an integer, ties away from zero, and narrows to `i64`.
pub(crate) fn round_half_away(value: Decimal) -> MoneyResult<i64> {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| MoneyError::overflow(format!("{value} does not fit in minor units")))
}

/// Scales a decimal amount to minor units: `round(value * factor)`.
pub(crate) fn scale_to_minor(value: f64, factor: i64) -> MoneyResult<i64> {
    let value = decimal_from_f64(value)?;
    let scaled = value
        .checked_mul(Decimal::from(factor))
        .ok_or_else(|| MoneyError::overflow(format!("{value} x {factor}")))?;
    round_half_away(scaled)
}
