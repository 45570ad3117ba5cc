//! Integer allocation of minor units among weighted parties.
//!
//! Every share starts as `floor(amount * weight / total)`; the leftover
//! units (always fewer than the number of parties) are then handed out one at
//! a time to parties 0, 1, 2, … in the order the weights were given. The sum
//! of the shares is therefore exactly the original amount.
//!
//! The floor is mathematical (toward negative infinity) for negative amounts
//! as well, which keeps the leftover non-negative:
//!
//! ```text
//!  5 split [3, 7]: floor(1.5)=1,  floor(3.5)=3,  leftover 1 → [2, 3]
//! -5 split [3, 7]: floor(-1.5)=-2, floor(-3.5)=-4, leftover 1 → [-1, -4]
//! ```

use centum_shared::{MoneyError, MoneyResult};
use rust_decimal::Decimal;
use tracing::{debug, trace};

/// Decimal places kept below the leading digit of the largest weight.
///
/// Scaled weights stay under `10^19`, so `amount * weight` fits in `i128` for
/// every `i64` amount.
const WEIGHT_SCALE: u32 = 18;

/// Allocation utility for distributing integer minor units.
///
/// Guarantees:
/// - Sum of allocations EXACTLY equals the amount
/// - No minor unit is lost or invented
/// - Ties are settled by position, earliest first
pub struct AllocationUtil;

impl AllocationUtil {
    /// Allocate `amount` in proportion to `weights`.
    ///
    /// # Arguments
    ///
    /// * `amount` - The amount in minor units
    /// * `weights` - Non-negative, finite weights with a positive sum
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidArgument`] for a negative or non-finite
    /// weight, or when the weights sum to zero (an empty slice included).
    /// Returns [`MoneyError::Overflow`] only if the scaled weights leave the
    /// `i128` range, which a finite weight list cannot reach.
    ///
    /// # Example
    ///
    /// ```
    /// use centum_core::money::AllocationUtil;
    ///
    /// // Foemmel's conundrum: 5 cents split 30% / 70%
    /// let shares = AllocationUtil::allocate_by_weights(5, &[3.0, 7.0]).unwrap();
    /// assert_eq!(shares, vec![2, 3]);
    /// ```
    pub fn allocate_by_weights(amount: i64, weights: &[f64]) -> MoneyResult<Vec<i64>> {
        let scaled = scale_weights(weights)?;
        let total = scaled
            .iter()
            .try_fold(0_i128, |acc, w| acc.checked_add(*w))
            .ok_or_else(|| MoneyError::overflow("sum of weights"))?;
        if total == 0 {
            return Err(MoneyError::invalid(
                "weights must sum to a positive value",
            ));
        }

        let amount_wide = i128::from(amount);
        let mut shares = Vec::with_capacity(scaled.len());
        let mut allocated = 0_i128;
        for weight in &scaled {
            let product = amount_wide
                .checked_mul(*weight)
                .ok_or_else(|| MoneyError::overflow("amount x weight"))?;
            // total > 0, so euclidean division is the mathematical floor
            let share = i64::try_from(product.div_euclid(total))
                .map_err(|_| MoneyError::overflow("allocation share"))?;
            allocated += i128::from(share);
            shares.push(share);
        }

        let remainder = usize::try_from(amount_wide - allocated)
            .map_err(|_| MoneyError::overflow("allocation remainder"))?;
        debug!(amount, parties = shares.len(), remainder, "allocating by weights");

        distribute_remainder(&mut shares, remainder);
        Ok(shares)
    }

    /// Allocate `amount` equally across `parts` recipients.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidArgument`] if `parts` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use centum_core::money::AllocationUtil;
    ///
    /// // 100 / 3 = [34, 33, 33]
    /// let shares = AllocationUtil::allocate_equal(100, 3).unwrap();
    /// assert_eq!(shares, vec![34, 33, 33]);
    /// ```
    pub fn allocate_equal(amount: i64, parts: usize) -> MoneyResult<Vec<i64>> {
        if parts == 0 {
            return Err(MoneyError::invalid("cannot split into zero parts"));
        }
        let divisor =
            i64::try_from(parts).map_err(|_| MoneyError::overflow("number of parts"))?;

        let mut shares = vec![amount.div_euclid(divisor); parts];
        // rem_euclid is in 0..divisor, so it fits in usize
        let remainder = usize::try_from(amount.rem_euclid(divisor)).unwrap_or_default();
        debug!(amount, parties = parts, remainder, "allocating equally");

        distribute_remainder(&mut shares, remainder);
        Ok(shares)
    }
}

/// Hands one unit to each of the first `remainder` shares.
fn distribute_remainder(shares: &mut [i64], remainder: usize) {
    for (index, share) in shares.iter_mut().take(remainder).enumerate() {
        *share += 1;
        trace!(index, share = *share, "assigned remainder unit");
    }
}

/// Converts weights to integers on a common decimal scale.
///
/// Only the ratios between weights matter, so every weight is shifted by the
/// largest decimal exponent among them. The largest weight lands in `[1, 10)`
/// whatever its magnitude, and digits more than [`WEIGHT_SCALE`] places below
/// its leading digit are dropped.
fn scale_weights(weights: &[f64]) -> MoneyResult<Vec<i128>> {
    let mut parts = Vec::with_capacity(weights.len());
    for (index, weight) in weights.iter().enumerate() {
        if !weight.is_finite() {
            return Err(MoneyError::invalid(format!(
                "weight {index} is not finite ({weight})"
            )));
        }
        if *weight < 0.0 {
            return Err(MoneyError::invalid(format!(
                "weight {index} is negative ({weight})"
            )));
        }
        parts.push(decimal_parts(*weight)?);
    }

    let top = parts
        .iter()
        .filter(|(digits, _)| !digits.is_zero())
        .map(|(_, exponent)| *exponent)
        .max()
        .unwrap_or(0);

    parts
        .iter()
        .map(|(digits, exponent)| {
            if digits.is_zero() {
                return Ok(0);
            }
            let places = i64::from(digits.scale()) + i64::from(top) - i64::from(*exponent)
                - i64::from(WEIGHT_SCALE);
            let mantissa = digits.mantissa();
            if places > 0 {
                // digits past WEIGHT_SCALE are dropped
                let divisor = u32::try_from(places).ok().and_then(|p| 10_i128.checked_pow(p));
                return Ok(divisor.map_or(0, |d| mantissa / d));
            }
            u32::try_from(-places)
                .ok()
                .and_then(|p| 10_i128.checked_pow(p))
                .and_then(|factor| mantissa.checked_mul(factor))
                .ok_or_else(|| MoneyError::overflow(format!("weight {digits}e{exponent}")))
        })
        .collect()
}

/// Splits a finite, non-negative float into its shortest decimal digits
/// `d.ddd` and their base-ten exponent.
fn decimal_parts(weight: f64) -> MoneyResult<(Decimal, i32)> {
    let malformed = || MoneyError::invalid(format!("weight {weight} has no decimal form"));

    // LowerExp prints the shortest round-trip digits as `d.ddde<exp>`.
    let text = format!("{weight:e}");
    let (digits, exponent) = text.split_once('e').ok_or_else(malformed)?;
    let digits = digits.parse::<Decimal>().map_err(|_| malformed())?;
    let exponent = exponent.parse::<i32>().map_err(|_| malformed())?;
    Ok((digits, exponent))
}
