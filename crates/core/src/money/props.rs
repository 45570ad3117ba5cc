//! Property-based tests for money operations.
//!
//! - Property 1: Currency scaling
//! - Property 2: Additive laws
//! - Property 3: Allocation conservation

use centum_shared::types::{Currency, USD};
use proptest::prelude::*;

use super::allocation::AllocationUtil;
use super::value::Money;

/// Strategy to generate minor-unit amounts (-10,000,000.00 to 10,000,000.00).
fn minor_amount() -> impl Strategy<Value = i64> {
    -1_000_000_000i64..1_000_000_000i64
}

/// Strategy to generate fraction digits (0 to 8).
fn fraction_digits() -> impl Strategy<Value = i32> {
    0i32..=8
}

/// Strategy to generate 1-12 non-negative weights with a positive sum.
fn weights() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0u32..1_000, 1..12)
        .prop_filter("weights must not all be zero", |w| w.iter().any(|v| *v > 0))
        .prop_map(|w| w.into_iter().map(f64::from).collect())
}

/// Strategy to generate fractional weights with two decimals.
fn fractional_weights() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1u32..10_000, 1..8).prop_map(|w| {
        w.into_iter()
            .map(|v| format!("{}.{:02}", v / 100, v % 100).parse::<f64>().unwrap_or(1.0))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property 1: Currency scaling
    // =========================================================================

    /// Property 1.1: cent factor is a power of ten.
    #[test]
    fn prop_cent_factor_is_power_of_ten(digits in fraction_digits()) {
        let currency = Currency::new("TST", digits).unwrap();
        let exponent = u32::try_from(digits).unwrap();
        prop_assert_eq!(currency.cent_factor(), 10_i64.pow(exponent));
    }

    /// Property 1.2: negative fraction digits are always rejected.
    #[test]
    fn prop_negative_digits_rejected(digits in i32::MIN..0) {
        prop_assert!(Currency::new("TST", digits).is_err());
    }

    /// Property 1.3: exact multiples of the minor unit survive a round trip.
    #[test]
    fn prop_exact_amount_round_trip(amount in minor_amount(), digits in fraction_digits()) {
        let currency = Currency::new("TST", digits).unwrap();
        let original = Money::from_minor_units(amount, currency.clone());
        let rebuilt = Money::new(original.to_number(), currency).unwrap();
        prop_assert_eq!(rebuilt.amount(), amount);
    }

    // =========================================================================
    // Property 2: Additive laws
    // =========================================================================

    /// Property 2.1: addition is commutative.
    #[test]
    fn prop_add_commutative(a in minor_amount(), b in minor_amount()) {
        let a = Money::from_minor_units(a, USD);
        let b = Money::from_minor_units(b, USD);
        prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    }

    /// Property 2.2: subtraction undoes addition.
    #[test]
    fn prop_sub_inverts_add(a in minor_amount(), b in minor_amount()) {
        let a = Money::from_minor_units(a, USD);
        let b = Money::from_minor_units(b, USD);
        prop_assert_eq!(a.add(&b).unwrap().sub(&b).unwrap(), a);
    }

    /// Property 2.3: multiplying by one is the identity.
    #[test]
    fn prop_mult_identity(a in minor_amount()) {
        let a = Money::from_minor_units(a, USD);
        prop_assert_eq!(a.mult(1.0).unwrap(), a);
    }

    // =========================================================================
    // Property 3: Allocation conservation
    // =========================================================================

    /// Property 3.1: shares sum exactly to the amount.
    #[test]
    fn prop_allocation_conserves_amount(amount in minor_amount(), weights in weights()) {
        let shares = AllocationUtil::allocate_by_weights(amount, &weights).unwrap();
        prop_assert_eq!(shares.len(), weights.len());
        prop_assert_eq!(shares.iter().sum::<i64>(), amount);
    }

    /// Property 3.2: conservation holds for fractional weights too.
    #[test]
    fn prop_allocation_fractional_weights(amount in minor_amount(), weights in fractional_weights()) {
        let shares = AllocationUtil::allocate_by_weights(amount, &weights).unwrap();
        prop_assert_eq!(shares.iter().sum::<i64>(), amount);
    }

    /// Property 3.3: non-negative amounts never produce negative shares.
    #[test]
    fn prop_allocation_non_negative(amount in 0i64..1_000_000_000, weights in weights()) {
        let shares = AllocationUtil::allocate_by_weights(amount, &weights).unwrap();
        for (i, share) in shares.iter().enumerate() {
            prop_assert!(*share >= 0, "share {} should be non-negative, got {}", i, share);
        }
    }

    /// Property 3.4: the leftover adds at most one unit to any share.
    #[test]
    fn prop_allocation_within_one_unit_of_floor(amount in minor_amount(), weights in weights()) {
        let shares = AllocationUtil::allocate_by_weights(amount, &weights).unwrap();
        let total: u64 = weights.iter().map(|w| format!("{w}").parse::<u64>().unwrap_or(0)).sum();
        for (share, weight) in shares.iter().zip(&weights) {
            let weight = format!("{weight}").parse::<u64>().unwrap_or(0);
            let floor = (i128::from(amount) * i128::from(weight)).div_euclid(i128::from(total));
            let delta = i128::from(*share) - floor;
            prop_assert!(delta == 0 || delta == 1, "share {} vs floor {}", share, floor);
        }
    }

    /// Property 3.5: Money::allocate keeps the currency of the source.
    #[test]
    fn prop_allocate_keeps_currency(amount in minor_amount(), weights in weights()) {
        let money = Money::from_minor_units(amount, USD);
        let parts = money.allocate(&weights).unwrap();
        prop_assert!(parts.iter().all(|m| m.currency().same_code(&USD)));
    }

    /// Property 3.6: equal splits differ by at most one unit.
    #[test]
    fn prop_split_is_even(amount in minor_amount(), parts in 1usize..50) {
        let shares = AllocationUtil::allocate_equal(amount, parts).unwrap();
        let max = shares.iter().max().copied().unwrap_or_default();
        let min = shares.iter().min().copied().unwrap_or_default();
        prop_assert!(max - min <= 1);
        prop_assert_eq!(shares.iter().sum::<i64>(), amount);
    }
}
