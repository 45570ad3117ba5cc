//! Money value type: integer minor units tied to a currency.
//!
//! CRITICAL: amounts are stored as `i64` minor units. Floats only appear at
//! the edges (`Money::new`, `Money::mult`, `Money::to_number`) and are
//! converted through exact decimals before any rounding happens.

use std::fmt;

use centum_shared::{Currency, MoneyError, MoneyResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::allocation::AllocationUtil;
use super::rounding::{decimal_from_f64, round_half_away, scale_to_minor};

/// An immutable monetary amount.
///
/// Every operation returns a new `Money`; amounts in different currencies
/// (compared by code) never combine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    /// The amount in the smallest currency unit (e.g., cents).
    amount: i64,
    /// The currency the amount is denominated in.
    currency: Currency,
}

impl Money {
    /// Creates money from a decimal amount, rounding half away from zero to
    /// the currency's minor unit.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidArgument`] if `amount` is NaN or infinite
    /// and [`MoneyError::Overflow`] if it does not fit in `i64` minor units.
    ///
    /// # Example
    ///
    /// ```
    /// use centum_core::Money;
    /// use centum_shared::types::EUR;
    ///
    /// let m = Money::new(10.985, EUR).unwrap();
    /// assert_eq!(m.amount(), 1099);
    /// ```
    pub fn new(amount: f64, currency: Currency) -> MoneyResult<Self> {
        let amount = scale_to_minor(amount, currency.cent_factor())?;
        Ok(Self { amount, currency })
    }

    /// Creates money from an amount already expressed in minor units.
    #[must_use]
    pub const fn from_minor_units(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self::from_minor_units(0, currency)
    }

    /// Returns the amount in minor units.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    /// Returns the currency.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Adds two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] if the codes differ and
    /// [`MoneyError::Overflow`] if the sum leaves the `i64` range.
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| MoneyError::overflow(format!("{self} + {other}")))?;
        Ok(self.with_amount(amount))
    }

    /// Subtracts `other` from `self`.
    ///
    /// # Errors
    ///
    /// Same as [`Money::add`].
    pub fn sub(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or_else(|| MoneyError::overflow(format!("{self} - {other}")))?;
        Ok(self.with_amount(amount))
    }

    /// Scales the amount by `factor`, rounding half away from zero.
    ///
    /// Used for tax, fee and discount computations.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidArgument`] if `factor` is NaN or infinite
    /// and [`MoneyError::Overflow`] if the result does not fit.
    pub fn mult(&self, factor: f64) -> MoneyResult<Self> {
        let factor = decimal_from_f64(factor)?;
        let product = Decimal::from(self.amount)
            .checked_mul(factor)
            .ok_or_else(|| MoneyError::overflow(format!("{self} x {factor}")))?;
        Ok(self.with_amount(round_half_away(product)?))
    }

    /// Returns the amount in major units as a float.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::float_arithmetic)]
    pub fn to_number(&self) -> f64 {
        self.amount as f64 / self.currency.cent_factor() as f64
    }

    /// Returns the exact amount in major units.
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.amount, self.currency.fraction_digits())
    }

    /// Splits the amount in proportion to `weights` without losing a unit.
    ///
    /// Leftover minor units go to the earliest entries first, see
    /// [`AllocationUtil::allocate_by_weights`].
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidArgument`] for negative or non-finite
    /// weights, or weights summing to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use centum_core::Money;
    /// use centum_shared::types::USD;
    ///
    /// let parts = Money::new(0.05, USD).unwrap().allocate(&[3.0, 7.0]).unwrap();
    /// let cents: Vec<i64> = parts.iter().map(Money::amount).collect();
    /// assert_eq!(cents, vec![2, 3]);
    /// ```
    pub fn allocate(&self, weights: &[f64]) -> MoneyResult<Vec<Self>> {
        let shares = AllocationUtil::allocate_by_weights(self.amount, weights)?;
        Ok(self.wrap_shares(shares))
    }

    /// Splits the amount into `parts` equal shares, earliest shares taking
    /// any leftover units.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidArgument`] if `parts` is zero.
    pub fn split(&self, parts: usize) -> MoneyResult<Vec<Self>> {
        let shares = AllocationUtil::allocate_equal(self.amount, parts)?;
        Ok(self.wrap_shares(shares))
    }

    fn ensure_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.currency.same_code(&other.currency) {
            return Ok(());
        }
        debug!(
            expected = self.currency.code(),
            found = other.currency.code(),
            "currency mismatch"
        );
        Err(MoneyError::CurrencyMismatch {
            expected: self.currency.code().to_string(),
            found: other.currency.code().to_string(),
        })
    }

    fn with_amount(&self, amount: i64) -> Self {
        Self::from_minor_units(amount, self.currency.clone())
    }

    fn wrap_shares(&self, shares: Vec<i64>) -> Vec<Self> {
        shares
            .into_iter()
            .map(|amount| self.with_amount(amount))
            .collect()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_decimal(), self.currency)
    }
}
