//! Currency descriptor: a code plus the decimal-to-minor-unit scaling factor.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MoneyError, MoneyResult};

/// Largest number of fraction digits whose power of ten fits in `i64`.
pub const MAX_FRACTION_DIGITS: u32 = 18;

/// An immutable monetary unit.
///
/// `cent_factor` is always `10^fraction_digits`. Two currencies are
/// considered the same for arithmetic purposes when their codes match, see
/// [`Currency::same_code`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CurrencyRepr", into = "CurrencyRepr")]
pub struct Currency {
    code: Cow<'static, str>,
    fraction_digits: u32,
    cent_factor: i64,
}

/// US Dollar.
pub const USD: Currency = Currency::predefined("USD", 2);
/// Euro.
pub const EUR: Currency = Currency::predefined("EUR", 2);
/// Pound sterling.
pub const GBP: Currency = Currency::predefined("GBP", 2);
/// Japanese Yen.
pub const JPY: Currency = Currency::predefined("JPY", 0);
/// Bitcoin, counted in units of 10^-5.
pub const BTC: Currency = Currency::predefined("BTC", 5);
/// Bitcoin at full satoshi precision.
pub const XBT: Currency = Currency::predefined("XBT", 8);

impl Currency {
    /// Creates a currency from a code and a number of fraction digits.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidArgument`] if the code is blank or
    /// `fraction_digits` is outside `0..=18`.
    pub fn new(code: impl Into<String>, fraction_digits: i32) -> MoneyResult<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(MoneyError::invalid("currency code must not be empty"));
        }
        let digits = u32::try_from(fraction_digits).map_err(|_| {
            MoneyError::invalid(format!(
                "fraction digits must be non-negative, got {fraction_digits}"
            ))
        })?;
        if digits > MAX_FRACTION_DIGITS {
            return Err(MoneyError::invalid(format!(
                "fraction digits must be at most {MAX_FRACTION_DIGITS}, got {digits}"
            )));
        }

        Ok(Self {
            code: Cow::Owned(code),
            fraction_digits: digits,
            cent_factor: 10_i64.pow(digits),
        })
    }

    const fn predefined(code: &'static str, fraction_digits: u32) -> Self {
        Self {
            code: Cow::Borrowed(code),
            fraction_digits,
            cent_factor: 10_i64.pow(fraction_digits),
        }
    }

    /// Returns the currency code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the number of decimal places between major and minor unit.
    #[must_use]
    pub const fn fraction_digits(&self) -> u32 {
        self.fraction_digits
    }

    /// Returns `10^fraction_digits`.
    #[must_use]
    pub const fn cent_factor(&self) -> i64 {
        self.cent_factor
    }

    /// Returns true if both currencies carry the same code.
    #[must_use]
    pub fn same_code(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Wire shape of a [`Currency`]; the cent factor is always derived.
#[derive(Serialize, Deserialize)]
struct CurrencyRepr {
    code: String,
    fraction_digits: i32,
}

impl TryFrom<CurrencyRepr> for Currency {
    type Error = MoneyError;

    fn try_from(repr: CurrencyRepr) -> MoneyResult<Self> {
        Self::new(repr.code, repr.fraction_digits)
    }
}

impl From<Currency> for CurrencyRepr {
    fn from(currency: Currency) -> Self {
        Self {
            code: currency.code.into_owned(),
            // MAX_FRACTION_DIGITS keeps this lossless.
            fraction_digits: i32::try_from(currency.fraction_digits).unwrap_or(i32::MAX),
        }
    }
}
