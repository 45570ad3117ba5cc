//! Money arithmetic and allocation.
//!
//! - `value` - the `Money` value type
//! - `allocation` - loss-free splitting of minor units
//! - `rounding` - float to minor-unit conversion (half away from zero)

pub mod allocation;
mod rounding;
pub mod value;

#[cfg(test)]
mod props;

pub use allocation::AllocationUtil;
pub use value::Money;

use centum_shared::MoneyResult;
use centum_shared::types::{BTC, EUR, GBP, JPY, USD, XBT};

/// Money in US dollars.
pub fn dollar(amount: f64) -> MoneyResult<Money> {
    Money::new(amount, USD)
}

/// Money in euros.
pub fn euro(amount: f64) -> MoneyResult<Money> {
    Money::new(amount, EUR)
}

/// Money in pounds sterling.
pub fn pound(amount: f64) -> MoneyResult<Money> {
    Money::new(amount, GBP)
}

/// Money in yen.
pub fn yen(amount: f64) -> MoneyResult<Money> {
    Money::new(amount, JPY)
}

/// Money in bitcoin, five fraction digits.
pub fn bitcoin(amount: f64) -> MoneyResult<Money> {
    Money::new(amount, BTC)
}

/// Money in bitcoin at satoshi precision.
pub fn xbt(amount: f64) -> MoneyResult<Money> {
    Money::new(amount, XBT)
}
