//! Common types used across the workspace.

pub mod currency;

pub use currency::{BTC, Currency, EUR, GBP, JPY, MAX_FRACTION_DIGITS, USD, XBT};
