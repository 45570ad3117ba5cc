//! Core money logic for Centum.
//!
//! This crate contains pure arithmetic with ZERO I/O dependencies.
//! Amounts are integer minor units; every operation returns a new value.
//!
//! # Modules
//!
//! - `money` - The `Money` type, allocation and convenience constructors

pub mod money;

pub use centum_shared::types::Currency;
pub use centum_shared::{MoneyError, MoneyResult};
pub use money::{AllocationUtil, Money, bitcoin, dollar, euro, pound, xbt, yen};
