//! Shared types, errors, and configuration for Centum.
//!
//! This crate provides the leaf types the rest of the workspace builds on:
//! - `Currency` descriptors and the predefined constants
//! - The `MoneyError` taxonomy
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{MoneyError, MoneyResult};
pub use types::Currency;
