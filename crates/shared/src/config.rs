//! Application configuration management.

use serde::Deserialize;

use crate::error::MoneyResult;
use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Currency used for amounts given without one.
    #[serde(default)]
    pub currency: CurrencyConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default currency configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyConfig {
    /// Currency code.
    #[serde(default = "default_code")]
    pub code: String,
    /// Number of fraction digits.
    #[serde(default = "default_fraction_digits")]
    pub fraction_digits: i32,
}

fn default_code() -> String {
    "USD".to_string()
}

fn default_fraction_digits() -> i32 {
    2
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            code: default_code(),
            fraction_digits: default_fraction_digits(),
        }
    }
}

impl CurrencyConfig {
    /// Builds the configured currency.
    ///
    /// # Errors
    ///
    /// Returns an error if the code or fraction digits are invalid.
    pub fn to_currency(&self) -> MoneyResult<Currency> {
        Currency::new(self.code.clone(), self.fraction_digits)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_filter() -> String {
    "centum=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("CENTUM")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
