//! Centum command-line front end.
//!
//! Usage:
//!   centum allocate <amount> <weight>...  - Split an amount by weights
//!   centum split <amount> <parts>         - Split an amount into equal parts
//!   centum add <amount> <amount>          - Sum two amounts
//!   centum sub <amount> <amount>          - Subtract the second amount
//!   centum mult <amount> <factor>         - Scale an amount
//!
//! Amounts are in the configured currency (`CENTUM__CURRENCY__CODE`,
//! `CENTUM__CURRENCY__FRACTION_DIGITS`, USD by default).

use anyhow::{Context, bail};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use centum_core::{Currency, Money, MoneyError};
use centum_shared::AppConfig;
use centum_shared::config::LoggingConfig;

const USAGE: &str = "usage: centum <allocate|split|add|sub|mult> <amount> <args>...";

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.logging);

    let currency = config
        .currency
        .to_currency()
        .context("invalid currency configuration")?;
    info!(currency = %currency, "using configured currency");

    let args: Vec<String> = std::env::args().skip(1).collect();
    for money in run(&args, &currency).map_err(with_usage_hint)? {
        println!("{money}");
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| logging.filter.as_str().into());

    tracing_subscriber::registry()
        .with(filter)
        .with(logging.json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!logging.json).then(tracing_subscriber::fmt::layer))
        .init();
}

/// Executes one command and returns the resulting amounts.
fn run(args: &[String], currency: &Currency) -> anyhow::Result<Vec<Money>> {
    let Some((command, rest)) = args.split_first() else {
        bail!(USAGE);
    };
    let money = |index: usize| -> anyhow::Result<Money> {
        let value = number(rest, index)?;
        Money::new(value, currency.clone()).with_context(|| format!("invalid amount {value}"))
    };

    let result = match command.as_str() {
        "allocate" => {
            let weights = rest
                .iter()
                .skip(1)
                .map(|w| w.parse::<f64>().with_context(|| format!("invalid weight {w:?}")))
                .collect::<anyhow::Result<Vec<_>>>()?;
            money(0)?.allocate(&weights)?
        }
        "split" => {
            let parts = rest
                .get(1)
                .context(USAGE)?
                .parse::<usize>()
                .context("parts must be a whole number")?;
            money(0)?.split(parts)?
        }
        "add" => vec![money(0)?.add(&money(1)?)?],
        "sub" => vec![money(0)?.sub(&money(1)?)?],
        "mult" => vec![money(0)?.mult(number(rest, 1)?)?],
        other => bail!("unknown command {other:?}\n{USAGE}"),
    };

    Ok(result)
}

/// Points at the usage line when the input itself was rejected.
fn with_usage_hint(err: anyhow::Error) -> anyhow::Error {
    let rejected_input = err
        .downcast_ref::<MoneyError>()
        .is_some_and(MoneyError::is_argument_error);
    if rejected_input { err.context(USAGE) } else { err }
}

fn number(args: &[String], index: usize) -> anyhow::Result<f64> {
    let raw = args.get(index).context(USAGE)?;
    raw.parse::<f64>()
        .with_context(|| format!("expected a number, got {raw:?}"))
}
