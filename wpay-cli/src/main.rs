//! Wallet Pay command-line client
//!
//! Creates and inspects store orders and checks webhook signatures.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use config::{ConfigLoader, Overrides};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wpay_sdk::objects::CurrencyCode;

/// Wallet Pay - store API client
#[derive(Parser, Debug)]
#[command(name = "wpay")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "./wpay-config.toml")]
    config: PathBuf,

    /// Store API key (overrides the configuration file)
    #[arg(long, env = "WPAY_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Override the store API base URL
    #[arg(long, env = "WPAY_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an order
    CreateOrder {
        /// Order amount, e.g. 10.5
        #[arg(long)]
        amount: rust_decimal::Decimal,
        /// Currency code (TON, BTC, USDT, EUR, USD, RUB)
        #[arg(long, value_parser = parse_currency)]
        currency: CurrencyCode,
        #[arg(long)]
        description: String,
        /// Order id in the merchant system
        #[arg(long)]
        external_id: String,
        #[arg(long)]
        customer_telegram_user_id: i64,
        #[arg(long)]
        return_url: Option<String>,
        #[arg(long)]
        fail_return_url: Option<String>,
        #[arg(long)]
        custom_data: Option<String>,
        #[arg(long)]
        timeout_seconds: Option<u32>,
    },
    /// Show an order by id
    Preview { id: String },
    /// List store orders sorted by creation time
    List {
        #[arg(long, default_value_t = 0)]
        offset: u64,
        #[arg(long, default_value_t = 100)]
        count: u32,
    },
    /// Show the total amount of store orders
    Amount,
    /// Check the signature of a webhook delivery
    Verify {
        /// HTTP method of the delivery
        #[arg(long, default_value = "POST")]
        method: String,
        /// URI path the delivery was received on
        #[arg(long)]
        uri: String,
        /// Value of the WalletPay-Timestamp header
        #[arg(long)]
        timestamp: String,
        /// Value of the WalletPay-Signature header
        #[arg(long)]
        signature: String,
        /// File holding the raw request body
        #[arg(long)]
        body: PathBuf,
    },
    /// Compute the signature Wallet Pay would send for a body
    Sign {
        #[arg(long, default_value = "POST")]
        method: String,
        #[arg(long)]
        uri: String,
        #[arg(long)]
        timestamp: String,
        #[arg(long)]
        body: PathBuf,
    },
}

fn parse_currency(value: &str) -> Result<CurrencyCode, String> {
    serde_json::from_value(serde_json::Value::String(value.to_uppercase()))
        .map_err(|_| format!("unsupported currency: {value}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();

    let loader = ConfigLoader::new(
        &args.config,
        Overrides {
            api_key: args.api_key,
            base_url: args.base_url,
        },
    );
    let client_config = loader.load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;
    tracing::debug!(config = ?client_config, "Configuration loaded");

    let outcome = commands::run(args.command, client_config).await?;
    if let commands::Outcome::InvalidSignature = outcome {
        std::process::exit(1);
    }
    Ok(())
}

/// Initialize the tracing subscriber with environment-based filtering.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
