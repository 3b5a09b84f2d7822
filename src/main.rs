//! Demo entry point for the transaction pricer.
//!
//! `transaction-pricer` prices a sample transaction at the current local
//! time and prints the report. `transaction-pricer serve [ADDR]` serves the
//! HTTP API (default `127.0.0.1:3000`).

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use transaction_pricer::api::{AppState, create_router};
use transaction_pricer::calculation::calculate_transaction_total;
use transaction_pricer::clock::SystemClock;
use transaction_pricer::config::{ConfigLoader, PricingConfig};
use transaction_pricer::models::{LineItemInput, TransactionInput};
use transaction_pricer::report::render_report;

const CONFIG_DIR: &str = "./config/default";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let config = load_config();
    let mut args = std::env::args().skip(1);

    match args.next().as_deref() {
        Some("serve") => {
            let addr = args.next().unwrap_or_else(|| DEFAULT_ADDR.to_string());
            serve(config, &addr).await
        }
        Some(other) => anyhow::bail!("unknown command '{}'; expected 'serve [ADDR]'", other),
        None => run_demo(config.config()),
    }
}

fn load_config() -> ConfigLoader {
    match ConfigLoader::load(CONFIG_DIR) {
        Ok(loader) => loader,
        Err(err) => {
            warn!(error = %err, "Falling back to built-in pricing configuration");
            ConfigLoader::from(PricingConfig::default())
        }
    }
}

async fn serve(config: ConfigLoader, addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, "Serving transaction pricer API");

    axum::serve(listener, create_router(AppState::new(config)))
        .await
        .context("server error")
}

fn run_demo(config: &PricingConfig) -> Result<()> {
    let sample = TransactionInput {
        region: Some("CA".to_string()),
        premium_customer: true,
        items: vec![
            demo_item("Gaming Laptop", Decimal::new(250000, 2), "luxury"),
            demo_item("Software License", Decimal::new(19999, 2), "digital"),
            demo_item("Import Fees", Decimal::new(15000, 2), "imported"),
            demo_item("Accessories", Decimal::new(7500, 2), "standard"),
        ],
    };

    println!("=== Transaction Pricer ===");
    println!("Processing regional transaction...");
    println!();

    let result = calculate_transaction_total(sample, config, &SystemClock)?;
    print!("{}", render_report(&result));

    Ok(())
}

fn demo_item(description: &str, amount: Decimal, category: &str) -> LineItemInput {
    LineItemInput {
        description: Some(description.to_string()),
        amount: Some(amount),
        category: Some(category.to_string()),
    }
}
