//! Bankdash demo dashboard.
//!
//! Renders mock accounts and transactions through the core formatters and
//! prints the result, standing in for the view layer.
//!
//! Usage: cargo run --bin bankdash [-- --json]

mod mock;

use bankdash_core::currency::ReferenceTables;
use bankdash_core::dashboard::{DashboardService, DashboardSummary};
use bankdash_core::datetime::RenderClock;
use bankdash_shared::AppConfig;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bankdash=info,bankdash_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load()?;
    info!(
        currency = %config.display.currency,
        timezone = config.display.timezone.as_deref().unwrap_or("local"),
        rounding = ?config.display.rounding,
        "Display configured"
    );

    let tables = ReferenceTables::global();
    let service = DashboardService::from_config(tables, &config.display)?;

    let clock = RenderClock::capture(service.zone());

    let accounts = mock::accounts();
    let transactions = mock::transactions(clock.now());
    info!(
        accounts = accounts.len(),
        transactions = transactions.len(),
        "Mock data generated"
    );

    let summary = service.render_at(&accounts, &transactions, &clock);

    if std::env::args().any(|arg| arg == "--json") {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    Ok(())
}

fn print_summary(summary: &DashboardSummary) {
    println!("Total balance ({}): {}", summary.display_currency, summary.total_balance_label);
    if !summary.unconverted_accounts.is_empty() {
        println!(
            "  ({} account(s) without a rate to {})",
            summary.unconverted_accounts.len(),
            summary.display_currency
        );
    }

    println!();
    println!("Accounts");
    for account in &summary.accounts {
        match &account.converted_label {
            Some(converted) => {
                println!("  {:<20} {:>14}  ≈ {converted}", account.name, account.balance_label);
            }
            None => println!("  {:<20} {:>14}", account.name, account.balance_label),
        }
    }

    println!();
    println!("Recent transactions");
    for tx in &summary.transactions {
        println!(
            "  {:<18} {:<20} {:<14} {:>12}",
            tx.date_label, tx.name, tx.category_label, tx.amount_label
        );
    }
}
