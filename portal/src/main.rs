//! MizuCash Portal CLI
//!
//! Quote transfers, browse the activity feed and submit simulated sends
//! from the command line.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mizu_common::{catalog, format_balance, Currency};
use mizu_fx::{FeedFileProvider, RateSnapshotCache};
use mizu_quote::{format_minor_units, QuoteConfig, QuoteResult, QuoteSummary};
use mizu_portal::{
    demo, paginate, recipients, Portal, PortalConfig, SendRequest, SimulatedTransferService,
};

/// MizuCash portal CLI
#[derive(Parser, Debug)]
#[command(name = "portal")]
#[command(about = "MizuCash send-money portal")]
struct Args {
    /// Quote configuration JSON (bounds, rates, fees)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Rate feed file to load rates from
    #[arg(long, global = true)]
    rates_feed: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Quote an amount for a payout currency
    Quote {
        /// Amount in USD, as typed
        #[arg(short, long)]
        amount: String,

        /// Payout currency
        #[arg(short, long, default_value = "GBP")]
        currency: String,
    },

    /// Show a page of recent activity
    Activity {
        #[arg(long, default_value = "1")]
        page: usize,

        #[arg(long, default_value = "15")]
        page_size: usize,
    },

    /// List payout currencies
    Currencies,

    /// Search quick recipients
    Recipients {
        /// Name or handle to match
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Validate, quote and submit a simulated transfer
    Send {
        /// Recipient email or phone number
        #[arg(short, long)]
        recipient: String,

        /// Amount in USD
        #[arg(short, long)]
        amount: String,

        /// Payout currency
        #[arg(short, long, default_value = "GBP")]
        currency: String,

        /// Optional note
        #[arg(long)]
        note: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = PortalConfig::from_env();

    init_logging(&config);

    if let Some(path) = &args.config {
        let body = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        config.quote = QuoteConfig::from_json(&body)?.with_env_overrides();
    }

    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return Err(anyhow::anyhow!("Configuration error: {}", e));
    }

    let transfers = Arc::new(SimulatedTransferService::new(config.transfer_delay));
    let portal = Portal::new(config, transfers)?;

    if let Some(path) = &args.rates_feed {
        let provider = FeedFileProvider::new(path);
        let cache = RateSnapshotCache::new();
        let count = portal.refresh_rates(&cache, &provider).await?;
        info!(currencies = count, feed = %path.display(), "Loaded rates from feed");
    }

    match args.command {
        Command::Quote { amount, currency } => {
            let currency = Currency::parse(&currency)?;
            let result = portal.quote(&amount, &currency).await;
            match (args.json, result.quote()) {
                (true, Some(quote)) => println!("{}", serde_json::to_string_pretty(quote)?),
                _ => print_quote(&result),
            }
        }
        Command::Activity { page, page_size } => {
            let items = demo::recent_activity();
            let page = paginate(&items, page, page_size);

            if args.json {
                println!("{}", serde_json::to_string_pretty(&page)?);
                return Ok(());
            }

            println!("Available balance: ${} USD", format_balance(portal.available_usd()));
            if page.is_empty() {
                println!("No activity yet. Your transfers will show up here.");
                return Ok(());
            }
            for item in page.items {
                let arrow = if item.kind.is_outbound() { "↗" } else { "↙" };
                println!("{} {:<24} {:<16} {:>12}", arrow, item.title, item.meta, item.amount);
            }
            println!(
                "Showing {}–{} of {} (page {}/{})",
                page.showing_from, page.showing_to, page.total_items, page.page, page.total_pages
            );
        }
        Command::Currencies => {
            for info in catalog::supported_currencies() {
                println!("{} {} {}", info.flag, info.code, info.name);
            }
        }
        Command::Recipients { query } => {
            let recipients = demo::quick_recipients();
            let matches = recipients::filter(&recipients, &query);
            if matches.is_empty() {
                println!("No recipients match \"{}\".", query);
            }
            for recipient in matches {
                println!("[{}] {:<12} {}", recipient.initials(), recipient.name, recipient.handle);
            }
        }
        Command::Send {
            recipient,
            amount,
            currency,
            note,
        } => {
            let mut request = SendRequest::new(recipient, amount, Currency::parse(&currency)?);
            if let Some(note) = note {
                request = request.with_note(note);
            }

            match portal.send(&request).await {
                Ok(receipt) if args.json => {
                    println!("{}", serde_json::to_string_pretty(&receipt)?);
                }
                Ok(receipt) => {
                    println!("{}", receipt.message);
                    println!(
                        "Transfer {}: recipient gets {} {}",
                        receipt.id,
                        format_minor_units(receipt.quote.payout_minor_units),
                        receipt.quote.currency
                    );
                }
                Err(e) => {
                    error!(error = %e, "Transfer not sent");
                    return Err(anyhow::anyhow!("Attention needed: {}", e));
                }
            }
        }
    }

    Ok(())
}

fn init_logging(config: &PortalConfig) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.log_level.clone()),
    );
    let json = config.log_json;

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}

fn print_quote(result: &QuoteResult) {
    match result {
        QuoteResult::Empty => println!("Enter an amount to see a quote."),
        QuoteResult::Invalid(err) => println!("Attention needed: {}", err),
        QuoteResult::Valid(quote) => println!("{}", QuoteSummary::from_quote(quote)),
        QuoteResult::UnsupportedCurrency(quote) => {
            println!(
                "Warning: no FX rate for {}, quoted at 1:1 with no conversion.",
                quote.currency
            );
            println!("{}", QuoteSummary::from_quote(quote));
        }
    }
}
