//! Aggregated LOB - Demo Binary
//!
//! Replays a short quote stream into a book, reconciles it against a
//! snapshot and prints the result.
//!
//! ```bash
//! # Optional JSON config: { "max_depth": 5 }
//! RUST_LOG=aggregated_lob=trace cargo run -- book.json
//! ```

use std::error::Error;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use aggregated_lob::types::price::{format_scaled, parse_scaled};
use aggregated_lob::{BookConfig, OrderBook, PriceLevel, Side};

/// Decimal places of the demo quotes
const DECIMALS: u32 = 2;

/// (side, price, volume) updates as a feed would deliver them
const QUOTES: &[(Side, &str, i64)] = &[
    (Side::Bid, "100.00", 1_000),
    (Side::Bid, "99.50", 1_500),
    (Side::Bid, "100.25", 500),
    (Side::Ask, "100.75", 800),
    (Side::Ask, "101.00", 1_200),
    (Side::Ask, "100.50", 300),
    (Side::Bid, "100.00", 300),
    (Side::Ask, "101.00", 0),
];

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => BookConfig::from_json(&std::fs::read_to_string(&path)?)?,
        None => BookConfig::default(),
    };
    info!(?config, "starting book");

    let mut book = OrderBook::with_config(&config);

    for &(side, quote, volume) in QUOTES {
        let Some(price) = parse_scaled(quote, DECIMALS) else {
            warn!(quote, "skipping unparseable quote");
            continue;
        };
        let from_top = book.suggest_from_top(side, price);
        let outcome = book.upsert(side, price, volume, from_top);
        info!(%side, quote, volume, ?outcome, "applied quote");
    }

    book.validate()?;
    print_book(&book);

    // A fresh snapshot arrives; apply only what changed
    let snapshot = [
        PriceLevel::new(10_025, 400),
        PriceLevel::new(10_000, 300),
        PriceLevel::new(9_975, 900),
    ];
    let applied = book.reconcile(Side::Bid, &snapshot);
    info!(operations = applied.len(), "bids reconciled");

    book.validate()?;
    print_book(&book);

    println!("JSON:        {}", book.to_json(0));
    println!("Fingerprint: {}", book.fingerprint_hex());
    Ok(())
}

fn print_book(book: &OrderBook) {
    println!("-------------------------------------------");
    for level in book.asks(0).rev() {
        println!("  ask {:>10} x {}", format_scaled(level.price(), DECIMALS), level.volume());
    }
    for level in book.bids(0) {
        println!("  bid {:>10} x {}", format_scaled(level.price(), DECIMALS), level.volume());
    }
    match book.spread() {
        Some(spread) => println!("  spread {}", format_scaled(spread, DECIMALS)),
        None => println!("  spread n/a"),
    }
    println!("  consistent: {}", book.is_consistent());
}
