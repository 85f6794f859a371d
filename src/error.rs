//! Error types for the aggregated order book.
//!
//! Mutations accept every integer input, so nothing on the upsert path
//! returns an error. Errors come from invariant probes
//! ([`OrderBook::validate`](crate::OrderBook::validate),
//! [`OrderBook::ensure_consistent`](crate::OrderBook::ensure_consistent))
//! and from JSON config loading or snapshot writing.

use thiserror::Error;

use crate::types::Side;

/// Result type alias for book operations.
pub type Result<T> = std::result::Result<T, BookError>;

/// Main error type for book operations.
#[derive(Error, Debug)]
pub enum BookError {
    /// Two adjacent levels are out of the side's sort order
    #[error("{side} levels out of order: {previous} before {next}")]
    Unsorted { side: Side, previous: i64, next: i64 },

    /// A price appears more than once on one side
    #[error("duplicate {side} price level at {price}")]
    DuplicatePrice { side: Side, price: i64 },

    /// A stored level carries a delete-sentinel volume
    #[error("{side} level at {price} has non-positive volume {volume}")]
    NonPositiveVolume { side: Side, price: i64, volume: i64 },

    /// Best bid above best ask
    #[error("crossed book: best bid {bid} > best ask {ask}")]
    Crossed { bid: i64, ask: i64 },

    /// JSON config parsing or snapshot writing failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
