//! # Aggregated LOB
//!
//! In-memory aggregated limit order book.
//!
//! ## Architecture
//!
//! - **Types**: `PriceLevel`, `Side`, fixed-point price helpers
//! - **OrderBook**: Sorted bid/ask level lists with directional upserts
//! - **Diff**: Minimal upsert set between two price level snapshots
//!
//! ## Design Principles
//!
//! 1. **Direction Independence**: The `from_top` scan hint changes cost, never results
//! 2. **No Floating Point**: Prices and volumes are integer ticks
//! 3. **Pre-allocated Memory**: Slab storage for list nodes
//! 4. **Single Threaded**: No internal locking; one book per owner
//!
//! ## Quick Start
//!
//! ```
//! use aggregated_lob::{diff, OrderBook, PriceLevel, Side};
//!
//! let mut book = OrderBook::new(0);
//! book.bid(60, 1000, true);
//! book.bid(50, 1500, true);
//! book.bid(70, 500, false);
//!
//! // Bring the bids in line with a fresh snapshot
//! let snapshot = [PriceLevel::new(70, 400), PriceLevel::new(50, 1500)];
//! let ops = diff(&book.bid_levels(0), &snapshot);
//! assert_eq!(ops, vec![PriceLevel::delete(60), PriceLevel::new(70, 400)]);
//!
//! book.reconcile(Side::Bid, &snapshot);
//! assert_eq!(book.bid_levels(0), snapshot);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: PriceLevel, Side, price helpers
pub mod types;

/// Order book: lists, cursor, book, diff, JSON
pub mod orderbook;

/// Book configuration
pub mod config;

/// Error types
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{PriceLevel, Side};
pub use orderbook::{OrderBook, Upsert};
pub use orderbook::diff::diff;
pub use config::BookConfig;
pub use error::{BookError, Result};
