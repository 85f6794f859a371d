//! Order book module.
//!
//! ## Architecture
//!
//! The book is an aggregated (price-level only) limit order book:
//!
//! - **Slab-backed linked lists**: One sorted list of levels per side
//! - **Directional cursor**: Scan from either end, splice at the stop point
//! - **Copy-on-write levels**: Upserts swap whole `PriceLevel` values
//!
//! ## Components
//!
//! - [`Node`]: List node with slab-key links
//! - [`SlabList`]: Doubly linked list stored in a slab
//! - [`cursor`]: `locate` plus single-use insert/replace/remove
//! - [`OrderBook`]: Bid and ask sides, queries, JSON, fingerprint
//! - [`diff`](diff::diff): Minimal upserts between two snapshots
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Upsert | O(k), k = levels scanned from the chosen end |
//! | Best bid/ask | O(1) |
//! | Volume at price | O(k), k = levels at or better than the limit |
//! | Diff | O(n log n) |
//!
//! ## Example
//!
//! ```
//! use aggregated_lob::orderbook::OrderBook;
//!
//! let mut book = OrderBook::new(10);
//!
//! book.bid(99, 500, true);
//! book.ask(101, 300, true);
//!
//! assert_eq!(book.spread(), Some(2));
//! assert!(book.is_consistent());
//! ```

pub mod node;
pub mod list;
pub mod cursor;
pub mod book;
pub mod diff;
pub mod json;

pub use node::Node;
pub use list::SlabList;
pub use cursor::{Cursor, SortOrder};
pub use book::{Levels, OrderBook, Upsert};
pub use json::SpacedFormatter;
