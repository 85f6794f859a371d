//! Core value types for the aggregated order book
//!
//! ## Types
//!
//! - [`PriceLevel`]: Immutable (price, volume) pair
//! - [`Side`]: Bid or Ask
//!
//! ## Integer Ticks
//!
//! Prices and volumes are stored as `i64` ticks. The [`price`] module
//! converts decimal quotes to ticks and back.

mod level;
mod side;
pub mod price;

pub use level::PriceLevel;
pub use side::Side;
