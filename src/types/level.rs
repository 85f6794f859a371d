//! Aggregated price level.
//!
//! A `PriceLevel` is the total resting volume at one price on one side of
//! the book. Levels are immutable values: the book never edits a stored
//! level's volume, it swaps in a freshly built level instead.
//!
//! ## Delete Sentinel
//!
//! A level with `volume <= 0` never rests in a book. When fed to an upsert
//! (or emitted by [`diff`](crate::orderbook::diff)) it means "remove the
//! level at this price".

use std::fmt;

use serde::ser::{Serialize, SerializeTuple, Serializer};

/// An immutable (price, volume) pair with value equality.
///
/// ## Example
///
/// ```
/// use aggregated_lob::PriceLevel;
///
/// let level = PriceLevel::new(50, 1000);
/// assert_eq!(level, PriceLevel::new(50, 1000));
/// assert!(!level.is_delete());
/// assert!(PriceLevel::delete(50).is_delete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PriceLevel {
    /// Price in integer ticks
    price: i64,

    /// Aggregated volume; `<= 0` marks a delete operation
    volume: i64,
}

impl PriceLevel {
    /// Create a new price level
    #[inline]
    pub const fn new(price: i64, volume: i64) -> Self {
        Self { price, volume }
    }

    /// Create a delete operation for `price`
    #[inline]
    pub const fn delete(price: i64) -> Self {
        Self { price, volume: 0 }
    }

    #[inline]
    pub const fn price(&self) -> i64 {
        self.price
    }

    #[inline]
    pub const fn volume(&self) -> i64 {
        self.volume
    }

    /// True if this level, applied as an upsert, removes its price
    #[inline]
    pub const fn is_delete(&self) -> bool {
        self.volume <= 0
    }
}

impl From<(i64, i64)> for PriceLevel {
    fn from((price, volume): (i64, i64)) -> Self {
        Self::new(price, volume)
    }
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PriceLevel({}, {})", self.price, self.volume)
    }
}

/// Serialized as a two element `[price, volume]` array.
impl Serialize for PriceLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&self.price)?;
        pair.serialize_element(&self.volume)?;
        pair.end()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
