//! Aggregated limit order book.
//!
//! ## Architecture
//!
//! Each side is a [`SlabList`] of [`PriceLevel`]s kept in strict price
//! order:
//!
//! - **Bids**: Sorted high-to-low (best bid = head)
//! - **Asks**: Sorted low-to-high (best ask = head)
//!
//! Every price appears at most once per side. Levels are only ever
//! created, swapped for a new level, or removed; a stored level is never
//! edited in place.
//!
//! ## Upserts
//!
//! `bid`/`ask` unify create, update and delete. A positive volume means
//! "the level at this price now holds exactly this volume"; a volume of
//! zero or less means "there is no level at this price". The `from_top`
//! flag only chooses which end the scan starts from. It never changes the
//! resulting book, only how many levels are visited to get there.
//!
//! ## Depth Bound
//!
//! `max_depth` truncates what the book returns and serializes. It does not
//! evict stored levels.
//!
//! ## Example
//!
//! ```
//! use aggregated_lob::{OrderBook, PriceLevel};
//!
//! let mut book = OrderBook::new(0);
//! book.bid(60, 1000, true);
//! book.bid(50, 1500, true);
//! book.bid(70, 500, true);
//! book.bid(60, 300, false);
//!
//! assert_eq!(
//!     book.bid_levels(0),
//!     vec![PriceLevel::new(70, 500), PriceLevel::new(60, 300), PriceLevel::new(50, 1500)]
//! );
//! assert_eq!(book.bid_volume_at_price(60), 800);
//! ```

use std::io;
use std::iter::Take;
use std::time::{SystemTime, UNIX_EPOCH};

use sha2::{Digest, Sha256};
use tracing::{debug, trace};

use crate::config::{positive_limit, BookConfig};
use crate::error::{BookError, Result};
use crate::orderbook::cursor::{self, SortOrder};
use crate::orderbook::diff::diff;
use crate::orderbook::json::{self, LevelSeq, Snapshot};
use crate::orderbook::list::{Iter, SlabList};
use crate::types::{PriceLevel, Side};

/// Read-only view over the best levels of one side.
pub type Levels<'a> = Take<Iter<'a, PriceLevel>>;

/// What an upsert did to the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// A new level was created
    Inserted,
    /// An existing level was swapped; holds the previous level
    Replaced(PriceLevel),
    /// An existing level was deleted; holds the removed level
    Removed(PriceLevel),
    /// Delete of a price that had no level
    Ignored,
}

impl Upsert {
    /// True if the book changed
    pub fn is_change(&self) -> bool {
        !matches!(self, Upsert::Ignored)
    }
}

/// Aggregated limit order book
#[derive(Debug, Clone)]
pub struct OrderBook {
    /// Bid levels (strictly descending price)
    bids: SlabList<PriceLevel>,

    /// Ask levels (strictly ascending price)
    asks: SlabList<PriceLevel>,

    /// Milliseconds since the Unix epoch; creation time unless set
    timestamp: i64,

    /// Display bound per side, None when unbounded
    max_depth: Option<usize>,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new(0)
    }
}

impl OrderBook {
    /// Create an empty book
    ///
    /// # Arguments
    ///
    /// * `max_depth` - Levels returned per side; `<= 0` means unbounded
    pub fn new(max_depth: i32) -> Self {
        Self::with_config(&BookConfig::new(max_depth))
    }

    /// Create an empty book from a [`BookConfig`]
    pub fn with_config(config: &BookConfig) -> Self {
        Self {
            bids: SlabList::new(),
            asks: SlabList::new(),
            timestamp: now_millis(),
            max_depth: config.depth_limit(),
        }
    }

    /// Create an empty book with room for `levels_per_side` levels on each side
    ///
    /// # Example
    ///
    /// ```
    /// use aggregated_lob::OrderBook;
    ///
    /// let book = OrderBook::with_capacity(10, 1_000);
    /// assert!(book.is_empty());
    /// assert_eq!(book.max_depth(), Some(10));
    /// ```
    pub fn with_capacity(max_depth: i32, levels_per_side: usize) -> Self {
        Self {
            bids: SlabList::with_capacity(levels_per_side),
            asks: SlabList::with_capacity(levels_per_side),
            ..Self::new(max_depth)
        }
    }

    // ========================================================================
    // Timestamp and Depth
    // ========================================================================

    #[inline]
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    #[inline]
    pub fn set_timestamp(&mut self, timestamp: i64) {
        self.timestamp = timestamp;
    }

    /// Configured display bound per side
    #[inline]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Number of stored bid levels
    #[inline]
    pub fn bid_depth(&self) -> usize {
        self.bids.len()
    }

    /// Number of stored ask levels
    #[inline]
    pub fn ask_depth(&self) -> usize {
        self.asks.len()
    }

    // ========================================================================
    // Level Access
    // ========================================================================

    /// Best bids first, truncated to `max_levels` (`<= 0` for all) and to
    /// the book's depth bound
    pub fn bids(&self, max_levels: i32) -> Levels<'_> {
        self.levels(Side::Bid, max_levels)
    }

    /// Best asks first, truncated like [`bids`](Self::bids)
    pub fn asks(&self, max_levels: i32) -> Levels<'_> {
        self.levels(Side::Ask, max_levels)
    }

    pub fn levels(&self, side: Side, max_levels: i32) -> Levels<'_> {
        self.side(side).iter().take(self.display_limit(max_levels))
    }

    /// Owned copy of [`bids`](Self::bids)
    pub fn bid_levels(&self, max_levels: i32) -> Vec<PriceLevel> {
        self.bids(max_levels).copied().collect()
    }

    /// Owned copy of [`asks`](Self::asks)
    pub fn ask_levels(&self, max_levels: i32) -> Vec<PriceLevel> {
        self.asks(max_levels).copied().collect()
    }

    #[inline]
    pub fn best_bid(&self) -> Option<PriceLevel> {
        self.bids.front().copied()
    }

    #[inline]
    pub fn best_ask(&self) -> Option<PriceLevel> {
        self.asks.front().copied()
    }

    /// Best ask price minus best bid price
    ///
    /// None if either side is empty. Negative for a crossed book.
    pub fn spread(&self) -> Option<i64> {
        let bid = self.best_bid()?.price();
        let ask = self.best_ask()?.price();
        Some(ask.saturating_sub(bid))
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Create, update or delete a bid level
    ///
    /// # Arguments
    ///
    /// * `price` - Level price
    /// * `volume` - New volume; `<= 0` deletes the level
    /// * `from_top` - Start scanning at the best bid. Pass true when the
    ///   price is expected near the top of the book.
    pub fn bid(&mut self, price: i64, volume: i64, from_top: bool) -> Upsert {
        self.upsert(Side::Bid, price, volume, from_top)
    }

    /// Create, update or delete an ask level; see [`bid`](Self::bid)
    pub fn ask(&mut self, price: i64, volume: i64, from_top: bool) -> Upsert {
        self.upsert(Side::Ask, price, volume, from_top)
    }

    /// Create, update or delete a level on `side`
    ///
    /// | located level        | volume | action                         |
    /// |----------------------|--------|--------------------------------|
    /// | none                 | > 0    | insert at the far end of scan  |
    /// | none                 | <= 0   | ignored                        |
    /// | same price           | > 0    | replace with the new volume    |
    /// | same price           | <= 0   | remove                         |
    /// | worse price          | > 0    | insert before it (scan order)  |
    /// | worse price          | <= 0   | ignored                        |
    pub fn upsert(&mut self, side: Side, price: i64, volume: i64, from_top: bool) -> Upsert {
        let order = sort_order(side);
        let list = self.side_mut(side);

        let cursor = cursor::locate(list, order, from_top, PriceLevel::price, price);
        let exact = cursor.get(list).is_some_and(|level| level.price() == price);

        let outcome = match (exact, volume > 0) {
            (true, true) => cursor
                .replace(list, PriceLevel::new(price, volume))
                .map_or(Upsert::Ignored, Upsert::Replaced),
            (true, false) => cursor.remove(list).map_or(Upsert::Ignored, Upsert::Removed),
            (false, true) => {
                cursor.insert(list, PriceLevel::new(price, volume));
                Upsert::Inserted
            }
            (false, false) => Upsert::Ignored,
        };

        trace!(%side, price, volume, from_top, ?outcome, "level upsert");
        outcome
    }

    /// Scan hint for `price`: true if it is at least as close to the best
    /// level as to the worst one
    ///
    /// Feeders without their own knowledge of where a price falls can use
    /// this for the `from_top` argument.
    pub fn suggest_from_top(&self, side: Side, price: i64) -> bool {
        let list = self.side(side);
        match (list.front(), list.back()) {
            (Some(best), Some(worst)) => {
                best.price().abs_diff(price) <= worst.price().abs_diff(price)
            }
            _ => true,
        }
    }

    /// Bring `side` in line with `snapshot`, applying the minimal set of
    /// upserts
    ///
    /// Returns the applied operations (see [`diff`](crate::diff)).
    pub fn reconcile(&mut self, side: Side, snapshot: &[PriceLevel]) -> Vec<PriceLevel> {
        let current = self.side(side).to_vec();
        let operations = diff(&current, snapshot);

        for op in &operations {
            let from_top = self.suggest_from_top(side, op.price());
            self.upsert(side, op.price(), op.volume(), from_top);
        }

        debug!(%side, operations = operations.len(), levels = self.side(side).len(), "side reconciled");
        operations
    }

    /// Remove every level from both sides (the timestamp is kept)
    pub fn clear(&mut self) {
        debug!(bids = self.bids.len(), asks = self.asks.len(), "clearing book");
        self.bids.clear();
        self.asks.clear();
    }

    // ========================================================================
    // Checks
    // ========================================================================

    /// True if neither side holds a level
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// True if either side is empty or best bid <= best ask
    pub fn is_consistent(&self) -> bool {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => bid.price() <= ask.price(),
            _ => true,
        }
    }

    /// [`is_consistent`](Self::is_consistent) as a `Result`
    pub fn ensure_consistent(&self) -> Result<()> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) if bid.price() > ask.price() => Err(BookError::Crossed {
                bid: bid.price(),
                ask: ask.price(),
            }),
            _ => Ok(()),
        }
    }

    /// Probe the per-side invariants
    ///
    /// Each side must be strictly sorted (which rules out duplicate
    /// prices) and hold only positive volumes. A violation is a defect in
    /// the upsert path, never an input error.
    pub fn validate(&self) -> Result<()> {
        for side in [Side::Bid, Side::Ask] {
            let mut previous: Option<i64> = None;
            for level in self.side(side) {
                let price = level.price();
                if level.is_delete() {
                    return Err(BookError::NonPositiveVolume { side, price, volume: level.volume() });
                }
                if let Some(previous) = previous {
                    if previous == price {
                        return Err(BookError::DuplicatePrice { side, price });
                    }
                    if !side.at_least_as_good(previous, price) {
                        return Err(BookError::Unsorted { side, previous, next: price });
                    }
                }
                previous = Some(price);
            }
        }
        Ok(())
    }

    // ========================================================================
    // Volume Queries
    // ========================================================================

    /// Total volume of bids priced at or above `limit`
    pub fn bid_volume_at_price(&self, limit: i64) -> i64 {
        self.volume_at_price(Side::Bid, limit)
    }

    /// Total volume of asks priced at or below `limit`
    pub fn ask_volume_at_price(&self, limit: i64) -> i64 {
        self.volume_at_price(Side::Ask, limit)
    }

    /// Total volume on `side` at prices as good as `limit`
    ///
    /// Scans from the best level and stops at the first level worse than
    /// `limit`, which relies on the side being sorted. Covers every stored
    /// level regardless of the depth bound.
    pub fn volume_at_price(&self, side: Side, limit: i64) -> i64 {
        self.side(side)
            .iter()
            .take_while(|level| side.at_least_as_good(level.price(), limit))
            .fold(0i64, |total, level| total.saturating_add(level.volume()))
    }

    // ========================================================================
    // Serialization and Fingerprint
    // ========================================================================

    /// Flat JSON form, truncated like [`bids`](Self::bids)
    ///
    /// ```
    /// use aggregated_lob::OrderBook;
    ///
    /// let mut book = OrderBook::new(0);
    /// book.set_timestamp(7);
    /// book.bid(70, 500, true);
    /// book.bid(60, 300, true);
    ///
    /// assert_eq!(book.to_json(0), r#"{"timestamp": 7, "bids": [[70, 500], [60, 300]], "asks": []}"#);
    /// ```
    pub fn to_json(&self, max_levels: i32) -> String {
        let mut buf = Vec::with_capacity(64);
        self.write_json(&mut buf, max_levels)
            .expect("writing JSON into a Vec cannot fail");
        String::from_utf8(buf).expect("serde_json writes UTF-8")
    }

    /// Stream the flat JSON form into `writer`
    pub fn write_json<W: io::Write>(&self, writer: W, max_levels: i32) -> Result<()> {
        let snapshot = Snapshot {
            timestamp: self.timestamp,
            bids: LevelSeq(self.bids(max_levels)),
            asks: LevelSeq(self.asks(max_levels)),
        };
        json::write_snapshot(writer, &snapshot)?;
        Ok(())
    }

    /// SHA-256 over every stored level of both sides
    ///
    /// Two books with identical levels share a fingerprint regardless of
    /// timestamp, depth bound or the upsert history that built them.
    pub fn fingerprint(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for side in [Side::Bid, Side::Ask] {
            let list = self.side(side);
            hasher.update([side.to_u8()]);
            hasher.update((list.len() as u64).to_le_bytes());
            for level in list {
                hasher.update(level.price().to_le_bytes());
                hasher.update(level.volume().to_le_bytes());
            }
        }
        let result = hasher.finalize();

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&result);
        hash
    }

    /// Get the fingerprint as a hex string
    pub fn fingerprint_hex(&self) -> String {
        hex::encode(self.fingerprint())
    }

    // ========================================================================
    // Internals
    // ========================================================================

    #[inline]
    fn side(&self, side: Side) -> &SlabList<PriceLevel> {
        match side {
            Side::Bid => &self.bids,
            Side::Ask => &self.asks,
        }
    }

    #[inline]
    fn side_mut(&mut self, side: Side) -> &mut SlabList<PriceLevel> {
        match side {
            Side::Bid => &mut self.bids,
            Side::Ask => &mut self.asks,
        }
    }

    fn display_limit(&self, max_levels: i32) -> usize {
        match (positive_limit(max_levels), self.max_depth) {
            (Some(requested), Some(bound)) => requested.min(bound),
            (Some(limit), None) | (None, Some(limit)) => limit,
            (None, None) => usize::MAX,
        }
    }
}

#[inline]
fn sort_order(side: Side) -> SortOrder {
    match side {
        Side::Bid => SortOrder::Descending,
        Side::Ask => SortOrder::Ascending,
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

// ============================================================================
// Unit Tests
// ============================================================================
