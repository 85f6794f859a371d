//! Directional scan-and-splice over a sorted [`SlabList`].
//!
//! ## Design
//!
//! A side of the book is sorted by price, but an upsert may start its
//! scan from either end. [`locate`] walks the list from the chosen end and
//! stops at the first element whose key is *no better than* the target in
//! the list's sort order. That element is either the one holding the
//! target key or the neighbour the target belongs next to.
//!
//! The result is a [`Cursor`]. Its mutating methods take `self`, so each
//! located position is spent by exactly one insert, replace or remove.
//!
//! ## Stop Predicate
//!
//! ```text
//! from_top   order         keys along scan   stop when
//! true       Descending    falling           key <= target
//! false      Descending    rising            key >= target
//! true       Ascending     rising            key >= target
//! false      Ascending     falling           key <= target
//! ```
//!
//! ## Splice Position
//!
//! A new element goes between the located element and the one visited
//! just before it, i.e. "before the cursor" in scan order. If the scan
//! ran off the far end, the element goes at that far end. For an empty
//! list both ends coincide.

use crate::orderbook::SlabList;

/// Sort order of a list, head to tail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Smallest key at the head (asks)
    Ascending,
    /// Largest key at the head (bids)
    Descending,
}

/// A position found by [`locate`], bound to one subsequent mutation.
///
/// The cursor stores a node key, not a borrow, so the list can be mutated
/// through it. Using a cursor on a list other than the one it was located
/// in, or after that list changed, is a defect.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a located cursor does nothing until it is used to mutate the list"]
pub struct Cursor {
    /// Scan started at the head
    from_top: bool,

    /// Located node, or None if the scan was exhausted
    at: Option<usize>,
}

/// Scan `list` from the head (`from_top`) or tail for `target`.
///
/// `key` extracts the sort key of an element. `order` must be the order
/// the list is actually kept in.
///
/// # Example
///
/// ```
/// use aggregated_lob::orderbook::{cursor, SlabList, SortOrder};
///
/// let mut list = SlabList::new();
/// for price in [70, 60, 50] {
///     list.push_back(price);
/// }
///
/// // From the bottom, 55 stops at 60 and is spliced below it
/// let found = cursor::locate(&list, SortOrder::Descending, false, |p: &i64| *p, 55);
/// assert_eq!(found.get(&list), Some(&60));
/// found.insert(&mut list, 55);
///
/// assert_eq!(list.to_vec(), vec![70, 60, 55, 50]);
/// ```
pub fn locate<T, K>(list: &SlabList<T>, order: SortOrder, from_top: bool, key: K, target: i64) -> Cursor
where
    K: Fn(&T) -> i64,
{
    let keys_fall = from_top == (order == SortOrder::Descending);
    let step = |k: usize| if from_top { list.next_key(k) } else { list.prev_key(k) };

    let mut current = if from_top { list.head() } else { list.tail() };
    while let Some(k) = current {
        let Some(value) = list.get(k) else { break };
        let candidate = key(value);
        let reached = if keys_fall {
            candidate <= target
        } else {
            candidate >= target
        };
        if reached {
            return Cursor { from_top, at: Some(k) };
        }
        current = step(k);
    }

    Cursor { from_top, at: None }
}

impl Cursor {
    /// True if the scan found no stopping element
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.at.is_none()
    }

    /// Peek at the located element
    #[inline]
    pub fn get<'a, T>(&self, list: &'a SlabList<T>) -> Option<&'a T> {
        self.at.and_then(|k| list.get(k))
    }

    /// Splice `value` in before the cursor (in scan order)
    ///
    /// Returns the new node's key.
    pub fn insert<T>(self, list: &mut SlabList<T>, value: T) -> usize {
        match (self.at, self.from_top) {
            (Some(k), true) => list.insert_before(k, value),
            (Some(k), false) => list.insert_after(k, value),
            (None, true) => list.push_back(value),
            (None, false) => list.push_front(value),
        }
    }

    /// Swap the located element for `value`
    ///
    /// Returns the previous element, or None if the scan was exhausted
    /// (in which case the list is left untouched).
    pub fn replace<T>(self, list: &mut SlabList<T>, value: T) -> Option<T> {
        self.at.map(|k| list.replace(k, value))
    }

    /// Remove the located element
    ///
    /// Returns it, or None if the scan was exhausted.
    pub fn remove<T>(self, list: &mut SlabList<T>) -> Option<T> {
        self.at.map(|k| list.remove(k))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
