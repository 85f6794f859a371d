//! Snapshot diff.
//!
//! Computes the upsert operations that turn one set of price levels into
//! another. Each operation is a [`PriceLevel`]: a positive volume means
//! "create or update", a zero volume means "delete".
//!
//! Example: `[(1200, 5600), (1500, 1800), (1520, 0)]` means update or
//! create 1200 with 5600, update or create 1500 with 1800, delete 1520.
//!
//! Operations are independent of each other and can be applied in any
//! order. They are returned sorted by price so that the same inputs always
//! produce the same output.

use std::collections::BTreeMap;

use crate::types::PriceLevel;

/// Operations that morph `original` into `updated`.
///
/// Both inputs are treated as sets keyed by price; input order does not
/// matter. If a price repeats within one input, its last occurrence wins.
///
/// - price in both with a different volume: `(price, updated volume)`
/// - price only in `original`: `(price, 0)`
/// - price only in `updated`: `(price, updated volume)`
///
/// # Example
///
/// ```
/// use aggregated_lob::{diff, PriceLevel};
///
/// let original = [PriceLevel::new(50, 1000), PriceLevel::new(20, 500)];
/// let updated = [PriceLevel::new(50, 700)];
///
/// let ops = diff(&original, &updated);
/// assert_eq!(ops, vec![PriceLevel::delete(20), PriceLevel::new(50, 700)]);
/// ```
pub fn diff(original: &[PriceLevel], updated: &[PriceLevel]) -> Vec<PriceLevel> {
    let before = by_price(original);
    let after = by_price(updated);

    let mut ops: Vec<PriceLevel> = before
        .iter()
        .filter_map(|(&price, &volume)| match after.get(&price) {
            Some(&new_volume) if new_volume != volume => Some(PriceLevel::new(price, new_volume)),
            Some(_) => None,
            None => Some(PriceLevel::delete(price)),
        })
        .collect();

    ops.extend(
        after
            .iter()
            .filter(|(price, _)| !before.contains_key(*price))
            .map(|(&price, &volume)| PriceLevel::new(price, volume)),
    );

    ops.sort_unstable_by_key(PriceLevel::price);
    ops
}

fn by_price(levels: &[PriceLevel]) -> BTreeMap<i64, i64> {
    levels.iter().map(|level| (level.price(), level.volume())).collect()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(pairs: &[(i64, i64)]) -> Vec<PriceLevel> {
        pairs.iter().copied().map(PriceLevel::from).collect()
    }

    #[test]
    fn test_diff_to_empty_deletes_everything() {
        let ops = diff(&levels(&[(50, 1000), (20, 500)]), &[]);
        assert_eq!(ops, levels(&[(20, 0), (50, 0)]));
    }

    #[test]
    fn test_diff_volume_changes() {
        let ops = diff(&levels(&[(50, 1000), (20, 500)]), &levels(&[(50, 700), (20, 550)]));
        assert_eq!(ops, levels(&[(20, 550), (50, 700)]));
    }

    #[test]
    fn test_diff_from_empty_creates_everything() {
        let ops = diff(&[], &levels(&[(30, 1), (10, 2)]));
        assert_eq!(ops, levels(&[(10, 2), (30, 1)]));
    }

    #[test]
    fn test_diff_of_self_is_empty() {
        let snapshot = levels(&[(70, 500), (60, 300), (50, 1500)]);
        assert!(diff(&snapshot, &snapshot).is_empty());
        assert!(diff(&[], &[]).is_empty());
    }

    #[test]
    fn test_diff_ignores_input_order() {
        let a = levels(&[(70, 500), (60, 300)]);
        let b = levels(&[(60, 300), (70, 500)]);
        assert!(diff(&a, &b).is_empty());
    }

    #[test]
    fn test_diff_mixed() {
        let original = levels(&[(1200, 5000), (1500, 1800), (1520, 10)]);
        let updated = levels(&[(1200, 5600), (1500, 1800), (1100, 40)]);

        let ops = diff(&original, &updated);

        assert_eq!(ops, levels(&[(1100, 40), (1200, 5600), (1520, 0)]));
    }

    #[test]
    fn test_diff_duplicate_price_last_wins() {
        let original = levels(&[(10, 1), (10, 5)]);
        let updated = levels(&[(10, 5)]);
        assert!(diff(&original, &updated).is_empty());
    }
}
