//! Property-based tests for the book invariants.
//!
//! Uses proptest to check that upserts and diffs keep their guarantees
//! under arbitrary inputs:
//!
//! - Each side stays strictly sorted with unique prices
//! - Upserts are idempotent and ignore the scan hint
//! - Deleting an absent price changes nothing
//! - Applying `diff(a, b)` to a book holding `a` yields `b`
//! - Volume-at-price is monotonic in the limit

use std::collections::BTreeMap;

use aggregated_lob::{diff, OrderBook, PriceLevel, Side};
use proptest::prelude::*;

/// Prices drawn from a narrow band so updates collide often
fn arb_price() -> impl Strategy<Value = i64> {
    0i64..60
}

/// Volumes including zero and negatives (deletes)
fn arb_volume() -> impl Strategy<Value = i64> {
    prop_oneof![
        1 => -5i64..=0,
        3 => 1i64..10_000,
    ]
}

fn arb_side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Bid), Just(Side::Ask)]
}

/// (side, price, volume, from_top) upsert sequence
fn arb_updates() -> impl Strategy<Value = Vec<(Side, i64, i64, bool)>> {
    prop::collection::vec((arb_side(), arb_price(), arb_volume(), any::<bool>()), 0..200)
}

/// A snapshot with unique prices and positive volumes
fn arb_snapshot() -> impl Strategy<Value = Vec<PriceLevel>> {
    prop::collection::btree_map(arb_price(), 1i64..10_000, 0..30)
        .prop_map(|levels| levels.into_iter().map(PriceLevel::from).collect())
}

fn build(updates: &[(Side, i64, i64, bool)]) -> OrderBook {
    let mut book = OrderBook::new(0);
    for &(side, price, volume, from_top) in updates {
        book.upsert(side, price, volume, from_top);
    }
    book
}

fn as_set(levels: &[PriceLevel]) -> BTreeMap<i64, i64> {
    levels.iter().map(|l| (l.price(), l.volume())).collect()
}

proptest! {
    #[test]
    fn prop_sides_stay_sorted(updates in arb_updates()) {
        let book = build(&updates);

        prop_assert!(book.validate().is_ok());

        let bids = book.bid_levels(0);
        prop_assert!(bids.windows(2).all(|w| w[0].price() > w[1].price()));
        let asks = book.ask_levels(0);
        prop_assert!(asks.windows(2).all(|w| w[0].price() < w[1].price()));
    }

    #[test]
    fn prop_upsert_idempotent(
        updates in arb_updates(),
        side in arb_side(),
        price in arb_price(),
        volume in arb_volume(),
        first_hint in any::<bool>(),
        second_hint in any::<bool>(),
    ) {
        let mut book = build(&updates);
        book.upsert(side, price, volume, first_hint);
        let once = book.fingerprint();

        book.upsert(side, price, volume, second_hint);

        prop_assert_eq!(book.fingerprint(), once);
    }

    #[test]
    fn prop_direction_independent(updates in arb_updates()) {
        let top: Vec<_> = updates.iter().map(|&(s, p, v, _)| (s, p, v, true)).collect();
        let bottom: Vec<_> = updates.iter().map(|&(s, p, v, _)| (s, p, v, false)).collect();

        let top = build(&top);
        let bottom = build(&bottom);

        prop_assert_eq!(top.bid_levels(0), bottom.bid_levels(0));
        prop_assert_eq!(top.ask_levels(0), bottom.ask_levels(0));
    }

    #[test]
    fn prop_delete_absent_is_noop(
        updates in arb_updates(),
        side in arb_side(),
        price in 100i64..200,
        from_top in any::<bool>(),
    ) {
        let mut book = build(&updates);
        let before = book.fingerprint();

        prop_assert!(!book.upsert(side, price, 0, from_top).is_change());
        prop_assert_eq!(book.fingerprint(), before);
    }

    #[test]
    fn prop_diff_round_trip(
        original in arb_snapshot(),
        updated in arb_snapshot(),
        side in arb_side(),
        from_top in any::<bool>(),
    ) {
        let mut book = OrderBook::new(0);
        for level in &original {
            book.upsert(side, level.price(), level.volume(), from_top);
        }

        for op in diff(&original, &updated) {
            book.upsert(side, op.price(), op.volume(), !from_top);
        }

        let result: Vec<PriceLevel> = book.levels(side, 0).copied().collect();
        prop_assert_eq!(as_set(&result), as_set(&updated));
        prop_assert_eq!(result.len(), updated.len());
    }

    #[test]
    fn prop_diff_of_self_is_empty(snapshot in arb_snapshot()) {
        prop_assert!(diff(&snapshot, &snapshot).is_empty());
    }

    #[test]
    fn prop_diff_touches_only_changed_prices(
        original in arb_snapshot(),
        updated in arb_snapshot(),
    ) {
        let before = as_set(&original);
        let after = as_set(&updated);

        for op in diff(&original, &updated) {
            prop_assert_ne!(before.get(&op.price()), after.get(&op.price()));
        }
    }

    #[test]
    fn prop_volume_at_price_monotonic(updates in arb_updates(), limit in -5i64..65) {
        let book = build(&updates);

        prop_assert!(book.bid_volume_at_price(limit) >= book.bid_volume_at_price(limit + 1));
        prop_assert!(book.ask_volume_at_price(limit) <= book.ask_volume_at_price(limit + 1));
    }

    #[test]
    fn prop_volume_at_price_matches_filter(updates in arb_updates(), limit in -5i64..65) {
        let book = build(&updates);

        let bids: i64 = book.bids(0).filter(|l| l.price() >= limit).map(|l| l.volume()).sum();
        let asks: i64 = book.asks(0).filter(|l| l.price() <= limit).map(|l| l.volume()).sum();

        prop_assert_eq!(book.bid_volume_at_price(limit), bids);
        prop_assert_eq!(book.ask_volume_at_price(limit), asks);
    }
}
