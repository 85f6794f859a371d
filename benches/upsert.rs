//! Benchmarks for the aggregated order book.
//!
//! ## What Is Measured
//!
//! | Group            | Question                                          |
//! |------------------|---------------------------------------------------|
//! | scan_direction   | Cost of a near-top update scanned from each end   |
//! | throughput       | Random upserts per second at several batch sizes  |
//! | queries          | Volume-at-price and JSON on a deep book           |
//! | diff             | Snapshot diff and reconcile cost                  |
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- scan_direction
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main,
    Criterion, BenchmarkId, Throughput, BatchSize
};
use std::time::Duration;

use aggregated_lob::{diff, OrderBook, PriceLevel, Side};

// ============================================================================
// HELPER FUNCTIONS - Deterministic book generation
// ============================================================================

/// Mid price for generated books (ticks)
const MID: i64 = 50_000;

/// Book with `depth` bid levels below the mid and `depth` ask levels above it
fn populated_book(depth: i64) -> OrderBook {
    let mut book = OrderBook::with_capacity(0, depth as usize + 1);
    for i in 0..depth {
        // Every other tick, so in-between prices are free for inserts
        book.bid(MID - 2 * i, 100 + i, false);
        book.ask(MID + 1 + 2 * i, 100 + i, false);
    }
    book
}

/// Snapshot of `depth` bid levels, `seed` shifts volumes and drops some prices
fn bid_snapshot(depth: i64, seed: i64) -> Vec<PriceLevel> {
    (0..depth)
        .filter(|i| (i + seed) % 7 != 0)
        .map(|i| PriceLevel::new(MID - 2 * i, 100 + (i * seed) % 50))
        .collect()
}

/// Deterministic (side, price, volume) updates around the mid
fn generate_updates(count: usize, seed: u64) -> Vec<(Side, i64, i64)> {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let offset = rng.gen_range(0..500i64);
            let volume = if rng.gen_bool(0.2) { 0 } else { rng.gen_range(1..1_000i64) };
            if rng.gen_bool(0.5) {
                (Side::Bid, MID - offset, volume)
            } else {
                (Side::Ask, MID + 1 + offset, volume)
            }
        })
        .collect()
}

// ============================================================================
// BENCHMARK: Scan Direction
// ============================================================================
// A price near the best bid should be cheap from the top, expensive from the bottom

fn bench_scan_direction(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_direction");
    group.measurement_time(Duration::from_secs(5));

    for depth in [100i64, 1_000, 10_000] {
        for (label, from_top) in [("from_top", true), ("from_bottom", false)] {
            group.bench_with_input(BenchmarkId::new(label, depth), &depth, |b, &depth| {
                let mut book = populated_book(depth);
                // Alternating insert/delete keeps the book at a fixed size
                b.iter(|| {
                    black_box(book.bid(MID - 3, 42, from_top));
                    black_box(book.bid(MID - 3, 0, from_top));
                });
            });
        }
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Throughput
// ============================================================================

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(50);

    for batch_size in [1_000, 10_000, 50_000] {
        group.throughput(Throughput::Elements(batch_size as u64));

        group.bench_with_input(BenchmarkId::new("upserts", batch_size), &batch_size, |b, &size| {
            let updates = generate_updates(size, 42);

            b.iter_batched(
                || OrderBook::with_capacity(0, 512),
                |mut book| {
                    for &(side, price, volume) in &updates {
                        let from_top = book.suggest_from_top(side, price);
                        black_box(book.upsert(side, price, volume, from_top));
                    }
                    book.bid_depth() + book.ask_depth()
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Queries
// ============================================================================

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");
    let book = populated_book(1_000);

    group.bench_function("bid_volume_at_price_top_10", |b| {
        b.iter(|| black_box(book.bid_volume_at_price(black_box(MID - 20))))
    });

    group.bench_function("to_json_20_levels", |b| {
        b.iter(|| black_box(book.to_json(20)))
    });

    group.bench_function("fingerprint_1k_levels", |b| {
        b.iter(|| black_box(book.fingerprint()))
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Diff and Reconcile
// ============================================================================

fn bench_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff");

    for depth in [100i64, 1_000] {
        let original = bid_snapshot(depth, 1);
        let updated = bid_snapshot(depth, 2);

        group.bench_with_input(BenchmarkId::new("snapshots", depth), &depth, |b, _| {
            b.iter(|| black_box(diff(&original, &updated)))
        });

        group.bench_with_input(BenchmarkId::new("reconcile", depth), &depth, |b, _| {
            b.iter_batched(
                || {
                    let mut book = OrderBook::new(0);
                    book.reconcile(Side::Bid, &original);
                    book
                },
                |mut book| black_box(book.reconcile(Side::Bid, &updated)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(
    benches,
    bench_scan_direction,
    bench_throughput,
    bench_queries,
    bench_diff
);

criterion_main!(benches);
