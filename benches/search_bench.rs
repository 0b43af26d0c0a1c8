//! Benchmarks for the predicate-driven scan helpers.
//!
//! Sizes cover the realistic range: argument lists (tens), id tables
//! (thousands), and a deliberately oversized slice to confirm the scan stays
//! linear with no hidden cost in the strategy hook.
//!
//! Run with: cargo bench

use bedrock::{get_first_true, get_first_true_by, get_last_true};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SIZES: &[usize] = &[64, 4_096, 262_144];

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicate_scan");
    for &size in SIZES {
        let items: Vec<u64> = (0..size as u64).collect();
        group.throughput(Throughput::Elements(size as u64));

        // Worst case for the forward scan: the only hit is the last element.
        let needle = size as u64 - 1;
        group.bench_with_input(
            BenchmarkId::new("first_true_hit_last", size),
            &items,
            |b, items| {
                b.iter(|| *get_first_true(black_box(items), &0, |n| *n == needle));
            },
        );

        // Worst case for the reverse scan: the only hit is the first element.
        group.bench_with_input(
            BenchmarkId::new("last_true_hit_first", size),
            &items,
            |b, items| {
                b.iter(|| *get_last_true(black_box(items), &0, |n| *n == 0));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("no_match_default", size),
            &items,
            |b, items| {
                b.iter(|| *get_first_true(black_box(items), &0, |_| false));
            },
        );

        // Same scan through the explicit order provider, to keep the hook
        // honest about being zero-cost.
        group.bench_with_input(
            BenchmarkId::new("first_true_by_forward", size),
            &items,
            |b, items| {
                b.iter(|| {
                    *get_first_true_by(black_box(items), &0, |n| *n == needle, |s| s.iter())
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
