//! OrderedSet benchmarks.
//!
//! Compares incremental `insert` with `find` and a full position walk, across
//! sizes on both sides of the inline storage capacity.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use ordset::engine::INLINE_CAPACITY;
use ordset::typed::OrderedSet;
use std::hint::black_box;

const SIZES: [usize; 4] = [INLINE_CAPACITY, 100, 1000, 5000];

/// Pre-generates values in an interleaved order so inserts land mid-set.
fn generate_values(size: usize) -> Vec<u64> {
    (0..size as u64)
        .map(|value| value.wrapping_mul(2_654_435_761) % (size as u64 * 4))
        .collect()
}

fn build(values: &[u64]) -> OrderedSet<u64> {
    values.iter().copied().collect()
}

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ordered_set_insert");

    for size in SIZES {
        let values = generate_values(size);
        group.bench_with_input(BenchmarkId::new("insert", size), &values, |bencher, values| {
            bencher.iter_batched(
                OrderedSet::<u64>::new,
                |mut set| {
                    for value in values {
                        let _ = set.insert(black_box(value));
                    }
                    black_box(set)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_find(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ordered_set_find");

    for size in SIZES {
        let values = generate_values(size);
        let set = build(&values);
        group.bench_with_input(BenchmarkId::new("find", size), &values, |bencher, values| {
            bencher.iter(|| {
                for value in values {
                    let _ = black_box(set.find(black_box(value)));
                }
            });
        });
    }

    group.finish();
}

fn benchmark_walk(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ordered_set_walk");

    for size in SIZES {
        let set = build(&generate_values(size));
        group.bench_with_input(BenchmarkId::new("positions", size), &set, |bencher, set| {
            bencher.iter(|| {
                let mut total = 0_u64;
                let mut position = set.begin();
                while let Ok(value) = set.get(position) {
                    total = total.wrapping_add(*value);
                    position = set.successor(position);
                }
                black_box(total)
            });
        });
        group.bench_with_input(BenchmarkId::new("iter", size), &set, |bencher, set| {
            bencher.iter(|| black_box(set.iter().fold(0_u64, |total, value| total.wrapping_add(*value))));
        });
    }

    group.finish();
}

fn benchmark_clone(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ordered_set_clone");

    for size in SIZES {
        let set = build(&generate_values(size));
        group.bench_with_input(BenchmarkId::new("try_clone", size), &set, |bencher, set| {
            bencher.iter(|| black_box(set.try_clone()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_find,
    benchmark_walk,
    benchmark_clone
);
criterion_main!(benches);
