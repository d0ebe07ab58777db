//! Criterion micro-benchmarks for line rasterization and line of sight.

use criterion::{criterion_group, criterion_main, Criterion};
use sightline_bench::{reference_map, sample_pairs};
use sightline_core::Coordinate;
use sightline_grid::{line_of_sight, rasterize};
use std::hint::black_box;

/// Benchmark: rasterize 1000 random segments inside a 100x100 extent.
fn bench_rasterize_1k(c: &mut Criterion) {
    let pairs = sample_pairs(1000, 100, 42);

    c.bench_function("rasterize_1k", |b| {
        b.iter(|| {
            for &(from, to) in &pairs {
                black_box(rasterize(from, to));
            }
        });
    });
}

/// Benchmark: a single long shallow segment.
fn bench_rasterize_long(c: &mut Criterion) {
    let from = Coordinate::new(0, 0);
    let to = Coordinate::new(1000, 333);

    c.bench_function("rasterize_long", |b| {
        b.iter(|| black_box(rasterize(black_box(from), black_box(to))));
    });
}

/// Benchmark: 1000 line-of-sight checks on the reference map.
fn bench_line_of_sight_reference(c: &mut Criterion) {
    let map = reference_map(42);
    let pairs = sample_pairs(1000, 100, 7);

    c.bench_function("line_of_sight_reference_1k", |b| {
        b.iter(|| {
            let visible = pairs
                .iter()
                .filter(|&&(from, to)| line_of_sight(&map, from, to, false))
                .count();
            black_box(visible)
        });
    });
}

criterion_group!(
    benches,
    bench_rasterize_1k,
    bench_rasterize_long,
    bench_line_of_sight_reference
);
criterion_main!(benches);
