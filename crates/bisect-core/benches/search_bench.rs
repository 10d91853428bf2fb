//! Search throughput against the standard library.

#![allow(missing_docs)]

use bisect_core::{equal_range, search};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [16usize, 1_024, 65_536, 1_048_576] {
        let values: Vec<u64> = (0..size as u64).map(|n| n * 2).collect();
        let targets: Vec<u64> = (0..64u64).map(|n| n * (size as u64 / 32)).collect();

        group.bench_with_input(BenchmarkId::new("bisect", size), &values, |b, values| {
            b.iter(|| {
                for t in &targets {
                    black_box(search(values, black_box(t)));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("std", size), &values, |b, values| {
            b.iter(|| {
                for t in &targets {
                    black_box(values.binary_search(black_box(t)).ok());
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("equal_range", size), &values, |b, values| {
            b.iter(|| {
                for t in &targets {
                    black_box(equal_range(values, black_box(t)));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
