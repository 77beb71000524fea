//! Benchmarks for normalization and merging.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use restfully_config::core::normalize;
use restfully_config::prelude::*;

fn raw_table(size: usize) -> Table {
    (0..size)
        .map(|i| {
            let key = if i % 2 == 0 {
                Key::text(format!("key_{}", i))
            } else {
                Key::symbol(format!("key_{}", i))
            };
            (key, Value::from(format!("value_{}", i)))
        })
        .chain(std::iter::once((
            Key::text("require"),
            Value::from((0..size).map(|i| format!("Ext{}", i)).collect::<Vec<_>>()),
        )))
        .collect()
}

/// Benchmark key normalization at several mapping sizes
fn benchmark_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for size in [8, 64, 512] {
        let raw = raw_table(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &raw, |b, raw| {
            b.iter(|| black_box(normalize(raw)));
        });
    }
    group.finish();
}

/// Benchmark merging two configurations with overlapping keys
fn benchmark_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    for size in [8, 64, 512] {
        let base = Configuration::new(raw_table(size));
        let over = Configuration::new(raw_table(size / 2));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(base, over),
            |b, (base, over)| {
                b.iter(|| black_box(base.merge(over)));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, benchmark_normalize, benchmark_merge);
criterion_main!(benches);
