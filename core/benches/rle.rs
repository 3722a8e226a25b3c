use criterion::{criterion_group, criterion_main, Criterion};
use cgol_core::prelude::*;


use patterns::Pattern;

criterion_group!(rle, from_rle_benchmark, to_rle_benchmark);
criterion_main!(rle);

fn from_rle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_RLE");
    for pattern in &[patterns::GGG, patterns::GOTTS_DOTS, patterns::ACORN] {
        bench_from_rle(&mut group, pattern);
    }
    group.finish();
}

fn to_rle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_RLE");
    for pattern in &[patterns::GGG, patterns::GOTTS_DOTS, patterns::ACORN] {
        bench_to_rle(&mut group, pattern);
    }
    group.finish();
}

fn bench_from_rle<M: criterion::measurement::Measurement>(
    group: &mut criterion::BenchmarkGroup<'_, M>,
    pattern: &Pattern,
) {
    group.bench_function(pattern.name, |b| {
        b.iter(|| Rle::from_string_to_grid(pattern.rle).unwrap())
    });
}

fn bench_to_rle<M: criterion::measurement::Measurement>(
    group: &mut criterion::BenchmarkGroup<'_, M>,
    pattern: &Pattern,
) {
    let grid = Rle::from_string_to_grid(pattern.rle).unwrap();
    group.bench_function(pattern.name, |b| b.iter(|| Rle::from_grid_to_string(&grid)));
}
