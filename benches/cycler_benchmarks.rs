use cim_cycler::{cycler, Cycler};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn leaf(name: &str, len: usize) -> Cycler<u32> {
    cycler(name, 0..len as u32)
}

fn benchmark_product_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("product_iteration");
    for size in [8usize, 32, 128] {
        let grid = (&leaf("color", size) * &leaf("linestyle", size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| black_box(grid.iter().count()))
        });
    }
    group.finish();
}

fn benchmark_pairwise_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairwise_iteration");
    for size in [64usize, 1024, 16384] {
        let zipped = (&leaf("color", size) + &leaf("linestyle", size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &zipped, |b, zipped| {
            b.iter(|| black_box(zipped.iter().count()))
        });
    }
    group.finish();
}

fn benchmark_by_key(c: &mut Criterion) {
    let grid = (&leaf("color", 64) * &leaf("linestyle", 64)).unwrap();
    c.bench_function("by_key_64x64", |b| b.iter(|| black_box(grid.by_key())));
    c.bench_function("repeat_64x64_times_4", |b| b.iter(|| black_box(grid.repeat(4))));
}

criterion_group!(
    benches,
    benchmark_product_iteration,
    benchmark_pairwise_iteration,
    benchmark_by_key
);
criterion_main!(benches);
