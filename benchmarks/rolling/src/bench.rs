//! Array-performance benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Rolling sums: copy-per-window vs aliased views vs running totals
//! - Strided summation over a large buffer (stride 1 to 63)
//! - Memory access order (random vs forward vs reverse)
//! - Allocation cost across sizes
//! - Flat sums and row-major vs column-major matrix reductions
//!
//! To benchmark a single reducer, use `ROLLING_METHOD=strided cargo bench`.
//! To shrink the large inputs, use `ROLLING_BENCH_SCALE=10 cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rolling::prelude::*;
use rolling_benchmarks::{
    column_sums, generate_large_doubles, generate_random_walk, generate_uniform, iota, row_sums,
    scaled, selected_methods, shuffled_indices,
};
use std::hint::black_box;

// ============================================================================
// Rolling Sums
// ============================================================================

fn bench_rolling_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("rolling_scalability");
    group.sample_size(30);

    for size in [1_000, 10_000, 100_000] {
        let x = generate_uniform(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        for method in selected_methods() {
            let model = Rolling::new()
                .window_size(20)
                .method(method)
                .build()
                .unwrap();

            group.bench_with_input(BenchmarkId::new(method.name(), size), &size, |b, _| {
                b.iter(|| model.sum(black_box(&x)).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_rolling_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("rolling_window");
    group.sample_size(30);

    let x = generate_random_walk(10_000, 42);

    for window in [2, 20, 200, 2_000] {
        for method in selected_methods() {
            let model = Rolling::new()
                .window_size(window)
                .method(method)
                .build()
                .unwrap();

            group.bench_with_input(BenchmarkId::new(method.name(), window), &window, |b, _| {
                b.iter(|| model.sum(black_box(&x)).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_rolling_strided_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("rolling_strided_input");
    group.sample_size(30);

    let x = generate_uniform(80_000, 42);

    for stride in [1, 2, 4, 8] {
        let model = Rolling::new()
            .window_size(20)
            .stride(stride)
            .build()
            .unwrap();

        group.bench_with_input(BenchmarkId::new("strided", stride), &stride, |b, _| {
            b.iter(|| model.sum(black_box(&x)).unwrap())
        });
    }
    group.finish();
}

// ============================================================================
// Strided Summation
// ============================================================================

fn bench_strided_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("strided_sum");
    group.sample_size(10);

    let arr = generate_large_doubles(scaled(10_000_000), 42);

    for stride in 1..64 {
        group.bench_with_input(BenchmarkId::new("sum", stride), &stride, |b, &stride| {
            b.iter(|| strided_sum(black_box(&arr), stride).unwrap())
        });
    }
    group.finish();
}

// ============================================================================
// Memory Access Order
// ============================================================================

fn bench_memory_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory_order");
    group.sample_size(20);

    let size = scaled(1_000_000);
    let values = iota(size);

    let random = shuffled_indices(size, 42);
    let forward: Vec<usize> = (0..size).collect();
    let reverse: Vec<usize> = (0..size).rev().collect();

    for (name, indices) in [
        ("random_access", &random),
        ("forward_linear_access", &forward),
        ("reverse_linear_access", &reverse),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                for &ix in indices.iter() {
                    black_box(values[ix]);
                }
            })
        });
    }
    group.finish();
}

// ============================================================================
// Allocation
// ============================================================================

fn bench_allocation(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocation");

    for size in [64, 512, 4096, 8096] {
        group.bench_with_input(BenchmarkId::new("alloc_free", size), &size, |b, &size| {
            b.iter(|| black_box(Vec::<u8>::with_capacity(size)))
        });
    }
    group.finish();
}

// ============================================================================
// Array Sums
// ============================================================================

fn bench_array_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_sum");
    group.sample_size(20);

    let flat = iota(10_000);
    group.bench_function("flat_sum", |b| {
        b.iter(|| black_box(&flat).iter().sum::<i64>())
    });

    let side = scaled(2_000);
    let matrix = iota(side * side);
    group.throughput(Throughput::Elements((side * side) as u64));

    group.bench_function(BenchmarkId::new("row_sums", side), |b| {
        b.iter(|| row_sums(black_box(&matrix), side, side))
    });
    group.bench_function(BenchmarkId::new("column_sums", side), |b| {
        b.iter(|| column_sums(black_box(&matrix), side, side))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_rolling_scalability,
    bench_rolling_window,
    bench_rolling_strided_input,
    bench_strided_sum,
    bench_memory_order,
    bench_allocation,
    bench_array_sum,
);

criterion_main!(benches);
