//! Data generation and environment configuration for the rolling benchmarks.
//!
//! All generators take an explicit seed so that every benchmark run sees the
//! same data.
//!
//! Environment variables:
//! - `ROLLING_METHOD=naive|strided|running` restricts the rolling-sum groups to one method.
//! - `ROLLING_BENCH_SCALE=<divisor>` shrinks the large fixed-size inputs (default 1).

use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use rolling::prelude::Method;
use std::env;

// ============================================================================
// Environment Configuration
// ============================================================================

/// Methods selected by `ROLLING_METHOD`, or all of them.
pub fn selected_methods() -> Vec<Method> {
    match env::var("ROLLING_METHOD").ok() {
        Some(name) => match name.parse::<Method>() {
            Ok(method) => vec![method],
            Err(_) => Method::ALL.to_vec(),
        },
        None => Method::ALL.to_vec(),
    }
}

/// Divide `len` by `ROLLING_BENCH_SCALE`, keeping at least one element.
pub fn scaled(len: usize) -> usize {
    let divisor = env::var("ROLLING_BENCH_SCALE")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|&d| d > 0)
        .unwrap_or(1);
    (len / divisor).max(1)
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Uniform samples in `[0, 1)`.
pub fn generate_uniform(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new(0.0, 1.0).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

/// Gaussian random walk, a typical rolling-window input.
pub fn generate_random_walk(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let steps = Normal::new(0.0, 1.0).unwrap();

    let mut level = 0.0;
    (0..size)
        .map(|_| {
            level += steps.sample(&mut rng);
            level
        })
        .collect()
}

/// Pseudo-random doubles in `[0, i32::MAX)`, standing in for `std::rand()` fills.
pub fn generate_large_doubles(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|_| rng.random_range(0..i32::MAX) as f64)
        .collect()
}

/// `0, 1, ..., size - 1`.
pub fn iota(size: usize) -> Vec<i64> {
    (0..size as i64).collect()
}

/// A random permutation of `0..size`.
pub fn shuffled_indices(size: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut indices: Vec<usize> = (0..size).collect();
    indices.shuffle(&mut rng);
    indices
}

// ============================================================================
// Matrix Reductions
// ============================================================================

/// Sum each row of a row-major `rows x cols` matrix (contiguous reads).
pub fn row_sums(data: &[i64], rows: usize, cols: usize) -> Vec<i64> {
    debug_assert_eq!(data.len(), rows * cols);
    data.chunks_exact(cols).map(|row| row.iter().sum()).collect()
}

/// Sum each column of a row-major `rows x cols` matrix (reads strided by `cols`).
pub fn column_sums(data: &[i64], rows: usize, cols: usize) -> Vec<i64> {
    debug_assert_eq!(data.len(), rows * cols);
    (0..cols)
        .map(|c| data[c..].iter().step_by(cols).sum())
        .collect()
}
