//! Reducer timing and statistics persistence.

use log::{debug, info};
use rand::prelude::*;
use rolling::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::hint::black_box;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;

// ============================================================================
// Configuration
// ============================================================================

/// Parameters of a profiling run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileConfig {
    /// Number of elements in the generated sequence.
    pub size: usize,
    /// Window length.
    pub window: usize,
    /// Reduction method under test.
    pub method: Method,
    /// Number of timed calls.
    pub repeat: usize,
    /// Seed for the sequence generator.
    pub seed: u64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            size: 10_000,
            window: 20,
            method: Method::Strided,
            repeat: 100,
            seed: 0,
        }
    }
}

// ============================================================================
// Statistics
// ============================================================================

/// Raw timing statistics of a profiling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub method: Method,
    pub size: usize,
    pub window: usize,
    pub repeat: usize,
    pub seed: u64,
    /// Number of windows produced per call.
    pub windows: usize,
    /// Wall-clock duration of each call, in nanoseconds.
    pub samples_ns: Vec<u64>,
    pub total_ns: u64,
    pub min_ns: u64,
    pub mean_ns: f64,
    pub max_ns: u64,
    /// Sum of the last call's window sums.
    pub checksum: f64,
}

/// Uniform pseudo-random values in `[0, 1)`.
pub fn random_sequence(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random::<f64>()).collect()
}

/// Run the reducer `config.repeat` times and collect per-call timings.
pub fn profile(config: &ProfileConfig) -> Result<ProfileStats, RollingError> {
    let data = random_sequence(config.size, config.seed);
    let model = Rolling::new()
        .window_size(config.window)
        .method(config.method)
        .build()?;

    info!(
        "profiling {} rolling sum: size={} window={} repeat={}",
        config.method, config.size, config.window, config.repeat
    );

    let mut samples_ns = Vec::with_capacity(config.repeat);
    let mut last = model.sum(&data)?;
    for i in 0..config.repeat {
        let start = Instant::now();
        last = model.sum(black_box(&data))?;
        let elapsed = start.elapsed().as_nanos() as u64;
        debug!("call {i}: {elapsed} ns");
        samples_ns.push(elapsed);
    }

    let total_ns: u64 = samples_ns.iter().sum();
    let min_ns = samples_ns.iter().copied().min().unwrap_or(0);
    let max_ns = samples_ns.iter().copied().max().unwrap_or(0);
    let mean_ns = if samples_ns.is_empty() {
        0.0
    } else {
        total_ns as f64 / samples_ns.len() as f64
    };

    Ok(ProfileStats {
        method: config.method,
        size: config.size,
        window: config.window,
        repeat: config.repeat,
        seed: config.seed,
        windows: last.len(),
        samples_ns,
        total_ns,
        min_ns,
        mean_ns,
        max_ns,
        checksum: last.iter().sum(),
    })
}

/// Persist statistics as pretty-printed JSON.
pub fn dump_stats(stats: &ProfileStats, path: &Path) -> Result<(), Box<dyn Error>> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, stats)?;
    info!("wrote profile statistics to {}", path.display());
    Ok(())
}
