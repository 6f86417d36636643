//! Profile the rolling reducer over a pseudo-random sequence.
//!
//! ```text
//! RUST_LOG=info profile_rolling --method naive --output rolling_sum.stats
//! ```

use clap::Parser;
use log::info;
use rolling::prelude::Method;
use rolling_harness::stats::{ProfileConfig, dump_stats, profile};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "profile_rolling")]
#[command(about = "Time the rolling-sum reducer and persist raw statistics")]
struct Cli {
    /// Number of elements in the generated sequence
    #[arg(long, default_value_t = 10_000)]
    size: usize,

    /// Window length
    #[arg(long, default_value_t = 20)]
    window: usize,

    /// Reduction method (naive, strided, running)
    #[arg(long, default_value = "strided")]
    method: Method,

    /// Number of timed calls
    #[arg(long, default_value_t = 100)]
    repeat: usize,

    /// Seed for the sequence generator
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Statistics output file
    #[arg(long, default_value = "rolling_sum.stats")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = ProfileConfig {
        size: cli.size,
        window: cli.window,
        method: cli.method,
        repeat: cli.repeat,
        seed: cli.seed,
    };

    let stats = profile(&config)?;
    info!(
        "{}: min {} ns, mean {:.0} ns, max {} ns over {} calls",
        stats.method, stats.min_ns, stats.mean_ns, stats.max_ns, stats.repeat
    );

    dump_stats(&stats, &cli.output)?;
    Ok(())
}
