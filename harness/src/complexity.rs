//! Write reference complexity curves as CSV for plotting.

use clap::Parser;
use log::info;
use rolling_harness::curves::{complexity_rows, write_csv};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "complexity_curves")]
#[command(about = "Generate O(n), O(ln(n)) and O(n^2) reference curves")]
struct Cli {
    /// Largest n to sample
    #[arg(long, default_value_t = 1000)]
    max_n: u32,

    /// CSV output file
    #[arg(long, default_value = "complexity.csv")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let rows = complexity_rows(cli.max_n);
    write_csv(&rows, BufWriter::new(File::create(&cli.output)?))?;

    info!("wrote {} rows to {}", rows.len(), cli.output.display());
    Ok(())
}
