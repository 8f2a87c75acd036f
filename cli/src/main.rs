//! Akshar CLI - Command-line interface for the Indic text normalizer.
//!
//! This is the main entry point for the `akshar` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{BenchmarkCommand, NormalizeCommand, StatsCommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "akshar")]
#[command(about = "Script-aware normalization for Indic text", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize text
    Normalize(NormalizeCommand),
    /// Count invisible/format characters
    Stats(StatsCommand),
    /// Benchmark normalization throughput
    Benchmark(BenchmarkCommand),
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize(cmd) => commands::normalize::run(cmd)?,
        Commands::Stats(cmd) => commands::stats::run(cmd)?,
        Commands::Benchmark(cmd) => commands::benchmark::run(cmd)?,
    }

    Ok(())
}
