//! Benchmark command implementation.

use clap::Parser;

use super::NormalizerArgs;

/// Benchmark command arguments.
#[derive(Parser)]
pub struct BenchmarkCommand {
    /// Path to input text file for benchmarking
    #[arg(short, long)]
    pub input: String,

    /// Number of iterations to run
    #[arg(short = 'n', long, default_value_t = 100)]
    pub iterations: usize,

    #[command(flatten)]
    pub normalizer: NormalizerArgs,
}

use akshar_normalizer::Normalize;
use anyhow::{ensure, Context, Result as AnyhowResult};
use std::fs;
use std::time::Instant;

pub fn run(cmd: BenchmarkCommand) -> AnyhowResult<()> {
    ensure!(cmd.iterations > 0, "iterations must be positive");
    let normalizer = cmd.normalizer.build()?;

    // Read input text
    let text = fs::read_to_string(&cmd.input)
        .with_context(|| format!("failed to read {}", cmd.input))?;
    let lines: Vec<String> = text.lines().map(str::to_string).collect();

    println!("Benchmarking normalization...");
    println!("  Script: {}", normalizer.config().script);
    println!("  Text length: {} bytes, {} lines", text.len(), lines.len());
    println!("  Iterations: {}", cmd.iterations);
    println!();

    // Warmup
    let _ = normalizer.normalize(&text);

    let start = Instant::now();
    for _ in 0..cmd.iterations {
        let _ = normalizer.normalize(&text);
    }
    let sequential = start.elapsed();

    let start = Instant::now();
    for _ in 0..cmd.iterations {
        let _ = normalizer.normalize_batch(&lines);
    }
    let batched = start.elapsed();

    let mb = text.len() as f64 * cmd.iterations as f64 / (1024.0 * 1024.0);
    let avg_time_ms = sequential.as_secs_f64() * 1000.0 / cmd.iterations as f64;

    println!("Results:");
    println!("  Average time: {:.3}ms", avg_time_ms);
    println!(
        "  Sequential: {:.2}s, {:.1} MB/s",
        sequential.as_secs_f64(),
        mb / sequential.as_secs_f64()
    );
    println!(
        "  Batched by line: {:.2}s, {:.1} MB/s",
        batched.as_secs_f64(),
        mb / batched.as_secs_f64()
    );

    Ok(())
}
