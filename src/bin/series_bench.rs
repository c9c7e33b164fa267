//! Sorting benchmark comparing series representations.
//!
//! Usage:
//!     series_bench [--count N] [--length N] [--iterations N] [--seed S] [--only REPR] [--pretty]
//!
//! Progress goes to stderr through `tracing` (filter with `RUST_LOG`); a JSON
//! array of sort reports goes to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ds_harness::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about = "Time sorting series collections by amplitude")]
struct Args {
    /// Number of series in the collection (defaults to $SERIES_BENCH_COUNT or 100000)
    #[arg(long)]
    count: Option<usize>,
    /// Values per series (defaults to $SERIES_BENCH_LENGTH or 100)
    #[arg(long)]
    length: Option<usize>,
    /// Timed sorts per representation
    #[arg(long, default_value_t = ds_harness::config::DEFAULT_ITERATIONS)]
    iterations: usize,
    /// Seed for reproducible input
    #[arg(long)]
    seed: Option<u64>,
    /// Measure only these representations (repeatable): value, swap, transfer, nullable
    #[arg(long)]
    only: Vec<Representation>,
    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl Args {
    fn config(&self) -> Result<HarnessConfig> {
        let from_env = HarnessConfig::default()
            .with_overrides(|var| std::env::var(var).ok())
            .context("reading environment overrides")?;
        self.apply(from_env)
    }

    // Flags win over the environment; validation sees the final values only.
    fn apply(&self, mut config: HarnessConfig) -> Result<HarnessConfig> {
        if let Some(count) = self.count {
            config.count = count;
        }
        if let Some(length) = self.length {
            config.length = length;
        }
        config.iterations = self.iterations;
        config.seed = self.seed;
        config.validate().context("invalid benchmark configuration")?;
        Ok(config)
    }

    fn representations(&self) -> Vec<Representation> {
        if self.only.is_empty() {
            Representation::ALL.to_vec()
        } else {
            self.only.clone()
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = args.config()?;
    info!(
        count = config.count,
        length = config.length,
        iterations = config.iterations,
        "starting"
    );

    let mut reports = Vec::new();
    for repr in args.representations() {
        let report = run(repr, &config).with_context(|| format!("benchmarking {repr}"))?;
        reports.push(report);
    }

    if let Some(baseline) = reports.iter().find(|r| r.label == Representation::Value.name()) {
        for report in reports.iter().filter(|r| r.label != baseline.label) {
            info!(
                label = %report.label,
                avg_ms = report.avg_time_ms,
                change_pct = report.relative_to(baseline) * 100.0,
                "relative to value"
            );
        }
    }

    println!("{}", reports_to_json(&reports, args.pretty)?);
    Ok(())
}
