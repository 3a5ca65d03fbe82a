//! This file defines the command-line interface (CLI) for the bucketgate driver.
//! License: MIT OR Apache-2.0

use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "bucketgate",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Replay a paced request loop against a token-bucket limiter",
    long_about = "bucketgate builds a token-bucket limiter, then issues a fixed number of requests against it with a constant delay between them, printing whether each one was admitted or rejected due to rate limiting.",
)]
pub struct Cli {
    /// Path to a limiter configuration file (YAML). Explicit flags override its values.
    #[arg(long = "config", value_name = "FILE", env = "BUCKETGATE_CONFIG", help = "Path to a limiter configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Maximum number of tokens the bucket holds.
    #[arg(long, short = 'c', value_name = "N", help = "Bucket capacity (burst size). Defaults to 10.")]
    pub capacity: Option<u32>,

    /// Tokens regained per second.
    #[arg(long = "refill-rate", short = 'r', value_name = "RATE", help = "Tokens added per second. Defaults to 1.0.")]
    pub refill_rate: Option<f64>,

    /// Keep sub-token remainders between refills instead of dropping them.
    #[arg(long = "carry-fraction", help = "Carry fractional refills over to the next call.")]
    pub carry_fraction: bool,

    /// Number of requests to issue.
    #[arg(long, short = 'n', value_name = "N", default_value_t = 15, help = "Number of requests to issue.")]
    pub requests: u32,

    /// Tokens requested per call.
    #[arg(long, short = 't', value_name = "K", default_value_t = 1, help = "Tokens requested by each call.")]
    pub tokens: u32,

    /// Pause between calls, in milliseconds.
    #[arg(long = "delay-ms", value_name = "MS", default_value_t = 500, help = "Delay between calls in milliseconds.")]
    pub delay_ms: u64,

    /// Suppress the summary table.
    #[arg(long = "no-summary", help = "Suppress the summary table.")]
    pub no_summary: bool,

    /// Disable log output. Verdicts and the summary are still printed.
    #[arg(long, short = 'q', help = "Suppress all log messages (use --no-summary to hide the table).")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,
}
