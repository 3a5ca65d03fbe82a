//! bucketgate entry point.
//!
//! Resolves the limiter settings, replays the request loop and prints a summary.

use anyhow::{Context, Result};
use bucketgate::cli::Cli;
use bucketgate::commands::simulate::{resolve_config, run_simulation, SimulationOptions};
use bucketgate::logger;
use bucketgate::ui::summary;
use clap::Parser;
use is_terminal::IsTerminal;
use std::io;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    let config = resolve_config(&args)?;
    let limiter = config.build().context("Failed to build limiter")?;
    let options = SimulationOptions::from(&args);

    let mut stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let report = run_simulation(&limiter, &options, &mut stdout, supports_color).await?;

    if !args.no_summary {
        summary::print_summary(&limiter, &report, &mut io::stderr())?;
    }

    Ok(())
}
