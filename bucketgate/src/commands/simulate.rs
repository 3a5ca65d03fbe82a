//! The request loop: issue N calls against a limiter with a fixed pause between them.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::time::Duration;

use bucketgate_core::{Clock, LimiterConfig, RefillPolicy, TokenBucketLimiter};

use crate::cli::Cli;
use crate::ui::output_format;

/// How the loop calls the limiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationOptions {
    pub requests: u32,
    pub tokens: u32,
    pub delay: Duration,
}

impl From<&Cli> for SimulationOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            requests: cli.requests,
            tokens: cli.tokens,
            delay: Duration::from_millis(cli.delay_ms),
        }
    }
}

/// Decision for every request, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationReport {
    pub outcomes: Vec<bool>,
}

impl SimulationReport {
    pub fn admitted(&self) -> usize {
        self.outcomes.iter().filter(|&&ok| ok).count()
    }

    pub fn rejected(&self) -> usize {
        self.outcomes.len() - self.admitted()
    }
}

/// Merges the optional config file with explicit flags. Flags win.
pub fn resolve_config(cli: &Cli) -> Result<LimiterConfig> {
    let mut config = match &cli.config {
        Some(path) => LimiterConfig::load_from_file(path)?,
        None => LimiterConfig::default(),
    };

    if let Some(capacity) = cli.capacity {
        config.capacity = capacity;
    }
    if let Some(rate) = cli.refill_rate {
        config.refill_rate_per_second = rate;
    }
    if cli.carry_fraction {
        config.refill_policy = RefillPolicy::CarryFraction;
    }

    config.validate().context("Invalid limiter settings")?;
    debug!("Resolved limiter configuration: {:?}", config);
    Ok(config)
}

/// Runs the loop, writing one verdict line per request to `writer`.
pub async fn run_simulation<C: Clock, W: Write>(
    limiter: &TokenBucketLimiter<C>,
    options: &SimulationOptions,
    writer: &mut W,
    supports_color: bool,
) -> Result<SimulationReport> {
    info!(
        "Issuing {} request(s) of {} token(s), {}ms apart.",
        options.requests,
        options.tokens,
        options.delay.as_millis()
    );

    let mut report = SimulationReport {
        outcomes: Vec::with_capacity(options.requests as usize),
    };

    for index in 1..=options.requests {
        let admitted = limiter.try_consume(options.tokens);
        output_format::print_verdict(writer, index, admitted, supports_color)
            .context("Failed to write request verdict")?;
        report.outcomes.push(admitted);

        if index < options.requests && !options.delay.is_zero() {
            tokio::time::sleep(options.delay).await;
        }
    }

    info!(
        "Run finished: {} admitted, {} rejected.",
        report.admitted(),
        report.rejected()
    );
    Ok(report)
}
