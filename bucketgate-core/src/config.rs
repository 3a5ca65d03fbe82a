//! Configuration management for `bucketgate-core`.
//!
//! A [`LimiterConfig`] describes one bucket. It can be written by hand, loaded from a
//! YAML file, validated, and turned into a [`TokenBucketLimiter`].
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::Deserialize;
use std::path::Path;

use crate::clock::{Clock, MonotonicClock};
use crate::errors::LimiterError;
use crate::limiter::{validate_parameters, RefillPolicy, TokenBucketLimiter};

/// Burst size used when none is configured.
pub const DEFAULT_CAPACITY: u32 = 10;
/// Refill rate (tokens per second) used when none is configured.
pub const DEFAULT_REFILL_RATE: f64 = 1.0;

/// Settings for a single token bucket.
///
/// ```yaml
/// capacity: 20
/// refill_rate_per_second: 2.5
/// refill_policy: carry_fraction
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LimiterConfig {
    /// Maximum tokens the bucket holds, which bounds the burst size.
    pub capacity: u32,
    /// Tokens regained per second of elapsed time.
    pub refill_rate_per_second: f64,
    /// Whether sub-token remainders are dropped or carried between refills.
    pub refill_policy: RefillPolicy,
}

impl Default for LimiterConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            refill_rate_per_second: DEFAULT_REFILL_RATE,
            refill_policy: RefillPolicy::default(),
        }
    }
}

impl LimiterConfig {
    /// Loads and validates a limiter configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading limiter configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: LimiterConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid limiter configuration in {}", path.display()))?;
        debug!("Loaded limiter configuration: {:?}", config);

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LimiterError> {
        validate_parameters(self.capacity, self.refill_rate_per_second)
    }

    /// Builds a limiter backed by the monotonic system clock.
    pub fn build(&self) -> Result<TokenBucketLimiter<MonotonicClock>, LimiterError> {
        self.build_with_clock(MonotonicClock)
    }

    pub fn build_with_clock<C: Clock>(&self, clock: C) -> Result<TokenBucketLimiter<C>, LimiterError> {
        TokenBucketLimiter::with_clock(
            self.capacity,
            self.refill_rate_per_second,
            self.refill_policy,
            clock,
        )
    }
}
