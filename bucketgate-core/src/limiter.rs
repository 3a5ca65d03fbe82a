// bucketgate-core/src/limiter.rs
//! A thread-safe token bucket.
//!
//! The bucket holds up to `capacity` whole tokens and regains `refill_rate` tokens per
//! second of elapsed time. Every call to [`TokenBucketLimiter::try_consume`] refills,
//! compares and debits under a single lock, so concurrent callers never debit against
//! a stale count.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use log::{debug, trace};
use serde::Deserialize;

use crate::clock::{Clock, MonotonicClock};
use crate::errors::LimiterError;

/// How the sub-token remainder of a refill is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefillPolicy {
    /// Add `floor(elapsed * rate)` tokens and drop the remainder. Frequent callers at a
    /// low rate can starve the bucket (1.5 tokens/s polled every 400ms never refills).
    #[default]
    Truncate,
    /// Keep the remainder for the next refill. The carry is cleared whenever the bucket
    /// is full.
    CarryFraction,
}

/// Counters describing what the limiter has decided so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LimiterStats {
    pub admitted_calls: u64,
    pub rejected_calls: u64,
    pub admitted_tokens: u64,
}

#[derive(Debug)]
struct BucketState {
    available: u32,
    last_refill: Instant,
    // CarryFraction only: time accrued since the bucket was last full, and how many
    // whole tokens that span has already been credited.
    pending: Duration,
    credited: u64,
    stats: LimiterStats,
}

impl BucketState {
    fn refill(&mut self, now: Instant, capacity: u32, rate: f64, policy: RefillPolicy) {
        // A clock that stepped backwards counts as no time passed.
        let elapsed = now.saturating_duration_since(self.last_refill);
        let to_add = match policy {
            RefillPolicy::Truncate => whole_tokens(elapsed, rate).min(u64::from(capacity)),
            RefillPolicy::CarryFraction => {
                // Recomputed over the whole exact span, so rounding never compounds.
                self.pending = self.pending.saturating_add(elapsed);
                let earned = whole_tokens(self.pending, rate);
                let fresh = earned.saturating_sub(self.credited);
                self.credited = earned;
                fresh.min(u64::from(capacity))
            }
        } as u32;

        self.available = self.available.saturating_add(to_add).min(capacity);
        if self.available == capacity {
            self.pending = Duration::ZERO;
            self.credited = 0;
        }
        if now > self.last_refill {
            self.last_refill = now;
        }

        trace!(
            "Refill: elapsed={:.3}s added={} available={}/{}",
            elapsed.as_secs_f64(), to_add, self.available, capacity
        );
    }
}

fn whole_tokens(span: Duration, rate: f64) -> u64 {
    // Saturating float-to-int cast.
    (span.as_secs_f64() * rate).floor() as u64
}

/// Token-bucket admission limiter. One instance guards one resource.
#[derive(Debug)]
pub struct TokenBucketLimiter<C: Clock = MonotonicClock> {
    capacity: u32,
    refill_rate: f64,
    policy: RefillPolicy,
    clock: C,
    state: Mutex<BucketState>,
}

/// A limiter shared between threads or tasks.
pub type SharedLimiter<C = MonotonicClock> = Arc<TokenBucketLimiter<C>>;

/// Checks the construction contract shared by the limiter and its config.
pub(crate) fn validate_parameters(capacity: u32, refill_rate: f64) -> Result<(), LimiterError> {
    if capacity == 0 {
        return Err(LimiterError::InvalidCapacity);
    }
    if !refill_rate.is_finite() || refill_rate <= 0.0 {
        return Err(LimiterError::InvalidRefillRate(refill_rate));
    }
    Ok(())
}

impl TokenBucketLimiter<MonotonicClock> {
    /// Creates a full bucket that drops fractional refills.
    ///
    /// e.g., `capacity: 10, refill_rate: 1.0` allows a burst of 10 and then one call
    /// per second.
    pub fn new(capacity: u32, refill_rate: f64) -> Result<Self, LimiterError> {
        Self::with_policy(capacity, refill_rate, RefillPolicy::default())
    }

    pub fn with_policy(
        capacity: u32,
        refill_rate: f64,
        policy: RefillPolicy,
    ) -> Result<Self, LimiterError> {
        Self::with_clock(capacity, refill_rate, policy, MonotonicClock)
    }
}

impl<C: Clock> TokenBucketLimiter<C> {
    /// Creates a full bucket reading time from `clock`.
    pub fn with_clock(
        capacity: u32,
        refill_rate: f64,
        policy: RefillPolicy,
        clock: C,
    ) -> Result<Self, LimiterError> {
        validate_parameters(capacity, refill_rate)?;

        let last_refill = clock.now();
        debug!(
            "Token bucket created: capacity={} refill_rate={}/s policy={:?}",
            capacity, refill_rate, policy
        );

        Ok(Self {
            capacity,
            refill_rate,
            policy,
            clock,
            state: Mutex::new(BucketState {
                available: capacity,
                last_refill,
                pending: Duration::ZERO,
                credited: 0,
                stats: LimiterStats::default(),
            }),
        })
    }

    /// Refills, then takes `requested` tokens if they are all available.
    ///
    /// Returns `true` when the call is admitted. A rejected call leaves the token count
    /// untouched and should be treated as "try later". Requesting zero tokens is always
    /// admitted and debits nothing; requesting more than `capacity` is never admitted.
    pub fn try_consume(&self, requested: u32) -> bool {
        let mut state = self.lock_state();
        let now = self.clock.now();
        state.refill(now, self.capacity, self.refill_rate, self.policy);

        if state.available >= requested {
            state.available -= requested;
            state.stats.admitted_calls += 1;
            state.stats.admitted_tokens += u64::from(requested);
            true
        } else {
            state.stats.rejected_calls += 1;
            debug!(
                "Rejected request for {} token(s): {} of {} available",
                requested, state.available, self.capacity
            );
            false
        }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn refill_rate(&self) -> f64 {
        self.refill_rate
    }

    pub fn refill_policy(&self) -> RefillPolicy {
        self.policy
    }

    /// Tokens left as of the last call. Does not refill.
    pub fn available_tokens(&self) -> u32 {
        self.lock_state().available
    }

    /// The instant the bucket was last refilled.
    pub fn last_refill(&self) -> Instant {
        self.lock_state().last_refill
    }

    pub fn stats(&self) -> LimiterStats {
        self.lock_state().stats
    }

    // Poisoning can only follow a panic outside the critical section's arithmetic,
    // which never leaves the state half-written.
    fn lock_state(&self) -> MutexGuard<'_, BucketState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
