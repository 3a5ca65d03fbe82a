// bucketgate-core/src/lib.rs
//! # bucketgate Core Library
//!
//! `bucketgate-core` provides a single-process admission-control primitive: a token
//! bucket that bounds how often callers may perform an operation. Callers ask
//! [`TokenBucketLimiter::try_consume`] before doing rate-limited work and treat `false`
//! as "try later". The limiter never blocks, sleeps or queues.
//!
//! ## Modules
//!
//! * `limiter`: The [`TokenBucketLimiter`], its [`RefillPolicy`] and [`LimiterStats`].
//! * `clock`: The [`Clock`] trait with [`MonotonicClock`] and the test-friendly [`ManualClock`].
//! * `config`: [`LimiterConfig`], loadable from YAML.
//! * `errors`: [`LimiterError`] for construction misuse.
//!
//! ## Usage Example
//!
//! ```rust
//! use bucketgate_core::TokenBucketLimiter;
//!
//! fn main() -> Result<(), bucketgate_core::LimiterError> {
//!     // 10 tokens of burst, one token regained per second.
//!     let limiter = TokenBucketLimiter::new(10, 1.0)?;
//!
//!     for i in 1..=11 {
//!         if limiter.try_consume(1) {
//!             println!("Request {} admitted", i);
//!         } else {
//!             println!("Request {} rejected", i);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency
//!
//! Refill, comparison and debit run under one lock, so a limiter wrapped in an
//! `Arc` ([`SharedLimiter`]) can be hit from any number of threads without
//! over-admitting.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod clock;
pub mod config;
pub mod errors;
pub mod limiter;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::{LimiterConfig, DEFAULT_CAPACITY, DEFAULT_REFILL_RATE};
pub use errors::LimiterError;
pub use limiter::{LimiterStats, RefillPolicy, SharedLimiter, TokenBucketLimiter};
