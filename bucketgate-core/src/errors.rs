//! errors.rs - Custom error types for the bucketgate-core library.
//!
//! Rate-limit rejection is not represented here: a rejected request is a normal
//! `false` from `try_consume`. These variants only cover misuse of the
//! construction contract.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All possible error types in the `bucketgate-core` library.
///
/// `#[non_exhaustive]` lets new variants land without breaking downstream matches.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum LimiterError {
    #[error("Bucket capacity must be a positive integer, got 0")]
    InvalidCapacity,

    #[error("Refill rate must be a finite, positive number of tokens per second, got {0}")]
    InvalidRefillRate(f64),
}
