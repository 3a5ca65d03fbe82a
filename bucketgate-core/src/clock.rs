//! Time sources for the limiter.
//!
//! The limiter never reads the system time directly; it asks a [`Clock`]. Production
//! code uses [`MonotonicClock`], tests drive a [`ManualClock`] by hand.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Abstracts "what time is it" so refill math can be tested deterministically.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// Standard monotonic clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// A clock that only moves when told to.
///
/// Unlike a real monotonic source it can also be moved backwards, which lets tests
/// reproduce wall-clock adjustments.
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<Instant>,
}

impl ManualClock {
    /// Creates a clock frozen at the moment of construction.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(next) = current.checked_add(by) {
            *current = next;
        }
    }

    /// Moves the clock backward by `by`. Saturates silently if the platform cannot
    /// represent the earlier instant.
    pub fn rewind(&self, by: Duration) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(prev) = current.checked_sub(by) {
            *current = prev;
        }
    }

    /// Jumps to an arbitrary instant, earlier or later.
    pub fn set(&self, to: Instant) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = to;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
