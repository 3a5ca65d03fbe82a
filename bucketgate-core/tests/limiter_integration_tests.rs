// bucketgate-core/tests/limiter_integration_tests.rs
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use test_log::test; // For integrating with `env_logger` in tests

use bucketgate_core::{ManualClock, RefillPolicy, SharedLimiter, TokenBucketLimiter};

#[test]
fn test_burst_then_steady_rate_with_system_clock() {
    // High rate so the test does not need to sleep long.
    let limiter = TokenBucketLimiter::new(5, 50.0).unwrap();
    let burst = (0..5).filter(|_| limiter.try_consume(1)).count();
    assert_eq!(burst, 5);

    thread::sleep(Duration::from_millis(100));
    assert!(limiter.try_consume(1));
    assert!(limiter.available_tokens() <= limiter.capacity());
}

#[test]
fn test_no_sequence_admits_more_than_capacity_without_refill() {
    let clock = Arc::new(ManualClock::new());
    let limiter =
        TokenBucketLimiter::with_clock(12, 3.0, RefillPolicy::Truncate, Arc::clone(&clock)).unwrap();

    let mut admitted_tokens = 0u32;
    for requested in [5, 0, 4, 7, 2, 1, 3, 1, 1] {
        if limiter.try_consume(requested) {
            admitted_tokens += requested;
        }
        assert!(limiter.available_tokens() <= limiter.capacity());
    }
    assert!(admitted_tokens <= 12);
    assert_eq!(admitted_tokens + limiter.available_tokens(), 12);
}

#[test]
fn test_reference_loop_admits_ten_then_paces() {
    // Mirrors the classic driver: 15 single-token calls, 500ms apart, at 1 token/s.
    let clock = Arc::new(ManualClock::new());
    let limiter =
        TokenBucketLimiter::with_clock(10, 1.0, RefillPolicy::Truncate, Arc::clone(&clock)).unwrap();

    let outcomes: Vec<bool> = (0..15)
        .map(|_| {
            let ok = limiter.try_consume(1);
            clock.advance(Duration::from_millis(500));
            ok
        })
        .collect();

    // Each 500ms gap floors to zero tokens, and the baseline resets every call.
    assert!(outcomes[..10].iter().all(|&ok| ok));
    assert!(outcomes[10..].iter().all(|&ok| !ok));
}

#[test]
fn test_shared_limiter_across_threads_with_refill() {
    let clock = Arc::new(ManualClock::new());
    let limiter: SharedLimiter<Arc<ManualClock>> = Arc::new(
        TokenBucketLimiter::with_clock(8, 1.0, RefillPolicy::Truncate, Arc::clone(&clock)).unwrap(),
    );

    let drain = |limiter: &SharedLimiter<Arc<ManualClock>>| {
        let handles: Vec<_> = (0..32)
            .map(|_| {
                let limiter = Arc::clone(limiter);
                thread::spawn(move || limiter.try_consume(1))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&ok| ok)
            .count()
    };

    assert_eq!(drain(&limiter), 8);
    clock.advance(Duration::from_secs(3));
    assert_eq!(drain(&limiter), 3);

    let stats = limiter.stats();
    assert_eq!(stats.admitted_calls, 11);
    assert_eq!(stats.rejected_calls, 64 - 11);
    assert_eq!(stats.admitted_tokens, 11);
}
