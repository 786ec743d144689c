//! Timeout-race behavior under paused Tokio time.
//!
//! `start_paused` makes the clock deterministic: sleeps auto-advance virtual
//! time, so a 50ms limit elapses "instantly" while still being observable
//! through `tokio::time::Instant`.

use ensure::prelude::*;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_timer_beats_a_never_settling_operation() {
    let start = tokio::time::Instant::now();

    let outcome = Invoker::default()
        .invoke(
            || std::future::pending::<Result<i32, String>>(),
            InvokeOptions::new().with_timeout(Duration::from_millis(50)),
        )
        .await;

    let elapsed = start.elapsed();
    let cause = outcome.error().expect("expected a timeout failure");
    assert!(cause.is_timeout());
    assert!(elapsed >= Duration::from_millis(50));
    assert!(elapsed < Duration::from_millis(60));
}

#[tokio::test(start_paused = true)]
async fn test_timer_beats_a_slow_operation() {
    let start = tokio::time::Instant::now();

    let outcome = Invoker::default()
        .invoke(
            || async {
                tokio::time::sleep(Duration::from_millis(200)).await;
                Ok::<_, String>(42)
            },
            InvokeOptions::new().with_timeout(Duration::from_millis(50)),
        )
        .await;

    // The operation's eventual value is disregarded; the limit is recorded.
    assert!(outcome.is_failure());
    if let Cause::TimedOut { limit } = outcome.error().unwrap() {
        assert_eq!(*limit, Duration::from_millis(50));
    } else {
        panic!("expected a timeout cause");
    }
    assert!(start.elapsed() < Duration::from_millis(60));
}

#[tokio::test(start_paused = true)]
async fn test_operation_beats_the_timer() {
    let start = tokio::time::Instant::now();

    let outcome = Invoker::default()
        .invoke(
            || async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                Ok::<_, String>(42)
            },
            InvokeOptions::new().with_timeout(Duration::from_millis(100)),
        )
        .await;

    assert_eq!(outcome.data(), Some(&42));
    assert_eq!(outcome.retry_count(), 0);
    // The race settles with the operation; nothing waits out the full limit.
    assert!(start.elapsed() < Duration::from_millis(100));
}

#[tokio::test(start_paused = true)]
async fn test_unset_timeout_runs_unbounded() {
    let outcome = Invoker::default()
        .invoke(
            || async {
                tokio::time::sleep(Duration::from_millis(500)).await;
                Ok::<_, String>("slow but fine")
            },
            InvokeOptions::new(),
        )
        .await;

    assert_eq!(outcome.data(), Some(&"slow but fine"));
}

#[tokio::test(start_paused = true)]
async fn test_zero_timeout_runs_unbounded() {
    let outcome = Invoker::default()
        .invoke(
            || async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                Ok::<_, String>(7)
            },
            InvokeOptions::new().with_timeout(Duration::ZERO),
        )
        .await;

    assert_eq!(outcome.data(), Some(&7));
}

#[tokio::test(start_paused = true)]
async fn test_every_attempt_gets_its_own_timer() {
    let counter = Arc::new(AtomicU32::new(0));
    let counter_clone = counter.clone();
    let start = tokio::time::Instant::now();

    let outcome = Invoker::default()
        .invoke(
            move || {
                counter_clone.fetch_add(1, Ordering::SeqCst);
                std::future::pending::<Result<i32, String>>()
            },
            InvokeOptions::new()
                .with_max_retries(2)
                .with_timeout(Duration::from_millis(20))
                .with_retry_delay(Duration::from_millis(5)),
        )
        .await;

    assert!(outcome.is_failure());
    assert_eq!(outcome.retry_count(), 2);
    assert!(outcome.error().unwrap().is_timeout());
    assert_eq!(counter.load(Ordering::SeqCst), 3);

    // Three 20ms races plus two 5ms delays.
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(70));
    assert!(elapsed < Duration::from_millis(85));
}

#[tokio::test(start_paused = true)]
async fn test_operation_can_recover_after_a_timeout() {
    let counter = Arc::new(AtomicU32::new(0));
    let counter_clone = counter.clone();

    let outcome = Invoker::default()
        .invoke(
            move || {
                let attempt = counter_clone.fetch_add(1, Ordering::SeqCst) + 1;
                async move {
                    if attempt == 1 {
                        // First attempt stalls past the limit.
                        tokio::time::sleep(Duration::from_millis(500)).await;
                    }
                    Ok::<_, String>(attempt)
                }
            },
            InvokeOptions::new()
                .with_max_retries(1)
                .with_timeout(Duration::from_millis(50)),
        )
        .await;

    assert_eq!(outcome.data(), Some(&2));
    assert_eq!(outcome.retry_count(), 1);
}
