//! The timeout race.
//!
//! One attempt is pitted against a timer; whichever settles first wins. The
//! race is built on `tokio::time::timeout`, whose drop semantics release the
//! timer when the operation wins and abandon the operation when the timer
//! wins. No exit path leaves a timer armed or an attempt running.

use crate::core::{BoxError, Cause};
use std::future::Future;
use std::time::Duration;

/// Runs one attempt under a per-attempt limit.
///
/// The timer winning synthesizes [`Cause::TimedOut`] with the configured
/// limit; the operation's eventual result is disregarded. The operation
/// winning cancels the timer, and its error (if any) is boxed into
/// [`Cause::Operation`] unmodified.
pub(crate) async fn run_with_deadline<T, E, Fut>(attempt: Fut, limit: Duration) -> Result<T, Cause>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<BoxError>,
{
    match tokio::time::timeout(limit, attempt).await {
        Ok(Ok(data)) => Ok(data),
        Ok(Err(err)) => Err(Cause::operation(err)),
        Err(_elapsed) => Err(Cause::TimedOut { limit }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_operation_wins_the_race() {
        let result: Result<u32, Cause> = run_with_deadline(
            async { Ok::<_, String>(7) },
            Duration::from_millis(100),
        )
        .await;
        assert_eq!(result.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_operation_error_passes_through() {
        let result: Result<u32, Cause> = run_with_deadline(
            async { Err::<u32, _>("boom".to_string()) },
            Duration::from_millis(100),
        )
        .await;
        let cause = result.unwrap_err();
        assert!(!cause.is_timeout());
        assert_eq!(cause.to_string(), "boom");
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_wins_the_race() {
        let limit = Duration::from_millis(50);
        let result: Result<u32, Cause> = run_with_deadline(
            async {
                tokio::time::sleep(Duration::from_millis(200)).await;
                Ok::<_, String>(7)
            },
            limit,
        )
        .await;
        let cause = result.unwrap_err();
        assert!(cause.is_timeout());
        assert_eq!(cause.to_string(), "operation timed out after 50ms");
    }
}
