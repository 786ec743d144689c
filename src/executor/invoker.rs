//! The factory and its attempt loop.
//!
//! [`Invoker`] is the reusable half: it captures the process-wide defaults
//! once and is immutable afterwards, so one factory can serve any number of
//! concurrent invocations. [`Invoker::invoke`] is the per-call half: a
//! bounded loop of timeout-raced attempts with backoff in between, settling
//! into a uniform [`InvokeOutcome`] no matter what the operation does.

use super::{deadline, notify};
use crate::core::{
    BoxError, Cause, Environment, ErrorContext, ErrorHook, InvokeOptions, InvokeOutcome,
    InvokerConfig,
};
use std::future::Future;
use std::sync::Arc;

/// Reusable invocation wrapper bound to process-wide defaults.
///
/// Built once from an [`InvokerConfig`]; cloning is cheap and every clone
/// shares the same captured defaults.
#[derive(Clone, Default)]
pub struct Invoker {
    environment: Environment,
    on_error: Option<Arc<ErrorHook>>,
}

impl Invoker {
    /// Pure construction, no I/O, no validation. The configuration is
    /// captured by value and read, never mutated, by every subsequent call.
    pub fn new(config: InvokerConfig) -> Self {
        Self {
            environment: config.environment,
            on_error: config.on_error,
        }
    }

    /// The classification this factory was bound to.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Executes `operation` with bounded retry, optional timeout, and
    /// optional backoff, returning a uniform result instead of propagating
    /// failures.
    ///
    /// The operation is a producer of fresh attempt futures: it is called
    /// once per attempt, strictly sequentially, each attempt fully settled
    /// (value, error, or timeout) before the next begins. This method never
    /// panics on the failure path and never returns the operation's error as
    /// its own; all failure is encoded in the returned [`InvokeOutcome`].
    ///
    /// Per failed attempt, in order: the failure is echoed for local
    /// diagnostics outside production; if attempts remain, `on_retry` fires
    /// synchronously and the computed backoff delay is slept; otherwise the
    /// error-notification hook (per-call override first, factory default
    /// second) is dispatched fire-and-forget and the last cause is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use ensure::{InvokeOptions, Invoker};
    /// use std::time::Duration;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let invoker = Invoker::default();
    ///
    /// let outcome = invoker
    ///     .invoke(
    ///         || async { Ok::<_, String>("ready") },
    ///         InvokeOptions::new()
    ///             .with_max_retries(2)
    ///             .with_retry_delay(Duration::from_millis(100)),
    ///     )
    ///     .await;
    ///
    /// assert_eq!(outcome.data(), Some(&"ready"));
    /// assert_eq!(outcome.retry_count(), 0);
    /// # }
    /// ```
    pub async fn invoke<T, E, F, Fut>(
        &self,
        mut operation: F,
        mut options: InvokeOptions,
    ) -> InvokeOutcome<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Into<BoxError>,
    {
        let mut attempt: u32 = 0;
        let mut retry_count: u32 = 0;
        let total = options.max_retries.saturating_add(1);

        loop {
            let result = match options.timeout {
                Some(limit) if !limit.is_zero() => {
                    deadline::run_with_deadline(operation(), limit).await
                }
                _ => operation().await.map_err(Cause::operation),
            };

            match result {
                Ok(data) => return InvokeOutcome::Success { data, retry_count },
                Err(cause) => {
                    let exhausted = attempt >= options.max_retries;

                    if self.environment.emits_diagnostics() {
                        if exhausted {
                            tracing::warn!(
                                "invocation {:?} failed and exhausted {} attempt(s): {}",
                                options.tag,
                                total,
                                cause
                            );
                        } else {
                            tracing::debug!(
                                "invocation {:?} attempt {}/{} failed: {}. Retrying",
                                options.tag,
                                attempt + 1,
                                total,
                                cause
                            );
                        }
                    }

                    if exhausted {
                        self.notify_exhausted(&options, cause.clone(), retry_count);
                        return InvokeOutcome::Failure {
                            error: cause,
                            retry_count,
                        };
                    }

                    retry_count += 1;
                    if let Some(on_retry) = options.on_retry.as_mut() {
                        on_retry(retry_count, &cause);
                    }

                    let delay = options.backoff.delay_for(options.retry_delay, attempt);
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    attempt += 1;
                }
            }
        }
    }

    /// Fires the error-notification hook, if one is configured. The per-call
    /// override takes precedence over the factory default.
    fn notify_exhausted(&self, options: &InvokeOptions, error: Cause, retry_count: u32) {
        let hook = options.on_error.as_ref().or(self.on_error.as_ref());
        if let Some(hook) = hook {
            notify::dispatch_error(
                Arc::clone(hook),
                ErrorContext {
                    tag: options.tag.clone(),
                    error,
                    retry_count,
                },
                self.environment,
            );
        }
    }
}
