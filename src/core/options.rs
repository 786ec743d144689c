//! Configuration records for the factory and for single invocations.
//!
//! [`InvokerConfig`] is captured once when the factory is built and shared
//! read-only by every invocation it produces. [`InvokeOptions`] is owned by
//! exactly one invocation and discarded with it. Neither record is validated
//! beyond its shape; zero and `None` values mean "feature off".

use super::environment::Environment;
use super::error::{BoxError, Cause};
use super::hooks::{ErrorContext, ErrorHook, HookFuture, RetryHook, SuccessContext, SuccessHook};
use super::retry::Backoff;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Process-wide defaults captured by the factory.
#[derive(Default)]
pub struct InvokerConfig {
    /// Deployment classification; defaults to [`Environment::Development`].
    pub environment: Environment,
    /// Default error-notification hook, overridable per call.
    pub on_error: Option<Arc<ErrorHook>>,
}

impl InvokerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Installs the default error-notification hook.
    ///
    /// # Example
    ///
    /// ```
    /// use ensure::{Environment, InvokerConfig};
    ///
    /// let config = InvokerConfig::new()
    ///     .with_environment(Environment::Production)
    ///     .with_on_error(|ctx| async move {
    ///         eprintln!("invocation {:?} failed: {}", ctx.tag, ctx.error);
    ///         Ok(())
    ///     });
    /// ```
    pub fn with_on_error<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(ErrorContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), BoxError>> + Send + 'static,
    {
        self.on_error = Some(Arc::new(move |ctx| -> HookFuture { Box::pin(hook(ctx)) }));
        self
    }
}

/// Per-call settings for one invocation.
///
/// The defaults describe the simplest possible call: a single attempt, no
/// delay, no timeout, no hooks.
#[derive(Default)]
pub struct InvokeOptions {
    /// Label carried into diagnostics and the error-hook context.
    pub tag: Option<String>,
    /// Retries beyond the first attempt. Zero means exactly one attempt.
    pub max_retries: u32,
    /// Base delay between attempts. Zero means no waiting.
    pub retry_delay: Duration,
    /// How `retry_delay` grows across attempts.
    pub backoff: Backoff,
    /// Per-attempt limit for the timeout race. `None` (or zero) runs the
    /// operation unbounded.
    pub timeout: Option<Duration>,
    /// Synchronous per-retry callback.
    pub on_retry: Option<Box<RetryHook>>,
    /// Error-notification hook for this call only; takes precedence over the
    /// factory default.
    pub on_error: Option<Arc<ErrorHook>>,
    /// Reserved success-notification hook. Present in the options shape for
    /// symmetry with `on_error` but never invoked by the attempt loop.
    pub on_success: Option<Arc<SuccessHook>>,
}

impl InvokeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    pub fn with_backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Registers a synchronous callback fired before each retry delay.
    pub fn with_on_retry<F>(mut self, hook: F) -> Self
    where
        F: FnMut(u32, &Cause) + Send + 'static,
    {
        self.on_retry = Some(Box::new(hook));
        self
    }

    /// Registers an error-notification hook for this call, overriding the
    /// factory default.
    pub fn with_on_error<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(ErrorContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), BoxError>> + Send + 'static,
    {
        self.on_error = Some(Arc::new(move |ctx| -> HookFuture { Box::pin(hook(ctx)) }));
        self
    }

    /// Registers the reserved success hook. Stored but never called; see
    /// [`SuccessHook`].
    pub fn with_on_success<F, Fut>(mut self, hook: F) -> Self
    where
        F: Fn(SuccessContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), BoxError>> + Send + 'static,
    {
        self.on_success = Some(Arc::new(move |ctx| -> HookFuture { Box::pin(hook(ctx)) }));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_defaults_describe_single_attempt() {
        let options = InvokeOptions::default();
        assert_eq!(options.tag, None);
        assert_eq!(options.max_retries, 0);
        assert_eq!(options.retry_delay, Duration::ZERO);
        assert_eq!(options.backoff, Backoff::Fixed);
        assert_eq!(options.timeout, None);
        assert!(options.on_retry.is_none());
        assert!(options.on_error.is_none());
        assert!(options.on_success.is_none());
    }

    #[test]
    fn test_builder_sets_every_field() {
        let options = InvokeOptions::new()
            .with_tag("checkout")
            .with_max_retries(3)
            .with_retry_delay(Duration::from_millis(100))
            .with_backoff(Backoff::Exponential)
            .with_timeout(Duration::from_secs(1))
            .with_on_retry(|_, _| {})
            .with_on_error(|_| async { Ok(()) })
            .with_on_success(|_| async { Ok(()) });

        assert_eq!(options.tag.as_deref(), Some("checkout"));
        assert_eq!(options.max_retries, 3);
        assert_eq!(options.retry_delay, Duration::from_millis(100));
        assert_eq!(options.backoff, Backoff::Exponential);
        assert_eq!(options.timeout, Some(Duration::from_secs(1)));
        assert!(options.on_retry.is_some());
        assert!(options.on_error.is_some());
        assert!(options.on_success.is_some());
    }

    #[test]
    fn test_config_defaults() {
        let config = InvokerConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert!(config.on_error.is_none());
    }
}
