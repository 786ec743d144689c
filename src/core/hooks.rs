//! Notification hooks fired from the attempt loop.
//!
//! Three side channels exist:
//!
//! - [`RetryHook`]: synchronous, called once per retry before the delay.
//! - [`ErrorHook`]: asynchronous, dispatched fire-and-forget after all
//!   attempts are exhausted. Its own failure is contained and logged, never
//!   surfaced as the invocation's error.
//! - [`SuccessHook`]: reserved. The options shape carries it, but the attempt
//!   loop does not invoke it today.

use super::error::{BoxError, Cause};
use std::future::Future;
use std::pin::Pin;

/// Boxed future returned by the asynchronous hooks.
pub type HookFuture = Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send>>;

/// Called synchronously before each inter-attempt delay.
///
/// The first argument is the 1-based number of the retry about to happen,
/// which equals the number of retries completed so far.
pub type RetryHook = dyn FnMut(u32, &Cause) + Send;

/// Asynchronous error-notification hook, fired once after exhaustion.
pub type ErrorHook = dyn Fn(ErrorContext) -> HookFuture + Send + Sync;

/// Reserved companion to [`ErrorHook`] for the success path. Never invoked.
pub type SuccessHook = dyn Fn(SuccessContext) -> HookFuture + Send + Sync;

/// What the error hook learns about an exhausted invocation.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Caller-supplied label for the invocation, if any.
    pub tag: Option<String>,
    /// The last attempt's failure cause.
    pub error: Cause,
    /// Completed retries beyond the first attempt.
    pub retry_count: u32,
}

/// Context for the reserved success hook.
#[derive(Debug, Clone)]
pub struct SuccessContext {
    pub tag: Option<String>,
    pub retry_count: u32,
}
