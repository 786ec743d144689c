//! Ensure: Success-or-Recorded-Failure Wrapper for Async Operations
//!
//! `ensure` executes a single asynchronous operation with bounded retry,
//! optional timeout, and optional backoff, and always settles into a uniform
//! result instead of propagating failures.
//!
//! # Features
//!
//! - **Uniform outcome**: Every invocation returns [`InvokeOutcome`], a
//!   value or a recorded failure, never a raised error
//! - **Bounded retry**: `max_retries` extra attempts, strictly sequential
//! - **Timeout race**: A per-attempt timer raced against the operation, with
//!   no dangling expiry on either outcome
//! - **Backoff**: Fixed or exponential delay growth, no jitter, no cap
//! - **Observability hooks**: A synchronous per-retry callback and a
//!   fire-and-forget error-notification hook whose own failures are contained
//! - **Opaque causes**: The operation's failure payload passes through
//!   unmodified; timeouts carry the configured limit
//!
//! # Quick Start
//!
//! ```
//! use ensure::{Backoff, InvokeOptions, Invoker, InvokerConfig};
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let invoker = Invoker::new(InvokerConfig::new());
//!
//! let outcome = invoker
//!     .invoke(
//!         || async { fetch_quote().await },
//!         InvokeOptions::new()
//!             .with_tag("quote")
//!             .with_max_retries(2)
//!             .with_retry_delay(Duration::from_millis(100))
//!             .with_backoff(Backoff::Exponential)
//!             .with_timeout(Duration::from_secs(1)),
//!     )
//!     .await;
//!
//! match outcome {
//!     ensure::InvokeOutcome::Success { data, retry_count } => {
//!         println!("got {data} after {retry_count} retries");
//!     }
//!     ensure::InvokeOutcome::Failure { error, retry_count } => {
//!         println!("gave up after {retry_count} retries: {error}");
//!     }
//! }
//! # }
//! # async fn fetch_quote() -> Result<String, String> { Ok("99.5".into()) }
//! ```
//!
//! # Module Organization
//!
//! Each module hides a specific design decision that is likely to change:
//!
//! - [`core`]: Configuration, outcome, and failure-cause types (hides the
//!   cause representation)
//! - [`executor`]: The attempt loop, timeout race, and hook dispatch (hides
//!   the execution strategy)
//!
//! # What this is not
//!
//! Not a scheduler, not a circuit breaker, not a queue. One invocation wraps
//! one logical operation; nothing is coordinated across calls and nothing is
//! persisted between them.

pub mod core;
pub mod executor;

// Re-export commonly used types for convenience
pub use crate::core::{
    Backoff, BoxError, Cause, Environment, ErrorContext, ErrorHook, HookFuture, InvokeOptions,
    InvokeOutcome, InvokerConfig, ParseEnvironmentError, RetryHook, SuccessContext, SuccessHook,
    ENVIRONMENT_VAR,
};
pub use crate::executor::Invoker;

// Re-export the runtime used in the public API so users don't hit version
// mismatch errors.
pub use tokio;

/// Prelude module for convenient glob imports
///
/// # Example
///
/// ```
/// use ensure::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::{
        Backoff, BoxError, Cause, Environment, ErrorContext, InvokeOptions, InvokeOutcome,
        InvokerConfig,
    };
    pub use crate::executor::Invoker;
}
