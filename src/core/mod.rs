//! Core types for the `ensure` invocation wrapper.
//!
//! This module provides the fundamental building blocks one invocation is
//! described with:
//!
//! # Domain Model
//! - [`InvokerConfig`]: Process-wide defaults captured by the factory
//! - [`InvokeOptions`]: Per-call retry, delay, timeout, and hook settings
//! - [`InvokeOutcome`]: The uniform success-or-recorded-failure result
//! - [`Cause`]: Opaque failure payload, operation error or synthesized timeout
//!
//! # Policy
//! - [`Backoff`]: Delay growth between attempts (fixed or exponential)
//! - [`Environment`]: Deployment classification gating local diagnostics
//!
//! # Hooks
//! - [`RetryHook`]: Synchronous per-retry callback
//! - [`ErrorHook`]: Fire-and-forget notification after exhaustion
//! - [`SuccessHook`]: Reserved, never invoked

mod environment;
mod error;
mod hooks;
mod options;
mod outcome;
pub mod retry;

// Re-export public types from submodules
pub use environment::{Environment, ParseEnvironmentError, ENVIRONMENT_VAR};
pub use error::{BoxError, Cause};
pub use hooks::{ErrorContext, ErrorHook, HookFuture, RetryHook, SuccessContext, SuccessHook};
pub use options::{InvokeOptions, InvokerConfig};
pub use outcome::InvokeOutcome;
pub use retry::Backoff;
