//! Fire-and-forget dispatch of the error-notification hook.
//!
//! The hook runs on a detached task: its completion is not ordered relative
//! to the caller observing the returned outcome, and a failure inside the
//! hook is caught here and logged; it must never surface as the
//! invocation's own error.

use crate::core::{Environment, ErrorContext, ErrorHook};
use std::sync::Arc;

/// Launches the hook and ignores it. Hook failures are contained.
pub(crate) fn dispatch_error(hook: Arc<ErrorHook>, context: ErrorContext, environment: Environment) {
    tokio::spawn(async move {
        let tag = context.tag.clone();
        if let Err(err) = hook(context).await {
            if environment.emits_diagnostics() {
                tracing::error!("error hook failed for {:?}: {}", tag, err);
            }
        }
    });
}
