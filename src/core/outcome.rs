use super::error::Cause;

/// An invocation either produced a value or exhausted its attempts.
///
/// This is the uniform result shape every invocation settles with: the
/// invoker itself never panics and never propagates the operation's failure
/// as its own error. Exactly one of `data`/`error` exists, and `retry_count`
/// says how many extra attempts were made beyond the first.
#[derive(Debug)]
pub enum InvokeOutcome<T> {
    /// Some attempt succeeded.
    Success {
        data: T,
        /// Completed retries before the successful attempt (0 when the first
        /// attempt succeeded).
        retry_count: u32,
    },
    /// Every attempt failed; `error` is the last attempt's cause.
    Failure {
        error: Cause,
        /// Completed retries (0 when `max_retries` was 0).
        retry_count: u32,
    },
}

impl<T> InvokeOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, InvokeOutcome::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, InvokeOutcome::Failure { .. })
    }

    /// Completed retries, whatever the outcome.
    pub fn retry_count(&self) -> u32 {
        match self {
            InvokeOutcome::Success { retry_count, .. }
            | InvokeOutcome::Failure { retry_count, .. } => *retry_count,
        }
    }

    /// The produced value, when successful.
    pub fn data(&self) -> Option<&T> {
        match self {
            InvokeOutcome::Success { data, .. } => Some(data),
            InvokeOutcome::Failure { .. } => None,
        }
    }

    /// The last failure cause, when exhausted.
    pub fn error(&self) -> Option<&Cause> {
        match self {
            InvokeOutcome::Success { .. } => None,
            InvokeOutcome::Failure { error, .. } => Some(error),
        }
    }

    /// Collapses the outcome into a plain `Result`, dropping the retry count.
    pub fn into_result(self) -> Result<T, Cause> {
        match self {
            InvokeOutcome::Success { data, .. } => Ok(data),
            InvokeOutcome::Failure { error, .. } => Err(error),
        }
    }
}
