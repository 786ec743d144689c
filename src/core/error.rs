use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Boxed error type accepted at the operation boundary.
///
/// Anything the wrapped operation fails with is converted through this alias,
/// so custom error enums, `std::io::Error`, `String`, and `&str` all carry
/// through without reinterpretation.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Why an attempt (and ultimately an invocation) failed.
///
/// The operation's own failure payload is opaque to the wrapper: it is boxed
/// once at the attempt boundary and handed back unmodified. Timeouts are the
/// one failure the wrapper synthesizes itself, and they record the configured
/// limit so callers can tell the two apart.
///
/// `Cause` is cheap to clone (the operation payload is shared) because the
/// same value travels in the returned [`Failure`] and in the error-hook
/// context.
///
/// [`Failure`]: crate::core::InvokeOutcome::Failure
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Cause {
    /// The operation settled with an error; payload passed through as-is.
    Operation(Arc<dyn StdError + Send + Sync>),
    /// The timeout race's timer won before the operation settled.
    TimedOut {
        /// The configured per-attempt limit that elapsed.
        limit: Duration,
    },
}

impl Cause {
    pub(crate) fn operation<E: Into<BoxError>>(err: E) -> Self {
        Cause::Operation(Arc::from(err.into()))
    }

    /// True when this failure was synthesized by the timeout race.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Cause::TimedOut { .. })
    }

    /// The operation's own error, if this is not a timeout.
    pub fn operation_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self {
            Cause::Operation(err) => Some(err.as_ref()),
            Cause::TimedOut { .. } => None,
        }
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cause::Operation(err) => write!(f, "{err}"),
            Cause::TimedOut { limit } => {
                write!(f, "operation timed out after {}ms", limit.as_millis())
            }
        }
    }
}

impl StdError for Cause {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Cause::Operation(err) => {
                let source: &(dyn StdError + 'static) = &**err;
                Some(source)
            }
            Cause::TimedOut { .. } => None,
        }
    }
}
