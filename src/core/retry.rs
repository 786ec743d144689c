//! Delay growth between retry attempts.
//!
//! The wrapper waits between attempts only when the caller configures a base
//! delay; [`Backoff`] decides how that base grows across attempts. There is
//! deliberately no jitter and no cap: the caller-specified values bound the
//! growth, and the arithmetic saturates instead of overflowing.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Policy governing delay growth between attempts.
///
/// # Examples
///
/// ```
/// use ensure::Backoff;
/// use std::time::Duration;
///
/// let base = Duration::from_millis(100);
///
/// // Fixed: every retry waits the base delay.
/// assert_eq!(Backoff::Fixed.delay_for(base, 3), base);
///
/// // Exponential: the delay doubles after every failed attempt.
/// assert_eq!(
///     Backoff::Exponential.delay_for(base, 3),
///     Duration::from_millis(800)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backoff {
    /// Every retry waits the same base delay.
    #[default]
    Fixed,
    /// The delay doubles with each failed attempt: `base * 2^attempt`.
    Exponential,
}

impl Backoff {
    /// Delay to wait after `attempt` failed, before the next attempt begins.
    ///
    /// `attempt` is the 0-based index of the attempt that just failed, so the
    /// first retry of an exponential schedule waits exactly `base`.
    pub fn delay_for(&self, base: Duration, attempt: u32) -> Duration {
        match self {
            Backoff::Fixed => base,
            Backoff::Exponential => {
                let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
                base.saturating_mul(factor)
            }
        }
    }
}
