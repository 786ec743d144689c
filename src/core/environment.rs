use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Process variable consulted by [`Environment::from_env`].
pub const ENVIRONMENT_VAR: &str = "ENSURE_ENV";

/// An invalid classification string was encountered during parsing.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid environment classification: {0}")]
pub struct ParseEnvironmentError(pub String);

/// Deployment classification controlling local diagnostics.
///
/// Failures are echoed to the `tracing` diagnostic stream in every
/// classification except [`Production`]. The classification is an explicit
/// configuration field with a deterministic default; nothing reads ambient
/// process state unless the caller opts in via [`from_env`].
///
/// [`Production`]: Environment::Production
/// [`from_env`]: Environment::from_env
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Test,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Test => "test",
        }
    }

    /// True when attempt failures should be echoed for local diagnostics.
    pub fn emits_diagnostics(&self) -> bool {
        !matches!(self, Environment::Production)
    }

    /// Reads the classification from the `ENSURE_ENV` process variable.
    ///
    /// Explicit opt-in for hosts that configure through the environment.
    /// Unset or unrecognized values fall back to the default
    /// ([`Development`]), so behavior stays deterministic.
    ///
    /// [`Development`]: Environment::Development
    pub fn from_env() -> Self {
        std::env::var(ENVIRONMENT_VAR)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for Environment {
    type Err = ParseEnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            "test" => Ok(Environment::Test),
            _ => Err(ParseEnvironmentError(s.to_string())),
        }
    }
}
