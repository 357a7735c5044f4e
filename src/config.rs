use crate::domain::constants::{DEFAULT_API_BASE, ENV_API_BASE, ENV_API_KEY, ENV_TIMEOUT_MS};
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{var} must be a whole number of milliseconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },
}

/// Process-wide settings. Read once in `main` and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_key: Option<String>,
    pub api_base: String,
    pub timeout: Option<Duration>,
}

impl Settings {
    /// Loads `.env.local` then `.env` from the working directory (first one wins per
    /// variable, real environment wins over both), then reads the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        for file in [".env.local", ".env"] {
            if dotenvy::from_filename(file).is_ok() {
                tracing::debug!(file, "loaded env file");
            }
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let timeout = match non_empty(ENV_TIMEOUT_MS) {
            Some(raw) => Some(Duration::from_millis(raw.trim().parse().map_err(|_| {
                ConfigError::InvalidTimeout {
                    var: ENV_TIMEOUT_MS,
                    value: raw.clone(),
                }
            })?)),
            None => None,
        };

        Ok(Self {
            api_key: non_empty(ENV_API_KEY),
            api_base: non_empty(ENV_API_BASE).unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            timeout,
        })
    }
}
