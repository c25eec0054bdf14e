//! Configuration loading and representation.

use thiserror::Error;

/// Environment variable controlling [`LedgerConfig::max_conflict_retries`].
pub const MAX_CONFLICT_RETRIES_VAR: &str = "RACKLINE_MAX_CONFLICT_RETRIES";

const DEFAULT_MAX_CONFLICT_RETRIES: u32 = 8;
const MAX_CONFLICT_RETRIES_LIMIT: u32 = 64;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}' ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Ledger tuning.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// How many times a receive/pick is re-run after a stale commit before
    /// `ConcurrentConflict` is returned to the caller.
    pub max_conflict_retries: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            max_conflict_retries: DEFAULT_MAX_CONFLICT_RETRIES,
        }
    }
}

impl LedgerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(MAX_CONFLICT_RETRIES_VAR) {
            let value = raw.trim().parse::<u32>().map_err(|e| {
                ConfigError::Invalid {
                    key: MAX_CONFLICT_RETRIES_VAR,
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
            if value > MAX_CONFLICT_RETRIES_LIMIT {
                return Err(ConfigError::Invalid {
                    key: MAX_CONFLICT_RETRIES_VAR,
                    value: raw,
                    reason: format!("must be at most {MAX_CONFLICT_RETRIES_LIMIT}"),
                });
            }
            config.max_conflict_retries = value;
        }

        Ok(config)
    }
}
