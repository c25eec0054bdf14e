//! Process configuration for the HTTP server.

use std::net::SocketAddr;

use rackline_infra::{ConfigError, LedgerConfig};

pub const BIND_ADDR_VAR: &str = "RACKLINE_BIND_ADDR";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub ledger: LedgerConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                key: BIND_ADDR_VAR,
                value: raw.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            bind_addr,
            ledger: LedgerConfig::from_lookup(&lookup)?,
        })
    }
}
