//! Configuration management

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_CLIENT_TIMEOUT_SECS, DEFAULT_CUTOFF, DEFAULT_IDENTITY_PATH,
    DEFAULT_LOG_FILTER, DEFAULT_RELAY_ENDPOINT, DEFAULT_WEBHOOK_TIMEOUT_SECS,
};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub relay: RelayConfig,
    pub selector: SelectorConfig,
    pub identity: IdentityConfig,
    pub client: ClientConfig,
    pub logging: LoggingConfig,
}

/// Submission relay (server side) configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub bind_addr: String,
    /// Destination webhook. `None` is a valid, handled state.
    #[serde(skip_serializing)]
    pub webhook_url: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            webhook_url: None,
            timeout_seconds: DEFAULT_WEBHOOK_TIMEOUT_SECS,
        }
    }
}

/// Availability selector configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Last selectable date (inclusive)
    pub cutoff_date: NaiveDate,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        let (year, month, day) = DEFAULT_CUTOFF;
        Self { cutoff_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MAX) }
    }
}

/// Local identity store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub store_path: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self { store_path: DEFAULT_IDENTITY_PATH.to_string() }
    }
}

/// Front-end client configuration (where submissions are sent)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub relay_endpoint: String,
    pub timeout_seconds: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            relay_endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_CLIENT_TIMEOUT_SECS,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Fallback filter directive when `RUST_LOG` is unset
    pub filter: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: DEFAULT_LOG_FILTER.to_string(), json: false }
    }
}
