//! Configuration loader
//!
//! Builds the application configuration from defaults, an optional config
//! file, and environment overrides.
//!
//! ## Loading Strategy
//! 1. Loads `.env` from the working directory, if present
//! 2. Probes standard paths for a config file; defaults are used when none
//!    exists
//! 3. Applies environment variable overrides on top
//!
//! ## Environment Variables
//! - `RETREAT_WEBHOOK_URL`: Destination webhook (falls back to
//!   `ZAPIER_WEBHOOK_URL`). Empty means unset.
//! - `RETREAT_BIND_ADDR`: Relay listen address
//! - `RETREAT_WEBHOOK_TIMEOUT_SECS`: Outbound webhook timeout in seconds
//! - `RETREAT_CUTOFF_DATE`: Last selectable date (`YYYY-MM-DD`)
//! - `RETREAT_IDENTITY_PATH`: Identity store file
//! - `RETREAT_RELAY_ENDPOINT`: Submit URL used by front ends
//! - `RETREAT_LOG`: Log filter used when `RUST_LOG` is unset
//! - `RETREAT_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order), first in the current
//! working directory and then next to the executable:
//! `retreat.toml`, `retreat.json`, `config.toml`, `config.json`

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use retreat_domain::constants::WIRE_DATE_FORMAT;
use retreat_domain::{Config, Result, RetreatError};
use url::Url;

const CONFIG_FILE_NAMES: [&str; 4] = ["retreat.toml", "retreat.json", "config.toml", "config.json"];

/// Load configuration with the full fallback strategy
///
/// # Errors
/// Returns `RetreatError::Config` if a discovered config file cannot be
/// parsed or an environment override has an invalid value.
pub fn load() -> Result<Config> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!(error = %err, "Ignoring unreadable .env file"),
    }

    let base = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    let config = apply_overrides(base, |key| std::env::var(key).ok())?;
    tracing::info!(
        bind_addr = %config.relay.bind_addr,
        webhook_configured = config.relay.webhook_url.is_some(),
        cutoff = %config.selector.cutoff_date,
        "Configuration loaded"
    );
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations.
///
/// # Errors
/// Returns `RetreatError::Config` if the file is missing, unreadable, or
/// malformed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(RetreatError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            RetreatError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| RetreatError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration, detecting the format by file extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| RetreatError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| RetreatError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(RetreatError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// First existing config file in the working directory or next to the
/// executable.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }

    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

/// Apply environment overrides using `lookup` to read variables.
///
/// # Errors
/// Returns `RetreatError::Config` for values that do not parse.
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).map(|value| value.trim().to_string());

    let webhook = var("RETREAT_WEBHOOK_URL").or_else(|| var("ZAPIER_WEBHOOK_URL"));
    if let Some(raw) = webhook {
        config.relay.webhook_url = if raw.is_empty() { None } else { Some(raw) };
    }
    config.relay.webhook_url = normalize_webhook(config.relay.webhook_url.take())?;

    if let Some(addr) = var("RETREAT_BIND_ADDR").filter(|v| !v.is_empty()) {
        config.relay.bind_addr = addr;
    }

    if let Some(raw) = var("RETREAT_WEBHOOK_TIMEOUT_SECS") {
        config.relay.timeout_seconds = raw.parse::<u64>().map_err(|e| {
            RetreatError::Config(format!("Invalid RETREAT_WEBHOOK_TIMEOUT_SECS: {}", e))
        })?;
    }

    if let Some(raw) = var("RETREAT_CUTOFF_DATE") {
        config.selector.cutoff_date =
            NaiveDate::parse_from_str(&raw, WIRE_DATE_FORMAT).map_err(|e| {
                RetreatError::Config(format!("Invalid RETREAT_CUTOFF_DATE '{}': {}", raw, e))
            })?;
    }

    if let Some(path) = var("RETREAT_IDENTITY_PATH").filter(|v| !v.is_empty()) {
        config.identity.store_path = path;
    }

    if let Some(endpoint) = var("RETREAT_RELAY_ENDPOINT").filter(|v| !v.is_empty()) {
        Url::parse(&endpoint).map_err(|e| {
            RetreatError::Config(format!("Invalid RETREAT_RELAY_ENDPOINT: {}", e))
        })?;
        config.client.relay_endpoint = endpoint;
    }

    if let Some(filter) = var("RETREAT_LOG").filter(|v| !v.is_empty()) {
        config.logging.filter = filter;
    }

    config.logging.json = parse_bool(var("RETREAT_LOG_JSON"), config.logging.json);

    Ok(config)
}

/// Blank URLs collapse to `None`; anything else must be an absolute URL.
fn normalize_webhook(raw: Option<String>) -> Result<Option<String>> {
    match raw.map(|value| value.trim().to_string()).filter(|value| !value.is_empty()) {
        Some(value) => {
            Url::parse(&value)
                .map_err(|e| RetreatError::Config(format!("Invalid webhook URL: {}", e)))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// Accepts `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off`
/// (case-insensitive). Unset or blank keeps `default`.
fn parse_bool(value: Option<String>, default: bool) -> bool {
    value
        .filter(|s| !s.is_empty())
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
