//! Tracing subscriber setup
//!
//! Installs a global `tracing` subscriber once per process. The filter comes
//! from `RUST_LOG` when set, otherwise from [`LoggingConfig::filter`]. Log
//! lines go to stderr so stdout stays free for front-end output.

use retreat_domain::{LoggingConfig, Result, RetreatError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
///
/// # Errors
/// Returns `RetreatError::Config` if the filter directive is invalid or a
/// subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json {
        registry
            .with(fmt::layer().json().with_current_span(true).with_writer(std::io::stderr))
            .try_init()
    } else {
        registry.with(fmt::layer().with_target(false).with_writer(std::io::stderr)).try_init()
    };

    installed.map_err(|err| RetreatError::Config(format!("failed to install tracing: {err}")))
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.filter).map_err(|err| {
            RetreatError::Config(format!("invalid log filter '{}': {err}", config.filter))
        }),
    }
}
