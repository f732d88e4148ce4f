use std::time::Duration;

use retreat_domain::RetreatError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// `command` is a stable identifier such as `"selection::pick"`. Callers must
/// not pass user input (names, raw lines) through it.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `RetreatError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &RetreatError) -> &'static str {
    match error {
        RetreatError::Config(_) => "config",
        RetreatError::Network(_) => "network",
        RetreatError::Storage(_) => "storage",
        RetreatError::NotFound(_) => "not_found",
        RetreatError::InvalidInput(_) => "invalid_input",
        RetreatError::Internal(_) => "internal",
    }
}
