//! Identity capture commands

use retreat_core::Notice;
use retreat_domain::Identity;
use tracing::warn;

use crate::context::AppContext;
use crate::utils::logging::error_label;

/// Validate and save a display name.
pub fn capture_name(ctx: &AppContext, raw: &str) -> Notice {
    match ctx.session.capture(raw) {
        Ok(identity) => Notice::success(format!("Welcome, {identity}!")),
        Err(err) => {
            warn!(error_type = error_label(&err), "name capture failed");
            Notice::error(err.to_string())
        }
    }
}

/// Name saved by an earlier run. An unreadable store becomes an error notice
/// so the front end can fall back to asking for a name.
pub fn saved_identity(ctx: &AppContext) -> Result<Option<Identity>, Notice> {
    ctx.session.current().map_err(|err| {
        warn!(error_type = error_label(&err), "saved name unreadable");
        Notice::error(format!("Could not read your saved name: {err}"))
    })
}

pub fn who_am_i(ctx: &AppContext) -> Notice {
    match ctx.session.current() {
        Ok(Some(identity)) => Notice::info(format!("Submitting as {identity}")),
        Ok(None) => Notice::info("No name saved yet. Use: name <your name>"),
        Err(err) => Notice::error(err.to_string()),
    }
}

/// Clear the saved name. Selected ranges are kept.
pub fn forget_name(ctx: &AppContext) -> Notice {
    match ctx.session.forget() {
        Ok(()) => Notice::info("Saved name cleared"),
        Err(err) => {
            warn!(error_type = error_label(&err), "forget failed");
            Notice::error(err.to_string())
        }
    }
}
