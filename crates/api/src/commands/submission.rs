//! Submission command

use retreat_core::{Notice, SubmissionError};
use tracing::warn;

use crate::context::AppContext;
use crate::utils::logging::error_label;

/// Submit the current ranges under the saved name. Ranges are kept either
/// way, so a failed attempt can be repeated as-is.
pub async fn submit_availability(ctx: &AppContext) -> Notice {
    match ctx.submission.submit(&ctx.session, &ctx.selector).await {
        Ok(receipt) => receipt.notice(),
        Err(err) => {
            if let SubmissionError::Relay(cause) | SubmissionError::Identity(cause) = &err {
                warn!(error_type = error_label(cause), error = %cause, "submission not delivered");
            }
            err.notice()
        }
    }
}
