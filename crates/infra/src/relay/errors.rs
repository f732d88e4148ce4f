//! Relay-specific error types
//!
//! Internal variants carry detail for server-side logs. The HTTP response
//! only ever exposes one of two fixed messages.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use retreat_domain::constants::{SUBMISSION_FAILED, WEBHOOK_NOT_CONFIGURED};
use retreat_domain::RelayFailureBody;
use thiserror::Error;

/// Relay operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("webhook URL not configured")]
    NotConfigured,

    #[error("request body is not valid JSON: {0}")]
    InvalidBody(String),

    #[error("webhook responded with status {0}")]
    DestinationStatus(u16),

    #[error("webhook request failed: {0}")]
    Transport(String),
}

impl RelayError {
    /// Message safe to return to the submitter.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::NotConfigured => WEBHOOK_NOT_CONFIGURED,
            Self::InvalidBody(_) | Self::DestinationStatus(_) | Self::Transport(_) => {
                SUBMISSION_FAILED
            }
        }
    }

    /// Every relay failure is reported as a server-side error.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(RelayFailureBody::new(self.public_message()))).into_response()
    }
}
