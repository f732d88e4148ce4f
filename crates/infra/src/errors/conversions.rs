//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};

use reqwest::Error as HttpError;
use retreat_domain::RetreatError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub RetreatError);

impl From<InfraError> for RetreatError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<RetreatError> for InfraError {
    fn from(value: RetreatError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoRetreatError {
    fn into_retreat(self) -> RetreatError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → RetreatError */
/* -------------------------------------------------------------------------- */

impl IntoRetreatError for HttpError {
    fn into_retreat(self) -> RetreatError {
        if self.is_timeout() {
            return RetreatError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return RetreatError::Network("HTTP connection failure".into());
        }

        if self.is_builder() {
            return RetreatError::Config(format!("invalid HTTP request: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                404 => RetreatError::NotFound(message),
                400..=499 if code != 429 => RetreatError::InvalidInput(message),
                _ => RetreatError::Network(message),
            };
        }

        RetreatError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_retreat())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → RetreatError */
/* -------------------------------------------------------------------------- */

impl IntoRetreatError for IoError {
    fn into_retreat(self) -> RetreatError {
        match self.kind() {
            ErrorKind::NotFound => RetreatError::NotFound(format!("file not found: {self}")),
            ErrorKind::PermissionDenied => {
                RetreatError::Storage(format!("permission denied: {self}"))
            }
            _ => RetreatError::Storage(self.to_string()),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_retreat())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → RetreatError */
/* -------------------------------------------------------------------------- */

impl IntoRetreatError for JsonError {
    fn into_retreat(self) -> RetreatError {
        if self.is_io() {
            RetreatError::Storage(format!("JSON I/O failure: {self}"))
        } else {
            RetreatError::InvalidInput(format!("malformed JSON: {self}"))
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_retreat())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
