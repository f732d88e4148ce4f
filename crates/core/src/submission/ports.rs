//! Port interfaces for submission delivery

use async_trait::async_trait;
use retreat_domain::{Result, SubmissionPayload};

/// Delivers a finished payload to the relay.
///
/// Implementations report any non-success outcome as an error; callers never
/// see destination-specific detail beyond the error message.
#[async_trait]
pub trait SubmissionRelay: Send + Sync {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<()>;
}
