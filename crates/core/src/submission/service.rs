//! Submission service - core business logic

use std::sync::Arc;

use retreat_domain::{Identity, RetreatError, SubmissionPayload};
use tracing::{info, instrument, warn};

use super::errors::SubmissionError;
use super::ports::SubmissionRelay;
use crate::clock::Clock;
use crate::identity::SessionContext;
use crate::notice::Notice;
use crate::selection::AvailabilitySelector;

/// Proof of a delivered submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub identity: Identity,
    pub payload: SubmissionPayload,
}

impl SubmissionReceipt {
    pub fn notice(&self) -> Notice {
        Notice::success(format!(
            "Thank you, {}! We'll follow up shortly once the rest of the guys enter their availability.",
            self.identity
        ))
    }
}

/// Checks submission preconditions, builds the payload, and hands it to the
/// relay.
pub struct SubmissionService {
    relay: Arc<dyn SubmissionRelay>,
    clock: Arc<dyn Clock>,
}

impl SubmissionService {
    pub fn new(relay: Arc<dyn SubmissionRelay>, clock: Arc<dyn Clock>) -> Self {
        Self { relay, clock }
    }

    /// Submit the selector's ranges for the session's identity.
    ///
    /// The relay is only called when the selector is idle, holds at least one
    /// range, and an identity exists. The selector is borrowed immutably, so
    /// a failed attempt can simply be retried.
    #[instrument(skip_all, fields(ranges = selector.ranges().len()))]
    pub async fn submit(
        &self,
        session: &SessionContext,
        selector: &AvailabilitySelector,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        Self::check_ready(selector)?;

        let identity = session.require().map_err(|err| match err {
            RetreatError::NotFound(_) => SubmissionError::MissingIdentity,
            other => SubmissionError::Identity(other),
        })?;

        let payload = SubmissionPayload::build(&identity, selector.ranges(), self.clock.now());

        match self.relay.submit(&payload).await {
            Ok(()) => {
                info!(total_ranges = payload.total_ranges(), "availability submitted");
                Ok(SubmissionReceipt { identity, payload })
            }
            Err(err) => {
                warn!(error = %err, "availability submission failed");
                Err(SubmissionError::Relay(err))
            }
        }
    }

    /// Precondition check shared with front ends that want to grey out their
    /// submit control.
    pub fn check_ready(selector: &AvailabilitySelector) -> Result<(), SubmissionError> {
        if selector.ranges().is_empty() {
            return Err(SubmissionError::EmptySelection);
        }
        if !selector.state().is_idle() {
            return Err(SubmissionError::PendingArrival);
        }
        Ok(())
    }
}
