//! Submission errors

use retreat_domain::RetreatError;
use thiserror::Error;

use crate::notice::Notice;

/// Why a submission did not go through. Local selector state is unchanged in
/// every case, so the user can fix the problem and resubmit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Please select at least one date range")]
    EmptySelection,

    #[error("Please complete your current date range or cancel the selection")]
    PendingArrival,

    #[error("No name captured yet; enter your name first")]
    MissingIdentity,

    #[error("Could not read your saved name: {0}")]
    Identity(#[source] RetreatError),

    #[error("Something went wrong. Please try again.")]
    Relay(#[source] RetreatError),
}

impl SubmissionError {
    /// True when the relay was never contacted.
    pub fn is_precondition(&self) -> bool {
        !matches!(self, Self::Relay(_))
    }

    pub fn notice(&self) -> Notice {
        Notice::error(self.to_string())
    }
}
