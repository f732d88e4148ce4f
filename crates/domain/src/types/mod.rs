//! Domain types and models

pub mod identity;
pub mod range;
pub mod relay;
pub mod submission;

pub use identity::Identity;
pub use range::DateRange;
pub use relay::{RelayFailureBody, RelaySuccessBody};
pub use submission::SubmissionPayload;
