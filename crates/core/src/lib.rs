//! # Retreat Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The availability selector state machine
//! - The identity session over a key-value port
//! - The submission service and its relay port
//!
//! ## Architecture Principles
//! - Only depends on `retreat-domain`
//! - No file, HTTP, or terminal code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod clock;
pub mod identity;
pub mod notice;
pub mod selection;
pub mod submission;

// Re-export specific items to avoid ambiguity
pub use clock::{Clock, FixedClock, SystemClock};
pub use identity::ports::IdentityStore;
pub use identity::{InMemoryIdentityStore, SessionContext};
pub use notice::{Notice, NoticeLevel};
pub use selection::{
    AvailabilitySelector, SelectableWindow, SelectionError, SelectorEvent, SelectorState,
    Transition,
};
pub use submission::ports::SubmissionRelay;
pub use submission::{SubmissionError, SubmissionReceipt, SubmissionService};
