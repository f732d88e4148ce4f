//! Availability submission workflow

pub mod errors;
pub mod ports;
pub mod service;

pub use errors::SubmissionError;
pub use service::{SubmissionReceipt, SubmissionService};
