//! # Retreat Domain
//!
//! Business domain types for retreat availability collection.
//!
//! This crate contains:
//! - Availability data types (DateRange, Identity, SubmissionPayload)
//! - Relay response bodies shared by the server and its clients
//! - Domain error types and Result definitions
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other retreat crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
