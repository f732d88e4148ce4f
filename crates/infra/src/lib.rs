//! # Retreat Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP client with timeout and bounded retry
//! - The webhook relay (forwarder + axum server)
//! - File-backed identity store
//! - HTTP client for the submission relay port
//! - Configuration loading and tracing setup
//!
//! ## Architecture
//! - Implements traits defined in `retreat-core`
//! - Depends on `retreat-domain` and `retreat-core`
//! - Contains all "impure" code (I/O, network, environment)

pub mod config;
pub mod errors;
pub mod http;
pub mod identity;
pub mod observability;
pub mod relay;
pub mod submission;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use identity::FileIdentityStore;
pub use relay::{RelayError, RelayServer, RelayState, WebhookForwarder};
pub use submission::HttpSubmissionRelay;
