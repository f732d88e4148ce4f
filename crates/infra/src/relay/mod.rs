//! Submission relay
//!
//! A stateless pass-through: every `POST /api/submit` body is forwarded to
//! one statically configured webhook and the outcome is reduced to a generic
//! success or failure.

pub mod errors;
pub mod forwarder;
pub mod server;

pub use errors::RelayError;
pub use forwarder::WebhookForwarder;
pub use server::{router, RelayServer, RelayState};
