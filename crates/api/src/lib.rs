//! # Retreat App
//!
//! Application layer - context wiring and the line-oriented command surface.
//!
//! This crate contains:
//! - Application context (dependency injection)
//! - Selector, identity, and submission commands for terminal front ends
//! - The `retreat-relay` and `retreat` entry points
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Renders notices as plain text; holds no business rules

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::{execute, Command, CommandError, Reply};
pub use context::AppContext;
