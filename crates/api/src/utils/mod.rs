//! Shared helpers for command execution

pub mod logging;
