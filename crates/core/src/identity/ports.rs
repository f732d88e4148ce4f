//! Port interfaces for the local identity store
//!
//! The store is a small key-value map owned by the local device. Nothing in
//! it is ever synced to a server.

use retreat_domain::Result;

/// Key-value persistence for identity data
pub trait IdentityStore: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key` if present
    fn remove(&self, key: &str) -> Result<()>;
}
