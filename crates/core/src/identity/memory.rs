//! In-memory identity store

use std::collections::HashMap;

use parking_lot::RwLock;
use retreat_domain::Result;

use super::ports::IdentityStore;

/// Process-local store, lost on exit. Used for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct InMemoryIdentityStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityStore for InMemoryIdentityStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}
