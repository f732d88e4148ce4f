//! File-backed identity store
//!
//! Keeps the key-value map as one JSON object on disk. Writes go to a
//! sibling temp file first and are renamed into place.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use parking_lot::Mutex;
use retreat_core::IdentityStore;
use retreat_domain::{Result, RetreatError};
use tracing::{debug, warn};

use crate::errors::InfraError;

type Entries = BTreeMap<String, String>;

/// Identity store persisted as a JSON object file.
pub struct FileIdentityStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileIdentityStore {
    /// Store rooted at `path`. The file and its parent directory are created
    /// on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), write_lock: Mutex::new(()) }
    }

    fn read_entries(&self) -> Result<Entries> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(err) => return Err(InfraError::from(err).into()),
        };

        if contents.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&contents).map_err(|err| {
            RetreatError::Storage(format!(
                "identity store {} is corrupt: {err}",
                self.path.display()
            ))
        })
    }

    fn write_entries(&self, entries: &Entries) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(InfraError::from)?;
        }

        let json = serde_json::to_string_pretty(entries).map_err(InfraError::from)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(InfraError::from)?;
        fs::rename(&tmp, &self.path).map_err(InfraError::from)?;

        debug!(path = %self.path.display(), entries = entries.len(), "identity store written");
        Ok(())
    }

    /// Read-modify-write under the lock. A corrupt file is replaced.
    fn update(&self, apply: impl FnOnce(&mut Entries)) -> Result<()> {
        let _guard = self.write_lock.lock();
        let mut entries = match self.read_entries() {
            Err(RetreatError::Storage(reason)) => {
                warn!(%reason, "replacing corrupt identity store");
                Entries::new()
            }
            other => other?,
        };
        apply(&mut entries);
        self.write_entries(&entries)
    }
}

impl IdentityStore for FileIdentityStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use retreat_core::SessionContext;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileIdentityStore::new(dir.path().join("identity.json"));
        assert_eq!(store.get("userName").unwrap(), None);
    }

    #[test]
    fn values_survive_a_new_store_instance() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("identity.json");

        FileIdentityStore::new(&path).set("userName", "Izzy").unwrap();

        let reopened = FileIdentityStore::new(&path);
        assert_eq!(reopened.get("userName").unwrap(), Some("Izzy".to_string()));

        let on_disk: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk, serde_json::json!({"userName": "Izzy"}));
    }

    #[test]
    fn remove_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let store = FileIdentityStore::new(dir.path().join("identity.json"));
        store.set("userName", "Izzy").unwrap();
        store.set("theme", "dark").unwrap();

        store.remove("userName").unwrap();
        assert_eq!(store.get("userName").unwrap(), None);
        assert_eq!(store.get("theme").unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("identity.json");
        fs::write(&path, "[not an object").unwrap();

        let store = FileIdentityStore::new(&path);
        assert!(matches!(store.get("userName"), Err(RetreatError::Storage(_))));
    }

    #[test]
    fn write_replaces_a_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("identity.json");
        fs::write(&path, "[not an object").unwrap();

        let store = FileIdentityStore::new(&path);
        store.set("userName", "Izzy").unwrap();
        assert_eq!(store.get("userName").unwrap(), Some("Izzy".to_string()));
    }

    #[test]
    fn session_round_trip_through_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("identity.json");

        let first_visit = SessionContext::new(Arc::new(FileIdentityStore::new(&path)));
        first_visit.capture(" Sam ").unwrap();

        let next_visit = SessionContext::new(Arc::new(FileIdentityStore::new(&path)));
        assert_eq!(next_visit.require().unwrap().name(), "Sam");
    }
}
