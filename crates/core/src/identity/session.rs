//! Session context over the identity store

use std::sync::Arc;

use retreat_domain::constants::IDENTITY_KEY;
use retreat_domain::{Identity, Result, RetreatError};
use tracing::{info, warn};

use super::ports::IdentityStore;

/// Explicit handle to the local identity.
///
/// `capture` runs on the first visit; `current` and `require` run on every
/// view after that.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn IdentityStore>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn IdentityStore>) -> Self {
        Self { store }
    }

    /// Validate and persist a display name.
    pub fn capture(&self, raw_name: &str) -> Result<Identity> {
        let identity = Identity::new(raw_name)?;
        self.store.set(IDENTITY_KEY, identity.name())?;
        info!("identity captured");
        Ok(identity)
    }

    /// Stored identity, if any. A blank stored value counts as absent.
    pub fn current(&self) -> Result<Option<Identity>> {
        let Some(raw) = self.store.get(IDENTITY_KEY)? else {
            return Ok(None);
        };
        match Identity::new(&raw) {
            Ok(identity) => Ok(Some(identity)),
            Err(_) => {
                warn!("ignoring blank stored identity");
                Ok(None)
            }
        }
    }

    /// Stored identity, or `NotFound` telling the caller to route back to
    /// name capture.
    pub fn require(&self) -> Result<Identity> {
        self.current()?.ok_or_else(|| {
            RetreatError::NotFound("no name captured yet; enter your name first".into())
        })
    }

    pub fn forget(&self) -> Result<()> {
        self.store.remove(IDENTITY_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::InMemoryIdentityStore;

    fn session() -> (SessionContext, Arc<InMemoryIdentityStore>) {
        let store = Arc::new(InMemoryIdentityStore::new());
        (SessionContext::new(store.clone()), store)
    }

    #[test]
    fn capture_trims_and_stores_under_fixed_key() {
        let (session, store) = session();
        let identity = session.capture("  Izzy ").unwrap();
        assert_eq!(identity.name(), "Izzy");
        assert_eq!(store.get("userName").unwrap(), Some("Izzy".to_string()));
        assert_eq!(session.current().unwrap(), Some(identity));
    }

    #[test]
    fn blank_capture_stores_nothing() {
        let (session, store) = session();
        assert!(matches!(session.capture("   "), Err(RetreatError::InvalidInput(_))));
        assert_eq!(store.get("userName").unwrap(), None);
    }

    #[test]
    fn require_without_identity_is_not_found() {
        let (session, _) = session();
        assert!(matches!(session.require(), Err(RetreatError::NotFound(_))));
    }

    #[test]
    fn blank_stored_value_counts_as_absent() {
        let (session, store) = session();
        store.set("userName", "  ").unwrap();
        assert_eq!(session.current().unwrap(), None);
    }

    #[test]
    fn forget_clears_identity() {
        let (session, _) = session();
        session.capture("Sam").unwrap();
        session.forget().unwrap();
        assert_eq!(session.current().unwrap(), None);
    }
}
