//! Application context - dependency injection container

use std::sync::Arc;

use retreat_core::{
    AvailabilitySelector, Clock, IdentityStore, SessionContext, SubmissionRelay,
    SubmissionService, SystemClock,
};
use retreat_domain::{Config, Result};
use retreat_infra::{FileIdentityStore, HttpSubmissionRelay};
use tracing::info;

/// Application context - holds the session, the selector, and the services
/// a front end drives.
pub struct AppContext {
    pub config: Config,
    pub session: SessionContext,
    pub selector: AvailabilitySelector,
    pub submission: SubmissionService,
    clock: Arc<dyn Clock>,
}

impl AppContext {
    /// Wire production adapters: file-backed identity, HTTP relay client,
    /// and the system clock.
    pub fn new(config: Config) -> Result<Self> {
        let store = Arc::new(FileIdentityStore::new(&config.identity.store_path));
        let relay = Arc::new(HttpSubmissionRelay::from_config(&config.client)?);

        info!(
            identity_path = %config.identity.store_path,
            relay_endpoint = %config.client.relay_endpoint,
            "application context initialised"
        );

        Ok(Self::with_parts(config, store, relay, Arc::new(SystemClock)))
    }

    /// Wire explicit adapters.
    pub fn with_parts(
        config: Config,
        store: Arc<dyn IdentityStore>,
        relay: Arc<dyn SubmissionRelay>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let session = SessionContext::new(store);
        let selector = AvailabilitySelector::new(Arc::clone(&clock), config.selector.cutoff_date);
        let submission = SubmissionService::new(relay, Arc::clone(&clock));

        Self { config, session, selector, submission, clock }
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }
}
