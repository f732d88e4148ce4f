//! Shared test helpers for `retreat-core` integration tests.
//!
//! These helpers provide lightweight relay doubles and fixtures so the
//! workflow tests can focus on behaviour instead of boilerplate.

pub mod relays;

use std::sync::Arc;

use chrono::NaiveDate;
use retreat_core::{AvailabilitySelector, Clock, FixedClock, InMemoryIdentityStore, SessionContext};

/// 2025 calendar date shorthand.
pub fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).expect("valid test date")
}

/// Clock frozen at 2025-06-01 14:30:00 local time.
pub fn clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::new(date(6, 1).and_hms_opt(14, 30, 0).expect("valid time")))
}

/// Selector bounded by the default 2025 year-end cutoff.
pub fn selector(clock: Arc<dyn Clock>) -> AvailabilitySelector {
    AvailabilitySelector::new(clock, date(12, 31))
}

/// Session with an in-memory store, optionally pre-populated.
pub fn session(name: Option<&str>) -> SessionContext {
    let session = SessionContext::new(Arc::new(InMemoryIdentityStore::new()));
    if let Some(name) = name {
        session.capture(name).expect("capture test identity");
    }
    session
}
