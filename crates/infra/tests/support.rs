//! Shared helpers for `retreat-infra` integration tests.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use retreat_core::{AvailabilitySelector, Clock, FixedClock, InMemoryIdentityStore, SessionContext};
use retreat_infra::{RelayServer, RelayState, WebhookForwarder};

/// 2025 calendar date shorthand.
pub fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).expect("valid test date")
}

/// Clock frozen at 2025-06-01 09:15:00.
pub fn clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::new(date(6, 1).and_hms_opt(9, 15, 0).expect("valid time")))
}

/// Selector holding the given `(arrive, depart)` ranges, back in `Idle`.
pub fn selector_with(ranges: &[((u32, u32), (u32, u32))]) -> AvailabilitySelector {
    let mut selector = AvailabilitySelector::new(clock(), date(12, 31));
    for ((am, ad), (dm, dd)) in ranges {
        selector.select_date(date(*am, *ad)).expect("arrival accepted");
        selector.select_date(date(*dm, *dd)).expect("departure accepted");
    }
    selector
}

pub fn session(name: &str) -> SessionContext {
    let session = SessionContext::new(Arc::new(InMemoryIdentityStore::new()));
    session.capture(name).expect("capture test identity");
    session
}

/// Relay bound to an ephemeral port, forwarding to `webhook`.
pub async fn start_relay(webhook: Option<&str>) -> RelayServer {
    let forwarder =
        WebhookForwarder::new(webhook, Duration::from_secs(2)).expect("forwarder should build");
    RelayServer::start("127.0.0.1:0", RelayState::new(forwarder))
        .await
        .expect("relay should start")
}
