//! Shared helpers for `retreat-app` integration tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;
use retreat_app::{execute, AppContext, Command, Reply};
use retreat_core::{FixedClock, InMemoryIdentityStore, SubmissionRelay};
use retreat_domain::{Config, Result as DomainResult, RetreatError, SubmissionPayload};

/// 2025 calendar date shorthand.
pub fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).expect("valid test date")
}

/// Records payloads; fails the first `failures` calls.
#[derive(Default)]
pub struct RecordingRelay {
    failures: Mutex<usize>,
    received: Mutex<Vec<SubmissionPayload>>,
}

impl RecordingRelay {
    pub fn failing_first(failures: usize) -> Self {
        Self { failures: Mutex::new(failures), received: Mutex::default() }
    }

    pub fn received(&self) -> Vec<SubmissionPayload> {
        self.received.lock().clone()
    }
}

#[async_trait]
impl SubmissionRelay for RecordingRelay {
    async fn submit(&self, payload: &SubmissionPayload) -> DomainResult<()> {
        self.received.lock().push(payload.clone());
        let mut failures = self.failures.lock();
        if *failures > 0 {
            *failures -= 1;
            return Err(RetreatError::Network("relay responded with 500".into()));
        }
        Ok(())
    }
}

/// Context on 2025-06-01 10:00 with the default year-end cutoff, an
/// in-memory identity store, and `relay`.
pub fn context_with(name: Option<&str>, relay: Arc<RecordingRelay>) -> AppContext {
    let clock = Arc::new(FixedClock::new(date(6, 1).and_hms_opt(10, 0, 0).expect("valid time")));
    let ctx = AppContext::with_parts(
        Config::default(),
        Arc::new(InMemoryIdentityStore::new()),
        relay,
        clock,
    );
    if let Some(name) = name {
        ctx.session.capture(name).expect("capture test identity");
    }
    ctx
}

pub fn context(name: Option<&str>) -> (AppContext, Arc<RecordingRelay>) {
    let relay = Arc::new(RecordingRelay::default());
    (context_with(name, Arc::clone(&relay)), relay)
}

/// Parse and execute one line the way the terminal front end does.
pub async fn run(ctx: &mut AppContext, line: &str) -> Reply {
    match Command::parse(line) {
        Ok(Some(command)) => execute(ctx, command).await,
        Ok(None) => Reply::Lines(Vec::new()),
        Err(err) => Reply::from(err),
    }
}

/// Message of a notice reply.
pub fn message(reply: &Reply) -> &str {
    match reply {
        Reply::Notice(notice) => &notice.message,
        other => panic!("expected a notice, got {other:?}"),
    }
}

/// Lines of a multi-line reply.
pub fn lines(reply: Reply) -> Vec<String> {
    match reply {
        Reply::Lines(lines) => lines,
        other => panic!("expected lines, got {other:?}"),
    }
}
