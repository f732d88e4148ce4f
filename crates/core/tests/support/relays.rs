//! Relay doubles for `SubmissionRelay`.

use async_trait::async_trait;
use parking_lot::Mutex;
use retreat_core::SubmissionRelay;
use retreat_domain::{Result as DomainResult, RetreatError, SubmissionPayload};

/// Records every payload and answers with a scripted outcome per call.
///
/// Once the script runs out, every further call succeeds.
#[derive(Default)]
pub struct ScriptedRelay {
    script: Mutex<Vec<DomainResult<()>>>,
    received: Mutex<Vec<SubmissionPayload>>,
}

impl ScriptedRelay {
    /// Relay that fails the first `failures` calls with a network error.
    pub fn failing_first(failures: usize) -> Self {
        let script = (0..failures)
            .map(|_| Err(RetreatError::Network("destination unreachable".into())))
            .collect();
        Self { script: Mutex::new(script), received: Mutex::default() }
    }

    pub fn received(&self) -> Vec<SubmissionPayload> {
        self.received.lock().clone()
    }
}

#[async_trait]
impl SubmissionRelay for ScriptedRelay {
    async fn submit(&self, payload: &SubmissionPayload) -> DomainResult<()> {
        self.received.lock().push(payload.clone());
        let mut script = self.script.lock();
        if script.is_empty() {
            Ok(())
        } else {
            script.remove(0)
        }
    }
}
