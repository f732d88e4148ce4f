//! Submission payload sent through the relay

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{DateRange, Identity};
use crate::constants::{AVAILABILITY_SEPARATOR, WIRE_TIMESTAMP_FORMAT};

/// Snapshot of one person's availability at submit time.
///
/// Built once, transmitted, and discarded. Field names match the webhook's
/// expected camelCase keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    name: String,
    availability: String,
    total_ranges: usize,
    submission_date: String,
}

impl SubmissionPayload {
    /// Summarize `ranges` in sequence order for `identity`, stamped with the
    /// local wall-clock time `submitted_at`.
    pub fn build(identity: &Identity, ranges: &[DateRange], submitted_at: NaiveDateTime) -> Self {
        let availability = ranges
            .iter()
            .map(DateRange::to_wire)
            .collect::<Vec<_>>()
            .join(AVAILABILITY_SEPARATOR);

        Self {
            name: identity.name().to_string(),
            availability,
            total_ranges: ranges.len(),
            submission_date: submitted_at.format(WIRE_TIMESTAMP_FORMAT).to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn availability(&self) -> &str {
        &self.availability
    }

    pub fn total_ranges(&self) -> usize {
        self.total_ranges
    }

    pub fn submission_date(&self) -> &str {
        &self.submission_date
    }
}
