//! Availability date ranges

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{DISPLAY_DATE_FORMAT, WIRE_DATE_FORMAT};
use crate::errors::{Result, RetreatError};

/// A single arrival/departure pair.
///
/// `depart` is always strictly after `arrive`. Ranges are not checked against
/// each other, so a selection may hold overlapping ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    arrive: NaiveDate,
    depart: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    arrive: NaiveDate,
    depart: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = RetreatError;

    fn try_from(raw: RawDateRange) -> Result<Self> {
        Self::new(raw.arrive, raw.depart)
    }
}

impl DateRange {
    /// Build a range, rejecting a departure on or before the arrival.
    pub fn new(arrive: NaiveDate, depart: NaiveDate) -> Result<Self> {
        if depart <= arrive {
            return Err(RetreatError::InvalidInput(format!(
                "departure {depart} must be after arrival {arrive}"
            )));
        }
        Ok(Self { arrive, depart })
    }

    pub fn arrive(&self) -> NaiveDate {
        self.arrive
    }

    pub fn depart(&self) -> NaiveDate {
        self.depart
    }

    /// Whether `date` falls on or between the two endpoints.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.arrive && date <= self.depart
    }

    /// `YYYY-MM-DD to YYYY-MM-DD`, the segment format used in submissions.
    pub fn to_wire(&self) -> String {
        format!(
            "{} to {}",
            self.arrive.format(WIRE_DATE_FORMAT),
            self.depart.format(WIRE_DATE_FORMAT)
        )
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {}",
            self.arrive.format(DISPLAY_DATE_FORMAT),
            self.depart.format(DISPLAY_DATE_FORMAT)
        )
    }
}
