//! Bounded selectable date window

use chrono::NaiveDate;

use super::errors::SelectionError;

/// Inclusive window of dates the selector accepts: from today through the
/// configured cutoff. Empty once today is past the cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectableWindow {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

impl SelectableWindow {
    pub fn new(earliest: NaiveDate, latest: NaiveDate) -> Self {
        Self { earliest, latest }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.earliest && date <= self.latest
    }

    pub(crate) fn check(&self, date: NaiveDate) -> Result<(), SelectionError> {
        if self.contains(date) {
            Ok(())
        } else {
            Err(SelectionError::OutOfRange { date, earliest: self.earliest, latest: self.latest })
        }
    }
}
