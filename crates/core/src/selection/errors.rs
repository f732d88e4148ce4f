//! Selection validation errors

use chrono::NaiveDate;
use thiserror::Error;

use crate::notice::Notice;

/// A rejected selector action. Rejections never change selector state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("{date} is not selectable (choose between {earliest} and {latest})")]
    OutOfRange { date: NaiveDate, earliest: NaiveDate, latest: NaiveDate },

    #[error("Departure date must be after arrival date")]
    DepartureNotAfterArrival { arrival: NaiveDate, departure: NaiveDate },

    #[error("No pending arrival to cancel")]
    NoPendingArrival,

    #[error("No date range at position {index} (have {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl SelectionError {
    pub fn notice(&self) -> Notice {
        Notice::error(self.to_string())
    }
}
