//! Selector states and the transition function

use chrono::NaiveDate;
use retreat_domain::constants::{NOTICE_RANGE_ADDED, NOTICE_SELECTION_CANCELLED, PROMPT_DEPARTURE};
use retreat_domain::DateRange;

use super::errors::SelectionError;
use crate::notice::Notice;

/// Where the two-click interaction currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorState {
    /// No arrival picked yet.
    #[default]
    Idle,
    /// An arrival is picked and waits for its departure.
    AwaitingDeparture { arrival: NaiveDate },
}

/// User actions that drive the state machine. Range removal is not an event
/// here because it never touches the pending arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorEvent {
    Select(NaiveDate),
    Cancel,
}

/// Effect of an accepted event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    ArrivalPending(NaiveDate),
    RangeCompleted(DateRange),
    Cancelled { discarded: NaiveDate },
}

impl SelectorState {
    /// Compute the next state for `event`.
    ///
    /// Rejections leave the caller's state untouched since `self` is `Copy`
    /// and only the returned state is ever committed.
    pub fn transition(self, event: SelectorEvent) -> Result<(Self, Transition), SelectionError> {
        match (self, event) {
            (Self::Idle, SelectorEvent::Select(date)) => {
                Ok((Self::AwaitingDeparture { arrival: date }, Transition::ArrivalPending(date)))
            }
            (Self::AwaitingDeparture { arrival }, SelectorEvent::Select(departure)) => {
                let range = DateRange::new(arrival, departure)
                    .map_err(|_| SelectionError::DepartureNotAfterArrival { arrival, departure })?;
                Ok((Self::Idle, Transition::RangeCompleted(range)))
            }
            (Self::AwaitingDeparture { arrival }, SelectorEvent::Cancel) => {
                Ok((Self::Idle, Transition::Cancelled { discarded: arrival }))
            }
            (Self::Idle, SelectorEvent::Cancel) => Err(SelectionError::NoPendingArrival),
        }
    }

    pub fn pending_arrival(&self) -> Option<NaiveDate> {
        match self {
            Self::Idle => None,
            Self::AwaitingDeparture { arrival } => Some(*arrival),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

impl Transition {
    pub fn notice(&self) -> Notice {
        match self {
            Self::ArrivalPending(_) => Notice::info(PROMPT_DEPARTURE),
            Self::RangeCompleted(_) => Notice::success(NOTICE_RANGE_ADDED),
            Self::Cancelled { .. } => Notice::info(NOTICE_SELECTION_CANCELLED),
        }
    }
}
