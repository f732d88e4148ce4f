//! Availability selector component

use std::sync::Arc;

use chrono::NaiveDate;
use retreat_domain::constants::{PROMPT_ARRIVAL, PROMPT_DEPARTURE};
use retreat_domain::DateRange;
use tracing::debug;

use super::errors::SelectionError;
use super::state::{SelectorEvent, SelectorState, Transition};
use super::window::SelectableWindow;
use crate::clock::Clock;

/// Accumulates date ranges through a two-click interaction.
///
/// Ranges keep insertion order, which is also the order used for display,
/// removal by index, and the submission summary. Overlapping ranges are
/// accepted as-is.
#[derive(Debug)]
pub struct AvailabilitySelector {
    ranges: Vec<DateRange>,
    state: SelectorState,
    cutoff: NaiveDate,
    clock: Arc<dyn Clock>,
}

impl AvailabilitySelector {
    /// Create an idle selector with no ranges. Dates after `cutoff` are never
    /// selectable.
    pub fn new(clock: Arc<dyn Clock>, cutoff: NaiveDate) -> Self {
        Self { ranges: Vec::new(), state: SelectorState::Idle, cutoff, clock }
    }

    pub fn state(&self) -> SelectorState {
        self.state
    }

    pub fn ranges(&self) -> &[DateRange] {
        &self.ranges
    }

    pub fn pending_arrival(&self) -> Option<NaiveDate> {
        self.state.pending_arrival()
    }

    /// Today (local) through the cutoff.
    pub fn window(&self) -> SelectableWindow {
        SelectableWindow::new(self.clock.today(), self.cutoff)
    }

    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        self.window().contains(date)
    }

    /// Handle a click on `date`.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<Transition, SelectionError> {
        self.window().check(date)?;
        self.apply(SelectorEvent::Select(date))
    }

    /// Drop the pending arrival without recording a range.
    pub fn cancel(&mut self) -> Result<Transition, SelectionError> {
        self.apply(SelectorEvent::Cancel)
    }

    /// Delete the range at `index`. Valid in any state; the pending arrival
    /// is left alone.
    pub fn remove(&mut self, index: usize) -> Result<DateRange, SelectionError> {
        if index >= self.ranges.len() {
            return Err(SelectionError::IndexOutOfBounds { index, len: self.ranges.len() });
        }
        let removed = self.ranges.remove(index);
        debug!(index, remaining = self.ranges.len(), "date range removed");
        Ok(removed)
    }

    /// Instruction for the next click.
    pub fn prompt(&self) -> &'static str {
        match self.state {
            SelectorState::Idle => PROMPT_ARRIVAL,
            SelectorState::AwaitingDeparture { .. } => PROMPT_DEPARTURE,
        }
    }

    /// Whether `date` lies inside any recorded range.
    pub fn is_highlighted(&self, date: NaiveDate) -> bool {
        self.ranges.iter().any(|range| range.contains(date))
    }

    pub fn is_pending(&self, date: NaiveDate) -> bool {
        self.pending_arrival() == Some(date)
    }

    fn apply(&mut self, event: SelectorEvent) -> Result<Transition, SelectionError> {
        let (next, transition) = self.state.transition(event)?;
        if let Transition::RangeCompleted(range) = transition {
            self.ranges.push(range);
        }
        debug!(from = ?self.state, to = ?next, "selector transition");
        self.state = next;
        Ok(transition)
    }
}
