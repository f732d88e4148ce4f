//! Availability selection
//!
//! A two-click date range picker expressed as an explicit state machine.

pub mod errors;
pub mod selector;
pub mod state;
pub mod window;

pub use errors::SelectionError;
pub use selector::AvailabilitySelector;
pub use state::{SelectorEvent, SelectorState, Transition};
pub use window::SelectableWindow;
