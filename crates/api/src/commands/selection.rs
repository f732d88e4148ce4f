//! Selector commands

use chrono::NaiveDate;
use retreat_core::{Notice, SelectionError};
use retreat_domain::constants::DISPLAY_DATE_FORMAT;

use crate::context::AppContext;

pub fn pick_date(ctx: &mut AppContext, date: NaiveDate) -> Notice {
    match ctx.selector.select_date(date) {
        Ok(transition) => transition.notice(),
        Err(err) => err.notice(),
    }
}

pub fn cancel_selection(ctx: &mut AppContext) -> Notice {
    match ctx.selector.cancel() {
        Ok(transition) => transition.notice(),
        Err(err) => err.notice(),
    }
}

/// Remove the range at a 1-based list `position`. Position 0 names no range.
pub fn remove_range(ctx: &mut AppContext, position: usize) -> Notice {
    let Some(index) = position.checked_sub(1) else {
        let len = ctx.selector.ranges().len();
        return Notice::error(format!("There is no range #{position}; you have {len}"));
    };
    match ctx.selector.remove(index) {
        Ok(range) => Notice::info(format!("Removed {range}")),
        Err(SelectionError::IndexOutOfBounds { len, .. }) => {
            Notice::error(format!("There is no range #{position}; you have {len}"))
        }
        Err(err) => err.notice(),
    }
}

/// Numbered ranges followed by the current prompt.
pub fn list_ranges(ctx: &AppContext) -> Vec<String> {
    let selector = &ctx.selector;
    let mut lines = Vec::with_capacity(selector.ranges().len() + 2);

    if selector.ranges().is_empty() {
        lines.push("No date ranges selected yet".to_string());
    } else {
        lines.push(format!("Your date ranges ({}):", selector.ranges().len()));
        lines.extend(
            selector
                .ranges()
                .iter()
                .enumerate()
                .map(|(i, range)| format!("  {}. {}", i + 1, range)),
        );
    }

    if let Some(arrival) = selector.pending_arrival() {
        lines.push(format!("Pending arrival: {}", arrival.format(DISPLAY_DATE_FORMAT)));
    }
    lines.push(selector.prompt().to_string());
    lines
}
