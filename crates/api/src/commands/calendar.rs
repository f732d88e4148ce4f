//! Month grid rendering
//!
//! Cells: `[dd]` inside a recorded range, `<dd>` pending arrival, ` dd `
//! selectable, `  · ` outside the selectable window.

use chrono::{Datelike, NaiveDate};

use crate::context::AppContext;

const WEEKDAY_HEADER: &str = " Mo  Tu  We  Th  Fr  Sa  Su";
const LEGEND: &str = "[dd] selected   <dd> arrival   · unavailable";

/// Render the month containing `month`, or the pending arrival's month, or
/// the current month.
pub fn render_month(ctx: &AppContext, month: Option<NaiveDate>) -> Vec<String> {
    let anchor = month
        .or_else(|| ctx.selector.pending_arrival())
        .unwrap_or_else(|| ctx.clock().today());

    let Some(first) = anchor.with_day(1) else {
        return vec![format!("Cannot render month for {anchor}")];
    };

    let mut lines = vec![format!("{:^27}", first.format("%B %Y").to_string()), WEEKDAY_HEADER.into()];

    let lead = first.weekday().num_days_from_monday() as usize;
    let mut row: Vec<String> = vec!["    ".to_string(); lead];

    for day in first.iter_days().take_while(|day| day.month() == first.month()) {
        row.push(cell(ctx, day));
        if row.len() == 7 {
            lines.push(row.concat().trim_end().to_string());
            row.clear();
        }
    }
    if !row.is_empty() {
        lines.push(row.concat().trim_end().to_string());
    }

    lines.push(LEGEND.to_string());
    lines.push(ctx.selector.prompt().to_string());
    lines
}

fn cell(ctx: &AppContext, day: NaiveDate) -> String {
    let selector = &ctx.selector;
    let n = day.day();
    if selector.is_pending(day) {
        format!("<{n:>2}>")
    } else if selector.is_highlighted(day) {
        format!("[{n:>2}]")
    } else if selector.is_selectable(day) {
        format!(" {n:>2} ")
    } else {
        "  · ".to_string()
    }
}
