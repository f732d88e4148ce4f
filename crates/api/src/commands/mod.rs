//! Commands - line-oriented bridge between a terminal and the core services

mod calendar;
mod identity;
mod parse;
mod selection;
mod submission;

use std::time::Instant;

use retreat_core::Notice;

pub use calendar::render_month;
pub use identity::{capture_name, forget_name, saved_identity, who_am_i};
pub use parse::{Command, CommandError};
pub use selection::{cancel_selection, list_ranges, pick_date, remove_range};
pub use submission::submit_availability;

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// What a front end should show after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Notice(Notice),
    Lines(Vec<String>),
    Quit,
}

impl Reply {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Notice(notice) if notice.is_error())
    }
}

impl From<Notice> for Reply {
    fn from(notice: Notice) -> Self {
        Self::Notice(notice)
    }
}

impl From<CommandError> for Reply {
    fn from(err: CommandError) -> Self {
        Self::Notice(Notice::error(err.to_string()))
    }
}

/// Run one command against the context and log its outcome.
pub async fn execute(ctx: &mut AppContext, command: Command) -> Reply {
    let name = command.name();
    let start = Instant::now();

    let reply: Reply = match command {
        Command::Name(raw) => capture_name(ctx, &raw).into(),
        Command::Pick(date) => pick_date(ctx, date).into(),
        Command::Cancel => cancel_selection(ctx).into(),
        Command::Remove(position) => remove_range(ctx, position).into(),
        Command::List => Reply::Lines(list_ranges(ctx)),
        Command::Month(month) => Reply::Lines(render_month(ctx, month)),
        Command::Submit => submit_availability(ctx).await.into(),
        Command::WhoAmI => who_am_i(ctx).into(),
        Command::Forget => forget_name(ctx).into(),
        Command::Help => Reply::Lines(help_lines()),
        Command::Quit => Reply::Quit,
    };

    log_command_execution(name, start.elapsed(), !reply.is_error());
    reply
}

/// Command reference shown by `help`.
pub fn help_lines() -> Vec<String> {
    [
        "name <your name>     save the name your availability is submitted under",
        "pick <YYYY-MM-DD>    click a date: first arrival, then departure",
        "cancel               drop a pending arrival",
        "remove <N>           delete range N from the list",
        "list                 show your date ranges",
        "month [YYYY-MM]      show a calendar month",
        "submit               send your availability",
        "whoami               show the saved name",
        "forget               clear the saved name",
        "quit                 leave",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}
