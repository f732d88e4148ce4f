//! Line parsing for terminal commands

use chrono::NaiveDate;
use retreat_domain::constants::WIRE_DATE_FORMAT;
use thiserror::Error;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Capture or replace the display name.
    Name(String),
    /// Click a date on the calendar.
    Pick(NaiveDate),
    Cancel,
    /// Delete a range by its 1-based list position.
    Remove(usize),
    List,
    /// Show the month containing the date, or a default month.
    Month(Option<NaiveDate>),
    Submit,
    WhoAmI,
    Forget,
    Help,
    Quit,
}

/// Why a line could not be turned into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for the list of commands")]
    Unknown(String),

    #[error("Usage: {usage}")]
    MissingArgument { usage: &'static str },

    #[error("'{value}' is not valid here. Usage: {usage}")]
    InvalidArgument { value: String, usage: &'static str },
}

const USAGE_NAME: &str = "name <your name>";
const USAGE_PICK: &str = "pick <YYYY-MM-DD>";
const USAGE_REMOVE: &str = "remove <N>";
const USAGE_MONTH: &str = "month [YYYY-MM]";

impl Command {
    /// Parse a line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "name" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument { usage: USAGE_NAME });
                }
                Self::Name(rest.to_string())
            }
            "pick" => Self::Pick(parse_date(required(rest, USAGE_PICK)?, USAGE_PICK)?),
            "cancel" => Self::Cancel,
            "remove" | "rm" => {
                let raw = required(rest, USAGE_REMOVE)?;
                match raw.parse::<usize>() {
                    Ok(position) if position > 0 => Self::Remove(position),
                    _ => {
                        return Err(CommandError::InvalidArgument {
                            value: raw.to_string(),
                            usage: USAGE_REMOVE,
                        })
                    }
                }
            }
            "list" | "ls" => Self::List,
            "month" | "cal" => {
                if rest.is_empty() {
                    Self::Month(None)
                } else {
                    Self::Month(Some(parse_date(&format!("{rest}-01"), USAGE_MONTH).map_err(
                        |_| CommandError::InvalidArgument {
                            value: rest.to_string(),
                            usage: USAGE_MONTH,
                        },
                    )?))
                }
            }
            "submit" => Self::Submit,
            "whoami" => Self::WhoAmI,
            "forget" => Self::Forget,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }

    /// Stable identifier used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Name(_) => "identity::name",
            Self::Pick(_) => "selection::pick",
            Self::Cancel => "selection::cancel",
            Self::Remove(_) => "selection::remove",
            Self::List => "selection::list",
            Self::Month(_) => "calendar::month",
            Self::Submit => "submission::submit",
            Self::WhoAmI => "identity::whoami",
            Self::Forget => "identity::forget",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }
}

fn required<'a>(rest: &'a str, usage: &'static str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument { usage })
    } else {
        Ok(rest)
    }
}

fn parse_date(raw: &str, usage: &'static str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(raw, WIRE_DATE_FORMAT)
        .map_err(|_| CommandError::InvalidArgument { value: raw.to_string(), usage })
}
