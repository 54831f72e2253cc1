// --- File: crates/services/slotbook_client/src/command.rs ---
use chrono::NaiveDate;
use slotbook_common::{calendar::parse_date, SlotId};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  date YYYY-MM-DD   pick the date to book on
  clear             clear the date
  click <id>        select or deselect a slot
  book              book the selected slot
  refresh           reload availability for the date
  show              print the slots
  help              print this text
  quit              leave";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Date(NaiveDate),
    ClearDate,
    Click(SlotId),
    Book,
    Refresh,
    Show,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}', type 'help' for a list")]
    Unknown(String),

    #[error("'{0}' needs an argument, type 'help' for usage")]
    MissingArgument(&'static str),

    #[error("{0}")]
    InvalidDate(String),
}

/// Parses a line; `Ok(None)` for a blank line.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let argument = words.next();

    let command = match verb.to_ascii_lowercase().as_str() {
        "date" => {
            let raw = argument.ok_or(CommandError::MissingArgument("date"))?;
            let date = parse_date(raw).map_err(|e| CommandError::InvalidDate(e.to_string()))?;
            Command::Date(date)
        }
        "clear" => Command::ClearDate,
        "click" | "select" => {
            let id = argument.ok_or(CommandError::MissingArgument("click"))?;
            Command::Click(SlotId::new(id))
        }
        "book" => Command::Book,
        "refresh" => Command::Refresh,
        "show" | "ls" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}
