//! # Menu Commands
//!
//! Parses the command words shown in the menu (`help`, `list`, `add`,
//! `quit`) into a [`Command`]. Nothing feeds typed text into this yet;
//! the parser is the seam the task store will be reached through.

use crate::core::action::Command;
use crate::store::TaskFilter;

/// A request for the task store, carried by `Command::Dispatch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskRequest {
    Help,
    List(TaskFilter),
    Add {
        title: String,
        description: Option<String>,
    },
}

/// The four menu entries, in display order, with their descriptions.
pub const MENU: [(&str, &str); 4] = [
    ("help", "Show available commands"),
    ("list", "List tasks"),
    ("add", "Add a new task"),
    ("quit", "Exit the application"),
];

/// Parses one line of command text.
///
/// The first word picks the command, case-insensitively.
///
/// - `list [pending|completed]` (also `--pending`/`-p`, `--completed`/`-c`)
/// - `add <title> [-- <description>]`, ignored without a title
///
/// An unknown `list` filter makes the whole line unrecognized.
pub fn parse_command(text: &str) -> Command {
    let text = text.trim();
    let (word, rest) = match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "help" => Command::Dispatch(TaskRequest::Help),
        "list" => match parse_filter(rest) {
            Some(filter) => Command::Dispatch(TaskRequest::List(filter)),
            None => Command::None,
        },
        "add" => parse_add(rest).map_or(Command::None, Command::Dispatch),
        "quit" => Command::Quit,
        _ => Command::None,
    }
}

fn parse_filter(arg: &str) -> Option<TaskFilter> {
    match arg.to_ascii_lowercase().as_str() {
        "" | "all" => Some(TaskFilter::All),
        "pending" | "--pending" | "-p" => Some(TaskFilter::Pending),
        "completed" | "--completed" | "-c" => Some(TaskFilter::Completed),
        _ => None,
    }
}

fn parse_add(rest: &str) -> Option<TaskRequest> {
    let (title, description) = match rest.split_once("--") {
        Some((title, description)) => (title.trim(), Some(description.trim())),
        None => (rest, None),
    };
    if title.is_empty() {
        return None;
    }
    Some(TaskRequest::Add {
        title: title.to_string(),
        description: description.filter(|d| !d.is_empty()).map(str::to_string),
    })
}
