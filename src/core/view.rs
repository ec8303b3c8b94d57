//! # View
//!
//! `render()` turns a state into the full text of one screen. It is pure:
//! equal states give byte-identical frames, so the whole screen can be
//! asserted on in tests without a terminal.
//!
//! The menu is plain text. Nothing is highlighted and `cursor_index` is
//! not consulted.

use std::fmt;

use crate::core::command::MENU;
use crate::core::state::ApplicationState;

const RULE: &str = "==================================";

/// One fully rendered screen of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame(String);

impl Frame {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.lines()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn render(state: &ApplicationState) -> Frame {
    let title = &state.view_title;
    let mut out = format!(
        "{RULE}\n  {title} - Task Manager\n{RULE}\n\n\
         Welcome to {title} Task Manager!\n\n\
         This is your task management terminal interface.\n\n\
         Available commands:\n"
    );
    for (name, description) in MENU {
        out.push_str(&format!("  > {name:<5} - {description}\n"));
    }
    out.push_str(&format!("\n{RULE}\n\nPress any key to exit...\n\n"));

    Frame(out)
}
