//! # Events and Commands
//!
//! Everything that can happen to Taskaru becomes an `Event`.
//! Everything Taskaru wants done about it comes back as a `Command`.
//!
//! The `update()` function takes the current state and an event, then
//! returns the next state plus one command. No side effects here. The
//! driver loop executes the command.
//!
//! ```text
//! State + Event  →  update()  →  (New State, Command)
//! ```
//!
//! This makes everything testable: `assert_eq!(update(&state, event), expected)`.

use crate::core::command::TaskRequest;
use crate::core::state::ApplicationState;

/// A key as the core sees it. The TUI adapter maps terminal key codes onto this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
    /// Function keys, media keys and anything else without a dedicated variant.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    KeyPress(Key),
    Resize { width: u16, height: u16 },
    Interrupt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    Quit,
    /// Forward a parsed request to the task store.
    Dispatch(TaskRequest),
}

/// Computes the next state and the command to run for one event.
///
/// Every key quits, whichever key it is. Resize and interrupt leave the
/// state alone and ask for nothing.
pub fn update(state: &ApplicationState, event: Event) -> (ApplicationState, Command) {
    match event {
        Event::KeyPress(_) => (state.clone(), Command::Quit),
        Event::Resize { .. } => (state.clone(), Command::None),
        Event::Interrupt => (state.clone(), Command::None),
    }
}
