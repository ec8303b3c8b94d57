use std::io;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEventKind};
use log::debug;
use thiserror::Error;

use crate::core::action::{Event, Key};
use crate::signal;

/// How often a blocked read wakes up to check for a pending signal.
const SIGNAL_CHECK_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Error)]
pub enum EventSourceError {
    #[error("terminal input failed: {0}")]
    Io(#[from] io::Error),
    #[error("interrupted by signal")]
    Interrupted,
}

/// A blocking, endless stream of input events.
pub trait EventSource {
    /// Block until the next event arrives.
    fn next(&mut self) -> Result<Event, EventSourceError>;
}

/// Reads key presses and resizes from the controlling terminal.
#[derive(Default)]
pub struct CrosstermEvents;

impl CrosstermEvents {
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for CrosstermEvents {
    fn next(&mut self) -> Result<Event, EventSourceError> {
        loop {
            if signal::is_interrupted() {
                return Err(EventSourceError::Interrupted);
            }
            if !event::poll(SIGNAL_CHECK_INTERVAL)? {
                continue;
            }
            if let Some(event) = translate(event::read()?) {
                return Ok(event);
            }
        }
    }
}

/// Maps a crossterm event onto a core event. Returns `None` for events
/// the core has no variant for (mouse, focus, paste, key releases).
fn translate(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key_event) => {
            debug!("Key event: {:?} ({:?})", key_event.code, key_event.kind);
            // Terminals with keyboard enhancement also report releases and repeats.
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            Some(Event::KeyPress(translate_key(key_event.code)))
        }
        CrosstermEvent::Resize(width, height) => Some(Event::Resize { width, height }),
        _ => None,
    }
}

fn translate_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Tab => Key::Tab,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        _ => Key::Other,
    }
}
