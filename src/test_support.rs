//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;

use crate::core::action::{Event, Key};
use crate::core::view::Frame;
use crate::tui::{EventSource, EventSourceError, SessionError, TerminalSession};

/// Everything a `RecordingSession` saw, shared with the test after the
/// session itself has been moved into the driver.
#[derive(Debug, Default)]
pub struct SessionLog {
    pub enters: usize,
    pub exits: usize,
    pub frames: Vec<String>,
}

/// A terminal session that records calls instead of touching a TTY.
pub struct RecordingSession {
    log: Rc<RefCell<SessionLog>>,
    fail_enter: bool,
    fail_draw: bool,
    fail_exit: bool,
}

impl RecordingSession {
    pub fn new() -> Self {
        Self {
            log: Rc::default(),
            fail_enter: false,
            fail_draw: false,
            fail_exit: false,
        }
    }

    pub fn failing_enter() -> Self {
        Self { fail_enter: true, ..Self::new() }
    }

    pub fn failing_draw() -> Self {
        Self { fail_draw: true, ..Self::new() }
    }

    pub fn failing_exit() -> Self {
        Self { fail_exit: true, ..Self::new() }
    }

    pub fn log(&self) -> Rc<RefCell<SessionLog>> {
        Rc::clone(&self.log)
    }
}

impl TerminalSession for RecordingSession {
    fn enter(&mut self) -> Result<(), SessionError> {
        if self.fail_enter {
            return Err(SessionError::Init(io::Error::other("not a terminal")));
        }
        self.log.borrow_mut().enters += 1;
        Ok(())
    }

    fn draw(&mut self, frame: &Frame) -> Result<(), SessionError> {
        if self.fail_draw {
            return Err(SessionError::Draw(io::Error::from(io::ErrorKind::BrokenPipe)));
        }
        self.log.borrow_mut().frames.push(frame.as_str().to_string());
        Ok(())
    }

    fn exit(&mut self) -> Result<(), SessionError> {
        self.log.borrow_mut().exits += 1;
        if self.fail_exit {
            return Err(SessionError::Restore(io::Error::other("restore failed")));
        }
        Ok(())
    }
}

/// Replays a fixed list of events, then fails like a closed input stream.
pub struct ScriptedEvents {
    script: VecDeque<Result<Event, EventSourceError>>,
    pub reads: usize,
}

impl ScriptedEvents {
    pub fn new(script: impl IntoIterator<Item = Result<Event, EventSourceError>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            reads: 0,
        }
    }

    pub fn keys(keys: &str) -> Self {
        Self::new(keys.chars().map(|c| Ok(Event::KeyPress(Key::Char(c)))))
    }
}

impl EventSource for ScriptedEvents {
    fn next(&mut self) -> Result<Event, EventSourceError> {
        self.reads += 1;
        self.script
            .pop_front()
            .unwrap_or_else(|| Err(EventSourceError::Io(io::ErrorKind::UnexpectedEof.into())))
    }
}
