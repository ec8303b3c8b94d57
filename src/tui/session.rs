//! Terminal session lifecycle.
//!
//! [`SessionGuard`] enters the session on construction and exits it on
//! drop, so the terminal is restored on every path out of the driver:
//! normal quit, early `?` return, or unwinding. A panic hook installed by
//! ratatui covers panics that abort before drop runs.

use std::io;

use log::{info, warn};
use ratatui::DefaultTerminal;
use thiserror::Error;

use crate::core::view::Frame;
use crate::tui::ui;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to initialize terminal: {0}")]
    Init(#[source] io::Error),
    #[error("failed to draw frame: {0}")]
    Draw(#[source] io::Error),
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

/// A full-screen drawing surface the driver loop renders into.
pub trait TerminalSession {
    /// Switch to the alternate screen with unbuffered, unechoed input.
    fn enter(&mut self) -> Result<(), SessionError>;

    /// Replace the whole visible region with `frame`.
    fn draw(&mut self, frame: &Frame) -> Result<(), SessionError>;

    /// Put the terminal back the way `enter` found it.
    fn exit(&mut self) -> Result<(), SessionError>;
}

/// Holds an entered session and exits it exactly once, on drop.
pub struct SessionGuard<S: TerminalSession> {
    session: S,
}

impl<S: TerminalSession> SessionGuard<S> {
    pub fn enter(mut session: S) -> Result<Self, SessionError> {
        session.enter()?;
        info!("Terminal session entered");
        Ok(Self { session })
    }

    pub fn draw(&mut self, frame: &Frame) -> Result<(), SessionError> {
        self.session.draw(frame)
    }
}

impl<S: TerminalSession> Drop for SessionGuard<S> {
    fn drop(&mut self) {
        // The process is on its way out; a failed restore is only worth a log line.
        match self.session.exit() {
            Ok(()) => info!("Terminal session restored"),
            Err(e) => warn!("{}", e),
        }
    }
}

/// The real terminal: crossterm raw mode + alternate screen via ratatui.
#[derive(Default)]
pub struct CrosstermSession {
    terminal: Option<DefaultTerminal>,
}

impl CrosstermSession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TerminalSession for CrosstermSession {
    fn enter(&mut self) -> Result<(), SessionError> {
        let terminal = init_or_restore(ratatui::try_init, ratatui::try_restore)?;
        self.terminal = Some(terminal);
        Ok(())
    }

    fn draw(&mut self, frame: &Frame) -> Result<(), SessionError> {
        let Some(terminal) = self.terminal.as_mut() else {
            return Err(SessionError::Draw(io::Error::other("terminal session not entered")));
        };
        terminal
            .draw(|f| ui::draw_frame(f, frame))
            .map(|_| ())
            .map_err(SessionError::Draw)
    }

    fn exit(&mut self) -> Result<(), SessionError> {
        if self.terminal.take().is_none() {
            return Ok(());
        }
        ratatui::try_restore().map_err(SessionError::Restore)
    }
}

/// Run `init`; if it fails, undo whatever part of it already took effect.
///
/// Initialization can fail after raw mode is on (entering the alternate
/// screen, sizing the terminal). No guard exists yet at that point, so the
/// restore has to happen here.
fn init_or_restore<T>(
    init: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> Result<T, SessionError> {
    init().map_err(|e| {
        if let Err(restore_err) = restore() {
            warn!("Failed to restore terminal after init error: {}", restore_err);
        }
        SessionError::Init(e)
    })
}
