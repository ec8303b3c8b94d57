//! External interrupt handling.
//!
//! SIGINT, SIGTERM and SIGHUP only set a flag here. The terminal event
//! source polls the flag and turns it into an error, so the normal
//! shutdown path (and terminal restore) runs.
//!
//! In raw mode Ctrl+C arrives as a key press, not as SIGINT.

use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Registers the signal handler. Call once, before entering the terminal.
pub fn init() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(trigger)
}

/// Marks the process as interrupted.
pub fn trigger() {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Checks if an interrupt has been requested.
pub fn is_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

#[cfg(test)]
pub(crate) fn reset() {
    INTERRUPTED.store(false, Ordering::SeqCst);
}

/// Serializes tests that set or read the process-wide flag.
#[cfg(test)]
pub(crate) fn test_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
