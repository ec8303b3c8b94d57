//! # Application State
//!
//! The per-frame snapshot the driver loop threads through `update()`.
//! No terminal types in here. Presentation lives in the `tui` module.
//!
//! ```text
//! ApplicationState
//! ├── view_title: String     // shown in the banner
//! └── cursor_index: usize    // selection in the displayed list
//! ```
//!
//! A state is never mutated in place by the loop. `update()` hands back
//! the next one, and the loop adopts it.

/// Title used when nothing else is configured.
pub const DEFAULT_TITLE: &str = "Taskaru";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationState {
    pub view_title: String,
    /// Always a valid index into the displayed list. An empty list keeps
    /// this at 0 and it is never dereferenced.
    pub cursor_index: usize,
}

impl ApplicationState {
    pub fn new(view_title: impl Into<String>) -> Self {
        Self {
            view_title: view_title.into(),
            cursor_index: 0,
        }
    }

    /// Returns a copy with the cursor moved to `index`, clamped to a list of `len` items.
    pub fn with_cursor(&self, index: usize, len: usize) -> Self {
        Self {
            view_title: self.view_title.clone(),
            cursor_index: index.min(len.saturating_sub(1)),
        }
    }
}

impl Default for ApplicationState {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}
