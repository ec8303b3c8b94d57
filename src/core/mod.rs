//! # Core Application Logic
//!
//! This module contains Taskaru's state machine.
//! It knows nothing about any specific terminal technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Event / Command      │
//!                    │  • update() (reducer)   │
//!                    │  • render() (view)      │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │ Task store │
//!             │  Adapter   │          │ (Dispatch) │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `ApplicationState`, the snapshot threaded through the loop
//! - [`action`]: `Event`, `Command` and the `update()` reducer
//! - [`command`]: parsing of the menu words into commands
//! - [`view`]: `render()`, state to text frame

pub mod action;
pub mod command;
pub mod state;
pub mod view;

pub use action::{Command, Event, Key, update};
pub use state::ApplicationState;
pub use view::{Frame, render};
