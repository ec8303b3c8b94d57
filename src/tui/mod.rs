//! # TUI Adapter
//!
//! The ratatui-specific layer and the driver loop that runs on top of it.
//!
//! ```text
//!   EventSource::next() ──► update(state, event) ──► Command
//!          ▲                                            │
//!          │                 Quit ──► Terminating ◄─────┤
//!          │                                            │
//!   TerminalSession::draw(render(state)) ◄── None / Dispatch
//! ```
//!
//! Every iteration renders the current state, blocks for one event, and
//! reduces it. The loop is single-threaded; the blocking read is the only
//! place it waits. Leaving the loop by any route drops the session guard,
//! which restores the terminal.
//!
//! The loop itself is generic over [`TerminalSession`], [`EventSource`] and
//! [`TaskStore`] so it can be driven without a TTY.

mod event;
mod session;
mod ui;

pub use event::{CrosstermEvents, EventSource, EventSourceError};
pub use session::{CrosstermSession, SessionError, SessionGuard, TerminalSession};

use log::{debug, error, info, warn};

use crate::config::ResolvedConfig;
use crate::core::action::{Command, update};
use crate::core::command::{MENU, TaskRequest};
use crate::core::state::ApplicationState;
use crate::core::view::render;
use crate::store::{InMemoryTaskStore, StoreError, TaskStore};

/// How the loop ended, and the process exit code that goes with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// The user asked to quit.
    Quit,
    /// An external signal stopped the loop.
    Interrupted,
    /// Drawing or reading input failed.
    Failed,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Quit => 0,
            ExitStatus::Failed => 1,
            ExitStatus::Interrupted => 130,
        }
    }
}

/// Driver loop state machine.
#[derive(Debug)]
enum Phase {
    Running(ApplicationState),
    Terminating(ExitStatus),
}

/// Run Taskaru on the real terminal until the user quits.
///
/// Only a terminal that cannot be initialized is reported as an error;
/// everything after that ends in an [`ExitStatus`].
pub fn run(config: &ResolvedConfig) -> Result<ExitStatus, SessionError> {
    let mut events = CrosstermEvents::new();
    let mut store = InMemoryTaskStore::new();
    run_loop(
        CrosstermSession::new(),
        &mut events,
        &mut store,
        ApplicationState::new(config.title.as_str()),
    )
}

/// Enter `session`, then render/read/reduce until the loop terminates.
pub fn run_loop<S, E, T>(
    session: S,
    events: &mut E,
    store: &mut T,
    initial: ApplicationState,
) -> Result<ExitStatus, SessionError>
where
    S: TerminalSession,
    E: EventSource,
    T: TaskStore,
{
    let mut guard = SessionGuard::enter(session)?;
    let mut phase = Phase::Running(initial);

    let status = loop {
        phase = match phase {
            Phase::Running(state) => step(&mut guard, events, store, state),
            Phase::Terminating(status) => break status,
        };
    };

    info!("Driver loop terminating: {:?}", status);
    drop(guard);
    Ok(status)
}

/// One render → read → reduce iteration.
fn step<S, E, T>(
    guard: &mut SessionGuard<S>,
    events: &mut E,
    store: &mut T,
    state: ApplicationState,
) -> Phase
where
    S: TerminalSession,
    E: EventSource,
    T: TaskStore,
{
    if let Err(e) = guard.draw(&render(&state)) {
        error!("{}", e);
        return Phase::Terminating(ExitStatus::Failed);
    }

    let event = match events.next() {
        Ok(event) => event,
        Err(EventSourceError::Interrupted) => {
            info!("Interrupted by signal");
            return Phase::Terminating(ExitStatus::Interrupted);
        }
        Err(e) => {
            error!("{}", e);
            return Phase::Terminating(ExitStatus::Failed);
        }
    };
    debug!("Event: {:?}", event);

    let (next, command) = update(&state, event);
    match command {
        Command::None => Phase::Running(next),
        Command::Quit => {
            info!("Quit requested");
            Phase::Terminating(ExitStatus::Quit)
        }
        Command::Dispatch(request) => {
            info!("Dispatching {:?}", request);
            match dispatch(store, &request) {
                Ok(summary) => info!("{}", summary),
                Err(e) => warn!("Dispatch of {:?} failed: {}", request, e),
            }
            Phase::Running(next)
        }
    }
}

/// Execute one request against the task store and describe the result.
pub fn dispatch<T: TaskStore>(store: &mut T, request: &TaskRequest) -> Result<String, StoreError> {
    match request {
        TaskRequest::Help => {
            let names: Vec<&str> = MENU.iter().map(|(name, _)| *name).collect();
            Ok(format!("Available commands: {}", names.join(", ")))
        }
        TaskRequest::List(filter) => {
            let tasks = store.list_tasks_matching(*filter);
            let pending = tasks.iter().filter(|task| !task.completed).count();
            Ok(format!("Total: {} task(s), {} pending", tasks.len(), pending))
        }
        TaskRequest::Add { title, description } => {
            let id = store.add_task(title, description.as_deref())?;
            Ok(format!("Task created: [{}] {}", id, title.trim()))
        }
    }
}
