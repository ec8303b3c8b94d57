//! # Task Store
//!
//! The collaborator `Command::Dispatch` is aimed at. Tasks live in memory
//! only and are gone when the process exits.
//!
//! Ids are handed out sequentially starting at 1 and are never reused,
//! even after a delete.

use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn is_pending(&self) -> bool {
        !self.completed
    }
}

/// Which tasks a listing shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl TaskFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Pending => task.is_pending(),
            TaskFilter::Completed => task.completed,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("task with id {0} not found")]
    NotFound(TaskId),
    #[error("task title must not be empty")]
    EmptyTitle,
    #[error("nothing to update: give a title or a description")]
    NothingToUpdate,
}

/// Operations the driver needs from a task backend.
///
/// Implementations must return promptly: they are called from the render
/// loop. Anything doing real I/O belongs behind its own thread or runtime.
pub trait TaskStore {
    /// All tasks in creation order.
    fn list_tasks(&self) -> Vec<Task>;

    /// Tasks accepted by `filter`, in creation order.
    fn list_tasks_matching(&self, filter: TaskFilter) -> Vec<Task> {
        self.list_tasks()
            .into_iter()
            .filter(|task| filter.matches(task))
            .collect()
    }

    fn add_task(&mut self, title: &str, description: Option<&str>) -> Result<TaskId, StoreError>;

    fn get_task(&self, id: TaskId) -> Option<Task>;

    /// Replace the title and/or description. At least one must be given.
    fn update_task(
        &mut self,
        id: TaskId,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<Task, StoreError>;

    fn complete_task(&mut self, id: TaskId) -> Result<Task, StoreError>;

    fn delete_task(&mut self, id: TaskId) -> Result<Task, StoreError>;
}

pub struct InMemoryTaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    fn position(&self, id: TaskId) -> Result<usize, StoreError> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

fn clean_title(title: &str) -> Result<String, StoreError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(StoreError::EmptyTitle);
    }
    Ok(title.to_string())
}

impl TaskStore for InMemoryTaskStore {
    fn list_tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    fn add_task(&mut self, title: &str, description: Option<&str>) -> Result<TaskId, StoreError> {
        let title = clean_title(title)?;

        let id = TaskId(self.next_id);
        self.next_id += 1;
        let now = Utc::now();
        self.tasks.push(Task {
            id,
            title,
            description: description.map(str::trim).unwrap_or_default().to_string(),
            completed: false,
            created_at: now,
            updated_at: now,
        });
        Ok(id)
    }

    fn get_task(&self, id: TaskId) -> Option<Task> {
        self.tasks.iter().find(|task| task.id == id).cloned()
    }

    fn update_task(
        &mut self,
        id: TaskId,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<Task, StoreError> {
        let index = self.position(id)?;
        if title.is_none() && description.is_none() {
            return Err(StoreError::NothingToUpdate);
        }
        // Validate before touching the task so a bad title changes nothing.
        let title = title.map(clean_title).transpose()?;

        let task = &mut self.tasks[index];
        if let Some(title) = title {
            task.title = title;
        }
        if let Some(description) = description {
            task.description = description.trim().to_string();
        }
        task.updated_at = Utc::now();
        Ok(task.clone())
    }

    fn complete_task(&mut self, id: TaskId) -> Result<Task, StoreError> {
        let index = self.position(id)?;
        let task = &mut self.tasks[index];
        task.completed = true;
        task.updated_at = Utc::now();
        Ok(task.clone())
    }

    fn delete_task(&mut self, id: TaskId) -> Result<Task, StoreError> {
        let index = self.position(id)?;
        Ok(self.tasks.remove(index))
    }
}
