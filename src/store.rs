/*
[INPUT]:  Task fields from the presentation shell (already format-validated)
[OUTPUT]: In-memory ordered task collection with a chronologically sorted view
[POS]:    Domain layer - the task store
[UPDATE]: When changing task fields, ordering, or store operations
*/

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;
use uuid::Uuid;

/// Stable identifier generated for every task at creation.
///
/// Storage positions shift on removal and the sorted view reorders freely, so
/// the shell tracks selections by id and resolves them back to a storage
/// position with [`TaskStore::position_of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single to-do entry. Lives for the session only; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub completed: bool,
}

impl Task {
    /// Combined chronological sort key.
    pub fn scheduled_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    pub fn status_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "Pending" }
    }
}

/// Errors produced by store operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Rejected task fields (empty title)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Storage position does not exist
    #[error("index {index} out of range for store of {len} tasks")]
    OutOfRange { index: usize, len: usize },
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// In-memory ordered collection of all tasks for the session.
///
/// Insertion order is the storage order; the display order is computed by
/// [`TaskStore::list_sorted`]. Mutating operations address tasks by storage
/// position, never by sorted position.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new pending task and returns its generated id.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<TaskId> {
        let title = title.into();
        if title.is_empty() {
            return Err(StoreError::InvalidInput("title cannot be empty".into()));
        }

        let task = Task {
            id: TaskId::new(),
            title,
            description: description.into(),
            date,
            time,
            completed: false,
        };
        let id = task.id;
        tracing::info!(id = %id, title = %task.title, scheduled_at = %task.scheduled_at(), "task added");
        self.tasks.push(task);
        Ok(id)
    }

    /// Returns a fresh sequence of all tasks ascending by (date, time).
    ///
    /// The sort is stable, so tasks sharing a schedule keep insertion order.
    pub fn list_sorted(&self) -> Vec<Task> {
        let mut sorted = self.tasks.clone();
        sorted.sort_by_key(Task::scheduled_at);
        sorted
    }

    /// Marks the task at the given storage position as completed.
    ///
    /// Completion is one-way; there is no operation flipping a task back to
    /// pending.
    pub fn complete(&mut self, index: usize) -> Result<()> {
        let len = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(StoreError::OutOfRange { index, len })?;
        task.completed = true;
        tracing::info!(id = %task.id, title = %task.title, "task completed");
        Ok(())
    }

    /// Deletes the task at the given storage position and returns it.
    pub fn remove(&mut self, index: usize) -> Result<Task> {
        if index >= self.tasks.len() {
            return Err(StoreError::OutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        let task = self.tasks.remove(index);
        tracing::info!(id = %task.id, title = %task.title, "task removed");
        Ok(task)
    }

    /// Storage position of the task with the given id, if still present.
    pub fn position_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Tasks in storage (insertion) order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
