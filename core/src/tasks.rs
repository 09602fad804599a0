//! Task List Types
//!
//! The ordered collection of session tasks. Insertion order is display
//! order. Tasks carry a stable incrementing id so deletion is an explicit
//! remove-by-id operation, independent of any rendering layer - surfaces
//! never hold positional references into the list.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable task identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl TaskId {
    /// Get the numeric value.
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "task_{}", self.0)
    }
}

/// Error when adding a task fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TaskError {
    /// Submitted text was empty or whitespace-only after trimming.
    #[error("task text is empty")]
    EmptyText,
}

/// A single task list entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable identifier.
    pub id: TaskId,
    /// Task text, trimmed of surrounding whitespace, never empty.
    pub text: String,
    /// When the task was created (Unix timestamp ms).
    pub created_at: i64,
}

/// Ordered task collection.
///
/// The list is the sole owner of its tasks. Ids are handed out from an
/// incrementing counter and never reused within a session.
#[derive(Clone, Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskList {
    /// Create an empty task list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task from raw input.
    ///
    /// The input is trimmed; empty or whitespace-only input is rejected
    /// without mutating the list. On success the stored task is returned.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::EmptyText`] when the trimmed input is empty.
    pub fn add(&mut self, raw: &str) -> Result<Task, TaskError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(TaskError::EmptyText);
        }

        let id = TaskId(self.next_id);
        self.next_id += 1;

        let task = Task {
            id,
            text: text.to_string(),
            created_at: chrono::Utc::now().timestamp_millis(),
        };
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Remove the task with the given id, returning it if it was present.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(index))
    }

    /// Look up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Iterate tasks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Number of tasks in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
