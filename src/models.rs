//! Frontend Models
//!
//! Task data structure and the seed list shown on first load.

use serde::{Deserialize, Serialize};

/// Task identifier, stable for the task's lifetime and never reused
pub type TaskId = u32;

/// A single todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Case-insensitive substring match against the task text.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.text.to_lowercase().contains(needle)
    }
}

/// Tasks present when the page is opened
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task::new(1, "Add your tasks"),
        Task::new(2, "Mark the completed tasks"),
        Task::new(3, "Clear the selected tasks"),
    ]
}
