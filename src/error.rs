//! Error Types
//!
//! Reasons a store intent was ignored, and config loading failures.

use crate::models::TaskId;

/// Why a store operation left the state unchanged.
///
/// Only the `try_*` operations return this; the plain operations log it and
/// carry on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("task text is blank")]
    BlankText,

    #[error("no task with id {0}")]
    UnknownTask(TaskId),

    #[error("no task is being edited")]
    NotEditing,

    #[error("no task ids left")]
    IdsExhausted,
}

/// Errors from parsing or validating a [`crate::config::TodoConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate seed task id {0}")]
    DuplicateId(TaskId),

    #[error("seed task {0} has blank text")]
    BlankText(TaskId),

    #[error("seed task id {0} leaves no id for new tasks")]
    NoFreeId(TaskId),
}
