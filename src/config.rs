//! App Configuration
//!
//! Title, log level and seed tasks, shipped as `assets/todo.json`.

use std::collections::HashSet;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::{seed_tasks, Task, TaskId};

const BUNDLED: &str = include_str!("../assets/todo.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    /// Heading shown above the list
    pub title: String,
    pub log_level: LevelFilter,
    /// Tasks present on page load
    pub seed: Vec<Task>,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            title: "Todo List".to_string(),
            log_level: LevelFilter::Info,
            seed: seed_tasks(),
        }
    }
}

impl TodoConfig {
    /// Configuration compiled into the binary
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json(BUNDLED)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for task in &self.seed {
            if !seen.insert(task.id) {
                return Err(ConfigError::DuplicateId(task.id));
            }
            if task.text.trim().is_empty() {
                return Err(ConfigError::BlankText(task.id));
            }
            if task.id == TaskId::MAX {
                return Err(ConfigError::NoFreeId(task.id));
            }
        }
        Ok(())
    }
}
