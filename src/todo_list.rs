//! Task List Store
//!
//! Canonical task state plus the transient selection, edit and input buffers.
//! Every operation either applies fully or leaves the list untouched; nothing
//! here panics on a stale id.

use std::collections::BTreeSet;

use log::debug;

use crate::error::StoreError;
use crate::filter::FilteredView;
use crate::models::{seed_tasks, Task, TaskId};

/// The one task currently being edited and its unsaved text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: TaskId,
    pub draft: String,
}

/// Task list with selection and edit state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    tasks: Vec<Task>,
    /// Next id to hand out; only ever grows. `None` once ids run out.
    next_id: Option<TaskId>,
    /// Pending text of the new-task input
    input: String,
    search_term: String,
    selected: BTreeSet<TaskId>,
    editing: Option<EditSession>,
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl TodoList {
    /// Build a list from already-validated seed tasks
    pub fn new(seed: Vec<Task>) -> Self {
        let next_id = match seed.iter().map(|t| t.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self {
            tasks: seed,
            next_id,
            input: String::new(),
            search_term: String::new(),
            selected: BTreeSet::new(),
            editing: None,
        }
    }

    /// List holding the default three tasks
    pub fn seeded() -> Self {
        Self::new(seed_tasks())
    }

    // ========================
    // Queries
    // ========================

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected(&self) -> &BTreeSet<TaskId> {
        &self.selected
    }

    /// Selected rows hide their edit/delete buttons
    pub fn is_selected(&self, id: TaskId) -> bool {
        self.selected.contains(&id)
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn editing_id(&self) -> Option<TaskId> {
        self.editing.as_ref().map(|e| e.id)
    }

    pub fn edit_draft(&self) -> Option<&str> {
        self.editing.as_ref().map(|e| e.draft.as_str())
    }

    /// Tasks matching `term`, case-insensitively, in list order
    pub fn filtered_view(&self, term: &str) -> FilteredView<'_> {
        FilteredView::new(&self.tasks, term)
    }

    /// Tasks matching the stored search term
    pub fn visible(&self) -> FilteredView<'_> {
        self.filtered_view(&self.search_term)
    }

    // ========================
    // Input buffers
    // ========================

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Add the pending input as a new task
    pub fn submit_input(&mut self) -> Option<TaskId> {
        let text = self.input.clone();
        self.add(&text)
    }

    // ========================
    // Operations
    // ========================

    /// Append a new task. Blank text is ignored.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        match self.try_add(text) {
            Ok(id) => Some(id),
            Err(err) => {
                debug!("ignored intent: {}", err);
                None
            }
        }
    }

    pub fn try_add(&mut self, text: &str) -> Result<TaskId, StoreError> {
        if text.trim().is_empty() {
            return Err(StoreError::BlankText);
        }
        let id = self.next_id.ok_or(StoreError::IdsExhausted)?;
        self.next_id = id.checked_add(1);
        self.tasks.push(Task::new(id, text));
        self.input.clear();
        debug!("added task {}", id);
        Ok(id)
    }

    pub fn toggle_complete(&mut self, id: TaskId) {
        if let Err(err) = self.try_toggle_complete(id) {
            debug!("ignored intent: {}", err);
        }
    }

    pub fn try_toggle_complete(&mut self, id: TaskId) -> Result<(), StoreError> {
        let task = self.task_mut(id)?;
        task.completed = !task.completed;
        debug!("task {} completed={}", id, task.completed);
        Ok(())
    }

    pub fn remove(&mut self, id: TaskId) {
        if let Err(err) = self.try_remove(id) {
            debug!("ignored intent: {}", err);
        }
    }

    pub fn try_remove(&mut self, id: TaskId) -> Result<(), StoreError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::UnknownTask(id))?;
        self.tasks.remove(index);
        self.selected.remove(&id);
        self.drop_stale_edit();
        debug!("removed task {}", id);
        Ok(())
    }

    /// Enter edit mode for `id`, replacing any other edit in progress
    pub fn begin_edit(&mut self, id: TaskId, current_text: impl Into<String>) {
        if let Err(err) = self.try_begin_edit(id, current_text) {
            debug!("ignored intent: {}", err);
        }
    }

    pub fn try_begin_edit(
        &mut self,
        id: TaskId,
        current_text: impl Into<String>,
    ) -> Result<(), StoreError> {
        if !self.contains(id) {
            return Err(StoreError::UnknownTask(id));
        }
        self.editing = Some(EditSession {
            id,
            draft: current_text.into(),
        });
        debug!("editing task {}", id);
        Ok(())
    }

    pub fn update_edit_draft(&mut self, text: impl Into<String>) {
        if let Err(err) = self.try_update_edit_draft(text) {
            debug!("ignored intent: {}", err);
        }
    }

    pub fn try_update_edit_draft(&mut self, text: impl Into<String>) -> Result<(), StoreError> {
        let session = self.editing.as_mut().ok_or(StoreError::NotEditing)?;
        session.draft = text.into();
        Ok(())
    }

    /// Write the draft into the edited task and leave edit mode
    pub fn save_edit(&mut self) {
        if let Err(err) = self.try_save_edit() {
            debug!("ignored intent: {}", err);
        }
    }

    pub fn try_save_edit(&mut self) -> Result<(), StoreError> {
        let session = self.editing.take().ok_or(StoreError::NotEditing)?;
        // edit mode is left even if the task vanished meanwhile
        let task = self.task_mut(session.id)?;
        task.text = session.draft;
        debug!("saved task {}", session.id);
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        if let Some(session) = self.editing.take() {
            debug!("cancelled edit of task {}", session.id);
        }
    }

    pub fn clear_all(&mut self) {
        self.tasks.clear();
        self.selected.clear();
        self.editing = None;
        debug!("cleared all tasks");
    }

    /// Delete every selected task
    pub fn clear_selected(&mut self) {
        let selected = std::mem::take(&mut self.selected);
        self.tasks.retain(|t| !selected.contains(&t.id));
        self.drop_stale_edit();
        debug!("cleared {} selected tasks", selected.len());
    }

    /// Row click: flips completion and selection together
    pub fn select_toggle_via_click(&mut self, id: TaskId) {
        if let Err(err) = self.try_select_toggle_via_click(id) {
            debug!("ignored intent: {}", err);
        }
    }

    pub fn try_select_toggle_via_click(&mut self, id: TaskId) -> Result<(), StoreError> {
        self.try_toggle_complete(id)?;
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
        Ok(())
    }

    /// Select every task, or nothing if everything is already selected.
    /// Completion flags are left alone.
    pub fn select_all(&mut self) {
        if self.selected.len() == self.tasks.len() {
            self.selected.clear();
        } else {
            self.selected = self.tasks.iter().map(|t| t.id).collect();
        }
        debug!("{} tasks selected", self.selected.len());
    }

    fn task_mut(&mut self, id: TaskId) -> Result<&mut Task, StoreError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::UnknownTask(id))
    }

    fn drop_stale_edit(&mut self) {
        if let Some(id) = self.editing_id() {
            if !self.contains(id) {
                self.editing = None;
            }
        }
    }
}
