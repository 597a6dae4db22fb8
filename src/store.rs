//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Components never
//! touch the task list directly; they go through the helpers below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::TodoConfig;
use crate::models::{Task, TaskId};
use crate::todo_list::TodoList;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Page heading
    pub title: String,
    /// Tasks plus selection, edit and input buffers
    pub todos: TodoList,
}

impl AppState {
    pub fn new(config: TodoConfig) -> Self {
        Self {
            title: config.title,
            todos: TodoList::new(config.seed),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Read Helpers
// ========================

/// Tracked read of the task list
pub fn with_todos<R>(store: &AppStore, f: impl FnOnce(&TodoList) -> R) -> R {
    f(&*store.todos().read())
}

pub fn store_title(store: &AppStore) -> String {
    store.title().get()
}

/// Tasks matching the current search term
pub fn store_visible_tasks(store: &AppStore) -> Vec<Task> {
    with_todos(store, |todos| todos.visible().cloned().collect())
}

// ========================
// Store Write Helpers
// ========================

pub fn store_set_input(store: &AppStore, text: String) {
    store.todos().write().set_input(text);
}

/// Add the pending input as a task
pub fn store_submit_input(store: &AppStore) {
    store.todos().write().submit_input();
}

pub fn store_set_search(store: &AppStore, term: String) {
    store.todos().write().set_search_term(term);
}

/// Row click: complete + select
pub fn store_click_task(store: &AppStore, id: TaskId) {
    store.todos().write().select_toggle_via_click(id);
}

pub fn store_remove_task(store: &AppStore, id: TaskId) {
    store.todos().write().remove(id);
}

pub fn store_begin_edit(store: &AppStore, id: TaskId, text: String) {
    store.todos().write().begin_edit(id, text);
}

pub fn store_update_draft(store: &AppStore, text: String) {
    store.todos().write().update_edit_draft(text);
}

pub fn store_save_edit(store: &AppStore) {
    store.todos().write().save_edit();
}

pub fn store_cancel_edit(store: &AppStore) {
    store.todos().write().cancel_edit();
}

pub fn store_clear_all(store: &AppStore) {
    store.todos().write().clear_all();
}

pub fn store_clear_selected(store: &AppStore) {
    store.todos().write().clear_selected();
}

pub fn store_select_all(store: &AppStore) {
    store.todos().write().select_all();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_from_config() {
        let config = TodoConfig {
            title: "Groceries".to_string(),
            seed: vec![Task::new(10, "Eggs")],
            ..TodoConfig::default()
        };
        let state = AppState::new(config);

        assert_eq!(state.title, "Groceries");
        assert_eq!(state.todos.tasks(), &[Task::new(10, "Eggs")]);
    }

    #[test]
    fn test_helpers_mutate_store() {
        let store: AppStore = Store::new(AppState::new(TodoConfig::default()));

        store_set_input(&store, "Buy milk".to_string());
        store_submit_input(&store);
        store_click_task(&store, 2);
        store_set_search(&store, "MILK".to_string());

        let visible = store_visible_tasks(&store);
        assert_eq!(visible, vec![Task::new(4, "Buy milk")]);
        assert!(with_todos(&store, |todos| todos.is_selected(2)));

        store_clear_selected(&store);
        assert!(with_todos(&store, |todos| todos.get(2).is_none()));
        assert_eq!(store_title(&store), "Todo List");
    }
}
