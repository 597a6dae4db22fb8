//! UI Components
//!
//! Leptos components for the todo page. Each control calls one store helper.

mod new_task_form;
mod search_bar;
mod bulk_actions;
mod task_list_view;
mod task_row;

pub use new_task_form::NewTaskForm;
pub use search_bar::SearchBar;
pub use bulk_actions::BulkActions;
pub use task_list_view::TaskListView;
pub use task_row::TaskRow;
