//! Task List View Component
//!
//! Renders the tasks matching the current search term.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::store::{store_visible_tasks, use_app_store};

#[component]
pub fn TaskListView() -> impl IntoView {
    let store = use_app_store();
    let visible = move || store_visible_tasks(&store);

    view! {
        <ul class="task-list">
            <For
                each=visible
                // Mutable fields are part of the key so edits re-render the row
                key=|task| (task.id, task.text.clone(), task.completed)
                children=move |task| view! { <TaskRow task=task /> }
            />
        </ul>
    }
}
