//! Todo List App
//!
//! Main application component: heading, input, search, bulk actions and list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{BulkActions, NewTaskForm, SearchBar, TaskListView};
use crate::config::TodoConfig;
use crate::store::{store_title, use_app_store, with_todos, AppState};

#[component]
pub fn App(config: TodoConfig) -> impl IntoView {
    // Provide the store to all children
    provide_context(Store::new(AppState::new(config)));
    let store = use_app_store();

    view! {
        <main class="todo-app">
            <h1 class="todo-title">{move || store_title(&store)}</h1>

            <NewTaskForm />
            <SearchBar />
            <BulkActions />
            <TaskListView />

            <Show when=move || with_todos(&store, |todos| todos.is_empty())>
                <p class="empty-state">"No todos found."</p>
            </Show>
        </main>
    }
}
