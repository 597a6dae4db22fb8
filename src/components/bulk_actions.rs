//! Bulk Actions Component
//!
//! Select-all, clear-all and clear-selected buttons.

use leptos::prelude::*;

use crate::store::{store_clear_all, store_clear_selected, store_select_all, use_app_store, with_todos};
use crate::todo_list::TodoList;

#[component]
pub fn BulkActions() -> impl IntoView {
    let store = use_app_store();
    let has_tasks = move || with_todos(&store, |todos| !todos.is_empty());
    let has_selection = move || with_todos(&store, TodoList::has_selection);

    view! {
        <div class="bulk-actions">
            <Show when=has_tasks>
                <button class="select-all-btn" on:click=move |_| store_select_all(&store)>
                    "Select All"
                </button>
                <button class="clear-all-btn" on:click=move |_| store_clear_all(&store)>
                    "Clear All"
                </button>
            </Show>
            // Clears the selected rows, which a click also marks completed
            <Show when=has_selection>
                <button class="clear-selected-btn" on:click=move |_| store_clear_selected(&store)>
                    "Clear Completed"
                </button>
            </Show>
        </div>
    }
}
