//! Search Bar Component

use leptos::prelude::*;

use crate::store::{store_set_search, use_app_store, with_todos};

/// Case-insensitive filter over the task list
#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <input
            type="text"
            class="search-input"
            placeholder="Search todos"
            prop:value=move || with_todos(&store, |todos| todos.search_term().to_string())
            on:input=move |ev| store_set_search(&store, event_target_value(&ev))
        />
    }
}
