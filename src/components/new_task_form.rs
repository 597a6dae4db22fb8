//! New Task Form Component
//!
//! Input for creating tasks. Enter or the button submits.

use leptos::prelude::*;

use crate::store::{store_set_input, store_submit_input, use_app_store, with_todos};

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_app_store();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_submit_input(&store);
    };

    view! {
        <form class="new-task-form" on:submit=submit>
            <input
                type="text"
                placeholder="Enter a new todo"
                prop:value=move || with_todos(&store, |todos| todos.input().to_string())
                on:input=move |ev| store_set_input(&store, event_target_value(&ev))
            />
            <button type="submit">"Add Todo"</button>
        </form>
    }
}
