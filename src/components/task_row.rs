//! Task Row Component
//!
//! A single task. Clicking the row completes and selects it; selected rows
//! hide their edit and delete buttons.

use leptos::prelude::*;

use crate::models::Task;
use crate::store::{
    store_begin_edit, store_cancel_edit, store_click_task, store_remove_task, store_save_edit,
    store_update_draft, use_app_store, with_todos,
};

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let store = use_app_store();

    let id = task.id;
    let completed = task.completed;
    let text = StoredValue::new(task.text);

    let is_editing = move || with_todos(&store, |todos| todos.editing_id() == Some(id));
    let is_selected = move || with_todos(&store, |todos| todos.is_selected(id));

    let row_class = move || {
        let mut c = String::from("task-row");
        if completed { c.push_str(" completed"); }
        if is_selected() { c.push_str(" selected"); }
        c
    };

    let editor = move || view! {
        <input
            type="text"
            class="edit-input"
            prop:value=move || with_todos(&store, |todos| todos.edit_draft().unwrap_or_default().to_string())
            on:click=|ev| ev.stop_propagation()
            on:input=move |ev| store_update_draft(&store, event_target_value(&ev))
        />
        <button class="save-btn" on:click=move |ev| {
            ev.stop_propagation();
            store_save_edit(&store);
        }>
            "Save"
        </button>
        <button class="cancel-btn" on:click=move |ev| {
            ev.stop_propagation();
            store_cancel_edit(&store);
        }>
            "Cancel"
        </button>
    };

    let actions = move || (!is_selected()).then(|| view! {
        <div class="task-actions">
            <button class="edit-btn" title="edit" on:click=move |ev| {
                ev.stop_propagation();
                store_begin_edit(&store, id, text.get_value());
            }>
                "✎"
            </button>
            <button class="delete-btn" title="delete" on:click=move |ev| {
                ev.stop_propagation();
                store_remove_task(&store, id);
            }>
                "🗑"
            </button>
        </div>
    });

    let display = move || view! {
        <div class="task-display">
            <span class="task-text" title=text.get_value()>{text.get_value()}</span>
            {actions}
        </div>
    };

    view! {
        <li class=row_class on:click=move |_| store_click_task(&store, id)>
            {move || if is_editing() { editor().into_any() } else { display().into_any() }}
        </li>
    }
}
