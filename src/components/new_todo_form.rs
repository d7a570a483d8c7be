//! New Todo Form Component
//!
//! Title input that creates a todo on the remote collection.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app_context;
use crate::store::use_todo_store;

/// Form for creating new todos
#[component]
pub fn NewTodoForm(set_error: WriteSignal<Option<String>>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();

    let (new_title, set_new_title) = signal(String::new());
    let (pending, set_pending) = signal(false);

    let client = ctx.client;
    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        if title.trim().is_empty() || pending.get() {
            return;
        }
        let client = client.clone();
        set_pending.set(true);

        spawn_local(async move {
            match actions::add_todo(store, &client, &title).await {
                Ok(_) => {
                    set_new_title.set(String::new());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(format!("Could not add todo: {}", e))),
            }
            set_pending.set(false);
        });
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                placeholder="New todo title"
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn" disabled=move || pending.get()>
                "Add"
            </button>
        </form>
    }
}
