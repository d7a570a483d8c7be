//! Todo Row Component
//!
//! One list entry: completion toggle, title link or inline editor, and
//! edit/delete controls.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use todo_api::{ApiError, Todo};

use crate::actions;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::store::use_todo_store;

/// A single todo row in the list
#[component]
pub fn TodoRow(
    todo: Todo,
    editing_id: ReadSignal<Option<u32>>,
    set_editing_id: WriteSignal<Option<u32>>,
    set_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();

    let id = todo.id;
    let completed = todo.completed;
    let href = format!("/todo/{}", id);
    let row_class = if completed { "todo-row completed" } else { "todo-row" };
    let todo = StoredValue::new(todo);
    let client = StoredValue::new(ctx.client);

    let (edit_title, set_edit_title) = signal(String::new());
    // The box follows this signal, not the DOM, so a failed PUT can put it back
    let (checked, set_checked) = signal(completed);
    let (toggling, set_toggling) = signal(false);
    let (deleting, set_deleting) = signal(false);
    let is_editing = move || editing_id.get() == Some(id);

    let start_edit = move |_: web_sys::MouseEvent| {
        set_edit_title.set(todo.with_value(|t| t.title.clone()));
        set_editing_id.set(Some(id));
    };

    let save = Callback::new(move |_: ()| {
        let title = edit_title.get_untracked().trim().to_string();
        if title.is_empty() {
            set_error.set(Some("Title must not be empty".to_string()));
            return;
        }
        let edited = todo.with_value(|t| t.with_title(title));
        let client = client.get_value();
        spawn_local(async move {
            match actions::save_todo(store, &client, edited).await {
                Ok(_) => {
                    set_editing_id.set(None);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(format!("Could not save todo #{}: {}", id, e))),
            }
        });
    });

    let toggle = move |_: web_sys::Event| {
        if toggling.get_untracked() {
            return;
        }
        let toggled = todo.with_value(|t| t.toggled());
        let client = client.get_value();
        set_toggling.set(true);
        set_checked.set(toggled.completed);
        spawn_local(async move {
            let result = actions::save_todo(store, &client, toggled).await;
            set_checked.set(checkbox_after_save(completed, &result));
            match result {
                Ok(_) => set_error.set(None),
                Err(e) => set_error.set(Some(format!("Could not update todo #{}: {}", id, e))),
            }
            set_toggling.set(false);
        });
    };

    let delete = Callback::new(move |_: ()| {
        if deleting.get_untracked() {
            return;
        }
        let client = client.get_value();
        set_deleting.set(true);
        spawn_local(async move {
            match actions::delete_todo(store, &client, id).await {
                Ok(()) => {
                    if editing_id.get_untracked() == Some(id) {
                        set_editing_id.set(None);
                    }
                    set_error.set(None);
                }
                Err(e) => {
                    set_error.set(Some(format!("Could not delete todo #{}: {}", id, e)));
                    set_deleting.set(false);
                }
            }
        });
    });

    view! {
        <li class=row_class>
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                disabled=move || toggling.get()
                on:change=toggle
            />

            <div class="todo-title">
                {move || if is_editing() {
                    view! {
                        <input
                            type="text"
                            class="edit-input"
                            prop:value=move || edit_title.get()
                            on:input=move |ev| set_edit_title.set(event_target_value(&ev))
                            on:keydown=move |ev| {
                                match ev.key().as_str() {
                                    "Enter" => save.run(()),
                                    "Escape" => set_editing_id.set(None),
                                    _ => {}
                                }
                            }
                        />
                    }.into_any()
                } else {
                    let title = todo.with_value(|t| t.title.clone());
                    view! { <A href=href.clone()>{title}</A> }.into_any()
                }}
            </div>

            <div class="todo-actions">
                {move || if is_editing() {
                    view! {
                        <span class="edit-controls">
                            <button class="save-btn" on:click=move |_| save.run(())>"Save"</button>
                            <button class="cancel-btn" on:click=move |_| set_editing_id.set(None)>"Cancel"</button>
                        </span>
                    }.into_any()
                } else {
                    view! { <button class="edit-btn" on:click=start_edit>"Edit"</button> }.into_any()
                }}
                <DeleteConfirmButton deleting=deleting on_confirm=delete />
            </div>
        </li>
    }
}

/// Completion shown once a toggle's PUT settles: the server's value on
/// success, the cached value otherwise.
fn checkbox_after_save(cached: bool, result: &Result<Todo, ApiError>) -> bool {
    match result {
        Ok(updated) => updated.completed,
        Err(_) => cached,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_toggle_restores_cached_state() {
        let failed: Result<Todo, ApiError> = Err(ApiError::Status {
            status: 500,
            url: "http://localhost/todos/201".to_string(),
        });
        assert!(!checkbox_after_save(false, &failed));
        assert!(checkbox_after_save(true, &failed));
    }

    #[test]
    fn test_successful_toggle_follows_server() {
        let saved = Ok(Todo::new(3, "fugiat veniam minus").toggled());
        assert!(checkbox_after_save(false, &saved));
    }
}
