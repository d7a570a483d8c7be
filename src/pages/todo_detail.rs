//! Todo Detail Page
//!
//! Shows a single record, from the list cache when it holds one.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use todo_api::{parse_id, Todo};
use tracing::debug;

use crate::actions;
use crate::context::use_app_context;
use crate::store::use_todo_store;

#[derive(Clone, Debug, PartialEq)]
enum DetailState {
    Loading,
    Found(Todo),
    NotFound,
    Failed,
}

#[component]
pub fn TodoDetail() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();
    let params = use_params_map();

    let (state, set_state) = signal(DetailState::Loading);

    // Reload whenever the :id segment changes
    let client = ctx.client;
    Effect::new(move |_| {
        let raw_id = params.with(|p| p.get("id")).unwrap_or_default();
        let client = client.clone();
        set_state.set(DetailState::Loading);

        spawn_local(async move {
            let next = match parse_id(&raw_id) {
                Err(e) => {
                    debug!(error = %e, "Bad todo id in route");
                    DetailState::NotFound
                }
                Ok(id) => match actions::fetch_todo(store, &client, id).await {
                    Ok(Some(todo)) => DetailState::Found(todo),
                    Ok(None) => DetailState::NotFound,
                    Err(_) => DetailState::Failed,
                },
            };
            // A newer :id may have been routed to while this one was in flight,
            // or the page may be gone entirely
            let Some(current_id) = params.try_with_untracked(|p| p.get("id")) else {
                return;
            };
            if is_current_request(current_id.as_deref(), &raw_id) {
                set_state.set(next);
            }
        });
    });

    view! {
        <div class="todo-detail">
            {move || match state.get() {
                DetailState::Loading => view! { <p class="status">"Loading todo..."</p> }.into_any(),
                DetailState::Failed => view! { <p class="status error">"Error loading todo"</p> }.into_any(),
                DetailState::NotFound => view! { <p class="status error">"Todo not found"</p> }.into_any(),
                DetailState::Found(todo) => {
                    let status = if todo.completed { "✅ Completed" } else { "❌ Not Completed" };
                    view! {
                        <div class="detail-card">
                            <h2>"Todo Detail"</h2>
                            <p><strong>"ID: "</strong>{todo.id}</p>
                            <p><strong>"Title: "</strong>{todo.title}</p>
                            <p><strong>"Status: "</strong>{status}</p>
                        </div>
                    }.into_any()
                }
            }}
            <p class="back-link">
                <A href="/">"← Back to list"</A>
            </p>
        </div>
    }
}

fn is_current_request(route_id: Option<&str>, requested: &str) -> bool {
    route_id.unwrap_or_default() == requested
}
