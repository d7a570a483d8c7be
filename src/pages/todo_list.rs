//! Todo List Page
//!
//! Cached collection with create, search, pagination and per-row
//! edit/delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::{NewTodoForm, Pager, SearchBar, TodoRow};
use crate::context::use_app_context;
use crate::listing::paginate;
use crate::store::{use_todo_store, LoadState, TodoStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_todo_store();
    let page_size = ctx.config.page_size;

    let (search, set_search) = signal(String::new());
    let (page, set_page) = signal(1usize);
    let (editing_id, set_editing_id) = signal::<Option<u32>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    // Fetch once; the cache outlives this view
    if store.load_state().read_untracked().needs_fetch() {
        let client = ctx.client.clone();
        spawn_local(async move {
            actions::load_todos(store, &client).await;
        });
    }

    let current = Memo::new(move |_| {
        let query = search.get();
        let requested = page.get();
        store.todos().with(|todos| paginate(todos, &query, requested, page_size))
    });

    // Follow the clamp when the page shrinks under us (e.g. after a delete)
    Effect::new(move |_| {
        let clamped = current.with(|p| p.page);
        if clamped != page.get_untracked() {
            set_page.set(clamped);
        }
    });

    let is_loaded = move || store.load_state().get() == LoadState::Loaded;
    let status = move || match store.load_state().get() {
        LoadState::Failed(_) => view! { <p class="status error">"Failed to load todos"</p> }.into_any(),
        _ => view! { <p class="status">"Loading todos..."</p> }.into_any(),
    };

    view! {
        <div class="todo-list">
            <Show when=is_loaded fallback=status>
                <NewTodoForm set_error=set_error />

                <SearchBar search=search set_search=set_search set_page=set_page />

                {move || error.get().map(|msg| view! {
                    <p class="mutation-error">
                        {msg}
                        <button class="dismiss-btn" on:click=move |_| set_error.set(None)>"×"</button>
                    </p>
                })}

                <ul class="todo-items">
                    <For
                        each=move || current.with(|p| p.items.clone())
                        // Key on every mutable field so edits re-render the row
                        key=|todo| (todo.id, todo.title.clone(), todo.completed)
                        children=move |todo| view! {
                            <TodoRow
                                todo=todo
                                editing_id=editing_id
                                set_editing_id=set_editing_id
                                set_error=set_error
                            />
                        }
                    />
                </ul>

                <Show when=move || current.with(|p| p.total_matches == 0)>
                    <p class="empty">"No todos match your search."</p>
                </Show>

                <Pager current=current set_page=set_page />
            </Show>
        </div>
    }
}
