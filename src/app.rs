//! Todo App
//!
//! Root layout and routes.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{NotFound, TodoDetail, TodoList};
use crate::store::TodoState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide services and the shared cache to all routes
    provide_context(AppContext::new(config));
    provide_context(Store::new(TodoState::default()));

    view! {
        <Router>
            <div class="app-layout">
                <h1 class="app-title">"Todo App"</h1>
                <main class="main-content">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=TodoList />
                        <Route path=path!("/todo/:id") view=TodoDetail />
                        <Route path=path!("/todos/:id") view=TodoDetail />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
