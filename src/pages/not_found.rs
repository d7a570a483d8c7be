use leptos::prelude::*;
use leptos_router::components::A;

/// Fallback for unknown paths
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1 class="not-found-code">"404"</h1>
            <p class="not-found-title">"Page Not Found"</p>
            <p class="not-found-text">"Sorry, the page you're looking for doesn't exist."</p>
            <p class="home-link">
                <A href="/">"Go Back Home"</A>
            </p>
        </div>
    }
}
