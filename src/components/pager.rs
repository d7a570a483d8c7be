//! Pager Component
//!
//! Prev / page counter / Next controls under the list.

use leptos::prelude::*;

use crate::listing::Page;

#[component]
pub fn Pager(current: Memo<Page>, set_page: WriteSignal<usize>) -> impl IntoView {
    view! {
        <div class="pager">
            <button
                class="pager-btn"
                disabled=move || current.with(|p| !p.has_prev())
                on:click=move |_| set_page.set(current.with_untracked(|p| p.page.saturating_sub(1).max(1)))
            >
                "Prev"
            </button>
            <span class="pager-status">
                {move || current.with(|p| format!("{} / {}", p.page, p.total_pages))}
            </span>
            <button
                class="pager-btn"
                disabled=move || current.with(|p| !p.has_next())
                on:click=move |_| set_page.set(current.with_untracked(|p| p.page + 1))
            >
                "Next"
            </button>
        </div>
    }
}
