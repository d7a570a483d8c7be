use leptos::prelude::*;

/// Search box; any change jumps back to the first page
#[component]
pub fn SearchBar(
    search: ReadSignal<String>,
    set_search: WriteSignal<String>,
    set_page: WriteSignal<usize>,
) -> impl IntoView {
    view! {
        <input
            type="text"
            class="search-input"
            placeholder="Search todos..."
            prop:value=move || search.get()
            on:input=move |ev| {
                set_search.set(event_target_value(&ev));
                set_page.set(1);
            }
        />
    }
}
