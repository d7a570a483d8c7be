//! Delete Confirm Button Component
//!
//! Two-step delete for a list row. The row owns the `deleting` flag so the
//! prompt stays open (and can be retried) when the remote delete fails.

use leptos::prelude::*;

#[component]
pub fn DeleteConfirmButton(
    /// True while the row's DELETE request is in flight
    deleting: ReadSignal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    move || {
        if !confirming.get() {
            return view! {
                <button class="delete-btn" on:click=move |_| set_confirming.set(true)>
                    "Delete"
                </button>
            }
            .into_any();
        }

        view! {
            <span class="delete-confirm">
                <span class="delete-confirm-text">
                    {move || if deleting.get() { "Deleting..." } else { "Delete?" }}
                </span>
                <button
                    class="confirm-btn"
                    title="Confirm"
                    disabled=move || deleting.get()
                    on:click=move |_| on_confirm.run(())
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    title="Cancel"
                    disabled=move || deleting.get()
                    on:click=move |_| set_confirming.set(false)
                >
                    "✗"
                </button>
            </span>
        }
        .into_any()
    }
}
