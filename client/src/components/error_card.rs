//! Blocking error card with a retry action.

use leptos::prelude::*;

#[component]
pub fn ErrorCard(#[prop(into)] error: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="error-card" role="alert">
            <h2 class="error-card__title">"Something went wrong"</h2>
            <p class="error-card__message">{error}</p>
            <button class="btn error-card__retry" on:click=move |_| on_retry.run(())>
                "Try again"
            </button>
        </div>
    }
}
