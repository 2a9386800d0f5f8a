//! Neutral three-dot placeholder shown while something resolves.

use leptos::prelude::*;

#[component]
pub fn LoadingDots(#[prop(optional)] compact: bool) -> impl IntoView {
    view! {
        <div class="loading-dots" class:loading-dots--compact=compact role="status" aria-label="Loading">
            <span class="loading-dots__dot"></span>
            <span class="loading-dots__dot"></span>
            <span class="loading-dots__dot"></span>
        </div>
    }
}
