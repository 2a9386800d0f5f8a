//! Landing page: start a new session from a query.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::chat_history::ChatHistory;
use crate::components::user_profile::UserProfile;
use crate::net::api::ApiEndpoint;
use crate::pages::login::login_error_message;
use crate::state::chat::normalize_prompt;

/// Route for a brand-new session answering `query`, or `None` for a blank query.
pub fn new_session_href(session_id: &str, query: &str, endpoint: ApiEndpoint) -> Option<String> {
    let query = normalize_prompt(query)?;
    let params = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("q", &query)
        .append_pair("api", endpoint.as_str())
        .finish();
    Some(format!("/session/{session_id}?{params}"))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let query_map = use_query_map();
    let navigate = use_navigate();
    let input = RwSignal::new(String::new());
    let endpoint = RwSignal::new(ApiEndpoint::default());

    let error = move || {
        query_map
            .with(|q| q.get("error"))
            .map(|code| login_error_message(&code))
            .filter(|msg| !msg.is_empty())
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let session_id = uuid::Uuid::new_v4().to_string();
        if let Some(href) = new_session_href(&session_id, &input.get_untracked(), endpoint.get_untracked()) {
            navigate(&href, NavigateOptions::default());
        }
    };

    view! {
        <div class="home-page">
            <ChatHistory/>
            <main class="home-page__main">
                <header class="home-page__header">
                    <h1>"lyrnios.ai"</h1>
                    <UserProfile/>
                </header>
                {move || error().map(|msg| view! { <p class="home-page__error">{msg}</p> })}
                <form class="home-page__form" on:submit=on_submit>
                    <input
                        class="home-page__input"
                        type="text"
                        placeholder="What do you want to learn today?"
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                    />
                    <button
                        class="btn home-page__endpoint"
                        type="button"
                        title="Switch generation endpoint"
                        on:click=move |_| endpoint.update(|e| *e = e.toggled())
                    >
                        {move || endpoint.get().path()}
                    </button>
                    <button
                        class="btn btn--primary home-page__submit"
                        type="submit"
                        disabled=move || normalize_prompt(&input.get()).is_none()
                    >
                        "Ask"
                    </button>
                </form>
            </main>
        </div>
    }
}
