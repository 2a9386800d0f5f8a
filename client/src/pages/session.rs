//! Session page: header, history sidebar, and the chat thread.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from the landing page with a fresh `?q=` (create the session
//! record, then chat) or from the sidebar / a reload (load the stored
//! thread). Create failures are logged only; a failed load raises the
//! view-level error card whose retry reloads the page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map, use_query_map};

use crate::components::chat::Chat;
use crate::components::chat_history::ChatHistory;
use crate::components::error_card::ErrorCard;
use crate::components::user_profile::UserProfile;
use crate::net::api::ApiEndpoint;
use crate::state::session::{SessionRoute, SessionViewState};
use crate::util::auth::SessionAuth;

#[component]
pub fn SessionPage() -> impl IntoView {
    let auth = expect_context::<SessionAuth>();
    let params = use_params_map();
    let query = use_query_map();
    let navigate = use_navigate();

    let session_id = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());
    let route = Memo::new(move |_| {
        query.with(|q| {
            SessionRoute::from_query(q.get("q").as_deref(), q.get("api").as_deref(), q.get("load").as_deref())
        })
    });
    let view_state = RwSignal::new(SessionViewState::default());
    let endpoint = RwSignal::new(route.get_untracked().endpoint);

    // Create the backend record for a fresh query, once per session id.
    Effect::new(move |prev: Option<String>| {
        let id = session_id.get();
        if prev.as_deref() == Some(id.as_str()) || id.is_empty() {
            return id;
        }
        let route = route.get_untracked();
        if prev.is_some() {
            endpoint.set(route.endpoint);
        }
        // Any write notifies, so only clear a real error.
        if view_state.with_untracked(SessionViewState::has_error) {
            view_state.set(SessionViewState::default());
        }
        if route.should_create() {
            create_session(auth, id.clone(), &route.query);
        }
        id
    });

    let on_error = Callback::new(move |message: String| view_state.update(|s| s.error = Some(message)));
    let on_retry = Callback::new(move |()| crate::util::browser::reload_page());
    let on_new_query = move |_| navigate("/", NavigateOptions::default());

    let short_id = move || session_id.with(|id| id.chars().take(8).collect::<String>());

    view! {
        <div class="session-page">
            <ChatHistory/>
            <Show
                when=move || !view_state.with(SessionViewState::has_error)
                fallback=move || view! {
                    <div class="session-page__error">
                        <ErrorCard
                            error=view_state.with(|s| s.error.clone()).unwrap_or_default()
                            on_retry=on_retry
                        />
                    </div>
                }
            >
                <div class="session-page__main">
                    <header class="session-page__header">
                        <div>
                            <h1>"lyrnios.ai"</h1>
                            <p class="session-page__id">"Session: " {short_id} "..."</p>
                        </div>
                        <div class="session-page__actions">
                            <UserProfile/>
                            <span class="session-page__api-label">"API:"</span>
                            <button
                                class="btn session-page__endpoint"
                                class:session-page__endpoint--demo=move || endpoint.get() == ApiEndpoint::Demo
                                title=move || format!("Currently using {} endpoint. Click to switch.", endpoint.get().path())
                                on:click=move |_| endpoint.update(|e| *e = e.toggled())
                            >
                                {move || endpoint.get().path()}
                            </button>
                            <button class="btn session-page__new" on:click=on_new_query.clone()>
                                "New Query"
                            </button>
                        </div>
                    </header>
                    {move || {
                        let id = session_id.get();
                        let route = route.get_untracked();
                        view! {
                            <Chat
                                session_id=id
                                initial_query=route.query.clone()
                                endpoint=endpoint
                                load_existing=route.should_load()
                                on_error=on_error
                            />
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}

fn create_session(auth: SessionAuth, session_id: String, query: &str) {
    #[cfg(feature = "hydrate")]
    {
        use crate::net::types::NewSession;
        use crate::state::session::{CreateOutcome, derive_title};

        let client = auth.client().get_untracked();
        let body = NewSession { id: session_id, title: derive_title(query) };
        leptos::task::spawn_local(async move {
            let outcome = CreateOutcome::from_result(client.create_session(&body).await);
            if outcome.is_success() {
                log::debug!("session {} ready ({outcome:?})", body.id);
            } else if let CreateOutcome::Failed(e) = outcome {
                log::error!("failed to create session {}: {e}", body.id);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, session_id, query);
    }
}
