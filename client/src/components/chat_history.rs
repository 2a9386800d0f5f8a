//! Sidebar listing the user's sessions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted beside every session view. Loads `GET /sessions` once per mount;
//! list and delete failures are logged and never block the page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::loading_dots::LoadingDots;
use crate::state::history::{HistoryState, history_href};
use crate::util::auth::SessionAuth;
use crate::util::time_ago::{format_relative, now_utc};

#[component]
pub fn ChatHistory() -> impl IntoView {
    let auth = expect_context::<SessionAuth>();
    let params = use_params_map();
    let navigate = use_navigate();
    let history = RwSignal::new(HistoryState::default());
    let current_id = move || params.with(|p| p.get("id"));

    let requested = StoredValue::new(false);
    Effect::new(move || {
        if requested.get_value() {
            return;
        }
        requested.set_value(true);

        #[cfg(feature = "hydrate")]
        {
            let client = auth.client().get_untracked();
            leptos::task::spawn_local(async move {
                match client.list_sessions().await {
                    Ok(items) => history.set(HistoryState::loaded(items)),
                    Err(e) => {
                        log::error!("failed to fetch sessions: {e}");
                        history.update(|h| h.loading = false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = auth;
            history.update(|h| h.loading = false);
        }
    });

    let navigate_new = navigate.clone();
    let on_new_chat = move |_| navigate_new("/", NavigateOptions::default());

    let navigate_open = navigate.clone();
    let on_open = Callback::new(move |session_id: String| {
        navigate_open(&history_href(&session_id), NavigateOptions::default());
    });

    let on_delete = Callback::new(move |session_id: String| {
        #[cfg(feature = "hydrate")]
        {
            let client = auth.client().get_untracked();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match client.delete_session(&session_id).await {
                    Ok(()) => {
                        history.update(|h| {
                            h.remove(&session_id);
                        });
                        if params.with_untracked(|p| p.get("id")).as_deref() == Some(session_id.as_str()) {
                            navigate("/", NavigateOptions::default());
                        }
                    }
                    Err(e) => log::error!("failed to delete session {session_id}: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session_id, &navigate);
        }
    });

    view! {
        <aside class="chat-history">
            <div class="chat-history__header">
                <button class="btn chat-history__new" on:click=on_new_chat>
                    "+ New Chat"
                </button>
            </div>
            <div class="chat-history__list">
                {move || {
                    let state = history.get();
                    if state.loading {
                        return view! { <LoadingDots compact=true/> }.into_any();
                    }
                    if state.items.is_empty() {
                        return view! {
                            <div class="chat-history__empty">
                                <p>"No conversations yet"</p>
                                <p class="chat-history__hint">"Start a new chat to begin"</p>
                            </div>
                        }
                        .into_any();
                    }
                    let now = now_utc();
                    let current = current_id();
                    state
                        .items
                        .into_iter()
                        .map(|session| {
                            let is_current = current.as_deref() == Some(session.id.as_str());
                            let when = format_relative(&session.updated_at, now);
                            let open_id = session.id.clone();
                            let delete_id = session.id.clone();
                            view! {
                                <div
                                    class="chat-history__item"
                                    class:chat-history__item--active=is_current
                                    on:click=move |_| on_open.run(open_id.clone())
                                >
                                    <div class="chat-history__body">
                                        <p class="chat-history__title">{session.title}</p>
                                        <span class="chat-history__when">{when}</span>
                                    </div>
                                    <button
                                        class="chat-history__delete"
                                        title="Delete session"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            on_delete.run(delete_id.clone());
                                        }
                                    >
                                        "×"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
        </aside>
    }
}
