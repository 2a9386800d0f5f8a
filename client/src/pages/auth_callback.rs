//! OAuth callback: exchanges the `?token=` handed back by the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend finishes the Google flow by redirecting the browser to
//! `/auth/callback?token=...` (or `?error=...`). This page acts once per
//! mount and always ends on `/`; the route guard takes it from there.

#[cfg(test)]
#[path = "auth_callback_test.rs"]
mod auth_callback_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::loading_dots::LoadingDots;
use crate::state::auth::{AuthState, FetchTicket};
use crate::util::auth::SessionAuth;
use crate::util::token_store::TokenStore;

/// What the callback does with its query, in priority order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackAction {
    Login { token: String },
    Failed { error: String },
    Home,
}

impl CallbackAction {
    /// A token wins over an error; neither means just go home.
    pub fn from_query(token: Option<&str>, error: Option<&str>) -> Self {
        let present = |v: Option<&str>| v.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned);
        if let Some(token) = present(token) {
            Self::Login { token }
        } else if let Some(error) = present(error) {
            Self::Failed { error }
        } else {
            Self::Home
        }
    }

    /// Apply the action to auth state. Only `Login` touches the stored token;
    /// it returns the user fetch to start.
    pub fn apply(&self, state: &mut AuthState, store: &dyn TokenStore) -> Option<FetchTicket> {
        match self {
            Self::Login { token } => state.login(store, token),
            Self::Failed { error } => {
                log::error!("authentication failed: {error}");
                None
            }
            Self::Home => None,
        }
    }

    /// Where to navigate once the action is applied.
    pub fn target(&self) -> String {
        match self {
            Self::Failed { error } => {
                let query = url::form_urlencoded::Serializer::new(String::new())
                    .append_pair("error", error)
                    .finish();
                format!("/?{query}")
            }
            Self::Login { .. } | Self::Home => "/".to_owned(),
        }
    }
}

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let auth = expect_context::<SessionAuth>();
    let query = use_query_map();
    let navigate = use_navigate();

    let handled = StoredValue::new(false);
    Effect::new(move || {
        if handled.get_value() {
            return;
        }
        handled.set_value(true);

        let action = query.with_untracked(|q| {
            CallbackAction::from_query(q.get("token").as_deref(), q.get("error").as_deref())
        });
        auth.transition(|state, store| action.apply(state, store));
        navigate(&action.target(), NavigateOptions::default());
    });

    view! {
        <div class="guard-placeholder">
            <LoadingDots/>
            <p class="guard-placeholder__text">"Completing authentication..."</p>
        </div>
    }
}
