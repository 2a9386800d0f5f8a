//! Reactive auth handle shared through context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one `SessionAuth` and provides it as context; pages and
//! components receive it with `expect_context::<SessionAuth>()`. It owns the
//! `AuthState` signal, the token store, and the token-bound `ApiClient` memo.
//! All mutations of auth state go through it.

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::User;
use crate::state::auth::{AuthState, FetchOutcome, FetchTicket, GuardDecision};
use crate::util::token_store::TokenStore;

/// Copyable handle to the auth store.
#[derive(Clone, Copy)]
pub struct SessionAuth {
    state: RwSignal<AuthState>,
    store: StoredValue<Arc<dyn TokenStore>>,
    config: StoredValue<ClientConfig>,
    client: Memo<ApiClient>,
}

impl SessionAuth {
    /// Create the store. The API client is recomputed whenever the token changes.
    pub fn new(config: ClientConfig, store: Arc<dyn TokenStore>) -> Self {
        let state = RwSignal::new(AuthState::default());
        let base_url = config.api_base_url.clone();
        let client = Memo::new(move |_| state.with(|s| ApiClient::for_token(&base_url, s.token.as_deref())));
        Self { state, store: StoredValue::new(store), config: StoredValue::new(config), client }
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    pub fn decision(&self) -> GuardDecision {
        self.state.with(GuardDecision::from_state)
    }

    /// Client bound to the current token.
    pub fn client(&self) -> Memo<ApiClient> {
        self.client
    }

    /// Load the persisted token and resolve its user. Only the first call does anything.
    pub fn bootstrap(&self) {
        self.transition(|state, store| state.bootstrap(store));
    }

    /// Apply an `AuthState` transition and start the user fetch it asks for.
    pub fn transition(&self, apply: impl FnOnce(&mut AuthState, &dyn TokenStore) -> Option<FetchTicket>) {
        let store = self.store.get_value();
        let ticket = self.state.try_update(|s| apply(s, store.as_ref())).flatten();
        if let Some(ticket) = ticket {
            self.spawn_fetch(ticket);
        }
    }

    pub fn logout(&self) {
        let store = self.store.get_value();
        self.state.update(|s| s.logout(store.as_ref()));
    }

    /// Send the browser to the backend's Google OAuth entry point.
    pub fn login_with_google(&self) {
        let url = self.config.with_value(ClientConfig::google_login_url);
        crate::util::browser::redirect_to(&url);
    }

    fn spawn_fetch(self, ticket: FetchTicket) {
        #[cfg(feature = "hydrate")]
        {
            let base_url = self.config.with_value(|c| c.api_base_url.clone());
            leptos::task::spawn_local(async move {
                let client = ApiClient::for_token(&base_url, Some(&ticket.token));
                let result = client.current_user().await;
                self.complete_fetch(&ticket, result);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.complete_fetch(&ticket, Err(ApiError::Unavailable));
        }
    }

    fn complete_fetch(self, ticket: &FetchTicket, result: Result<User, ApiError>) {
        let store = self.store.get_value();
        let outcome = self.state.try_update(|s| s.complete_fetch(store.as_ref(), ticket, result));
        if outcome == Some(FetchOutcome::Stale) {
            log::debug!("discarded user fetch for stale generation {}", ticket.generation);
        }
    }
}
