//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `util::auth::SessionAuth` owns one `AuthState` behind a signal and drives
//! it through the transitions below; route guards and user-aware components
//! only read it.
//!
//! DESIGN
//! ======
//! Transitions are plain methods so the whole lifecycle is testable without a
//! browser or a reactive runtime. Every user fetch is tagged with the
//! `generation` current when it started. `login` and `logout` bump the
//! generation, so a response for an older generation is dropped instead of
//! resurrecting a user after logout or clobbering a newer login.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::error::ApiError;
use crate::net::types::User;
use crate::util::token_store::TokenStore;

/// Authentication state: token, resolved user, and loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
    /// True during the initial bootstrap and while a user fetch is in flight.
    pub loading: bool,
    /// Bumped on every login/logout; fetch results for older generations are discarded.
    pub generation: u64,
    pub bootstrapped: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { token: None, user: None, loading: true, generation: 0, bootstrapped: false }
    }
}

/// Identifies one in-flight user fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub token: String,
    pub generation: u64,
}

/// What a completed user fetch did to the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Authenticated,
    LoggedOut,
    /// A newer login/logout happened while the fetch was in flight.
    Stale,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Load the persisted token once per application lifetime.
    ///
    /// Returns the fetch to start when a token was found; otherwise loading
    /// ends immediately. Later calls are no-ops.
    pub fn bootstrap(&mut self, store: &dyn TokenStore) -> Option<FetchTicket> {
        if self.bootstrapped {
            return None;
        }
        self.bootstrapped = true;
        if let Some(token) = store.get() {
            Some(self.begin_fetch(token))
        } else {
            self.loading = false;
            None
        }
    }

    /// Persist `token` and start resolving its user.
    ///
    /// The previous user is dropped right away; `is_authenticated` turns true
    /// only once the returned fetch completes successfully. A blank token is
    /// treated as a logout.
    pub fn login(&mut self, store: &dyn TokenStore, token: &str) -> Option<FetchTicket> {
        let token = token.trim();
        if token.is_empty() {
            self.logout(store);
            return None;
        }
        store.set(token);
        self.bootstrapped = true;
        self.user = None;
        Some(self.begin_fetch(token.to_owned()))
    }

    /// Clear the persisted and in-memory credentials. Safe to repeat.
    pub fn logout(&mut self, store: &dyn TokenStore) {
        store.clear();
        self.token = None;
        self.user = None;
        self.loading = false;
        self.generation += 1;
    }

    /// Apply the result of the fetch identified by `ticket`.
    ///
    /// Any failure logs the user out; backend rejection means "not
    /// authenticated", never a distinct error state.
    pub fn complete_fetch(
        &mut self,
        store: &dyn TokenStore,
        ticket: &FetchTicket,
        result: Result<User, ApiError>,
    ) -> FetchOutcome {
        if ticket.generation != self.generation {
            return FetchOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(user) => {
                self.user = Some(user);
                FetchOutcome::Authenticated
            }
            Err(err) => {
                if err.is_unauthorized() {
                    log::info!("stored token rejected; signing out");
                } else {
                    log::warn!("failed to fetch user: {err}");
                }
                self.logout(store);
                FetchOutcome::LoggedOut
            }
        }
    }

    fn begin_fetch(&mut self, token: String) -> FetchTicket {
        self.generation += 1;
        self.token = Some(token.clone());
        self.loading = true;
        FetchTicket { token, generation: self.generation }
    }
}

/// Route-guard decision derived from `AuthState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth still resolving: render a placeholder, mount nothing.
    Pending,
    /// Resolved without a user: redirect to `/login`.
    Denied,
    /// Resolved with a user: mount the protected subtree.
    Allowed,
}

impl GuardDecision {
    pub fn from_state(state: &AuthState) -> Self {
        if state.loading {
            Self::Pending
        } else if state.is_authenticated() {
            Self::Allowed
        } else {
            Self::Denied
        }
    }
}
