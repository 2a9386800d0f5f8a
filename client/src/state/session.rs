//! Route-scoped state for the `/session/:id` view.
//!
//! DESIGN
//! ======
//! The view decides between two paths from its query string: a fresh query
//! creates the backend session record, while a reload (or an explicit
//! `load=true`) reads the existing record back. Creation is idempotent: a
//! `409` for an id that already exists counts as success.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::ApiEndpoint;
use crate::net::error::ApiError;

/// Titles longer than this many characters are truncated.
pub const TITLE_MAX_CHARS: usize = 60;
const TITLE_ELLIPSIS: &str = "...";

/// Parsed `?q=&api=&load=` query of the session route.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionRoute {
    pub query: String,
    pub endpoint: ApiEndpoint,
    pub explicit_load: bool,
}

impl SessionRoute {
    pub fn from_query(q: Option<&str>, api: Option<&str>, load: Option<&str>) -> Self {
        Self {
            query: q.unwrap_or_default().to_owned(),
            endpoint: ApiEndpoint::parse(api),
            explicit_load: load == Some("true"),
        }
    }

    /// Load the stored session instead of creating one. A missing query means
    /// the page was reloaded, so there is nothing fresh to create.
    pub fn should_load(&self) -> bool {
        self.explicit_load || self.query.is_empty()
    }

    pub fn should_create(&self) -> bool {
        !self.should_load()
    }
}

/// Session title for a query: at most 60 characters, then `...`.
pub fn derive_title(query: &str) -> String {
    match query.char_indices().nth(TITLE_MAX_CHARS) {
        Some((cut, _)) => format!("{}{TITLE_ELLIPSIS}", &query[..cut]),
        None => query.to_owned(),
    }
}

/// Result of `POST /sessions` as the view sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    AlreadyExists,
    Failed(ApiError),
}

impl CreateOutcome {
    pub fn from_result(result: Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => Self::Created,
            Err(err) if err.is_conflict() => Self::AlreadyExists,
            Err(err) => Self::Failed(err),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Created | Self::AlreadyExists)
    }
}

/// View-level state for the session page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionViewState {
    /// Blocking error; rendered as a retry card that reloads the page.
    pub error: Option<String>,
}

impl SessionViewState {
    /// Whether the page shows the error card instead of the chat. The signal is
    /// only rewritten when this is true, so a clean state never notifies.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
