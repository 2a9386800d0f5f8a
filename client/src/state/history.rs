//! Session-list state for the chat-history sidebar.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::net::types::SessionSummary;

#[derive(Clone, Debug, PartialEq)]
pub struct HistoryState {
    pub items: Vec<SessionSummary>,
    pub loading: bool,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true }
    }
}

impl HistoryState {
    pub fn loaded(items: Vec<SessionSummary>) -> Self {
        Self { items, loading: false }
    }

    /// Drop a deleted session. Returns whether a row was removed.
    pub fn remove(&mut self, session_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|s| s.id != session_id);
        self.items.len() != before
    }
}

/// Route that reopens a stored session from the sidebar.
pub fn history_href(session_id: &str) -> String {
    format!("/session/{session_id}?q=&api=generate&load=true")
}
