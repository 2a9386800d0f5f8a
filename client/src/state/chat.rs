//! Chat-thread state for one session.
//!
//! DESIGN
//! ======
//! The thread keeps its own message shape rather than the wire
//! `ChatMessage`: local messages exist before the backend has stored them,
//! and generation failures are shown inline but never persisted.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::{MessageRole, SessionDetail};

/// Payload fields rendered as prose, in lookup order.
const TEXT_FIELDS: [&str; 4] = ["explanation", "answer", "content", "summary"];

/// Thread state for the chat view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub messages: Vec<ThreadMessage>,
    /// A generation request is in flight.
    pub pending: bool,
}

/// A single rendered message.
#[derive(Clone, Debug, PartialEq)]
pub struct ThreadMessage {
    pub role: MessageRole,
    pub content: Option<String>,
    pub data: Option<serde_json::Value>,
    pub is_error: bool,
}

impl ChatState {
    /// Rebuild the thread from a stored session.
    pub fn from_detail(detail: SessionDetail) -> Self {
        let messages = detail
            .messages
            .into_iter()
            .filter(|m| m.role != MessageRole::Unknown)
            .map(|m| ThreadMessage { role: m.role, content: m.content, data: m.data, is_error: false })
            .collect();
        Self { messages, pending: false }
    }

    pub fn push_user(&mut self, prompt: &str) {
        self.messages.push(ThreadMessage {
            role: MessageRole::User,
            content: Some(prompt.to_owned()),
            data: None,
            is_error: false,
        });
        self.pending = true;
    }

    pub fn push_assistant(&mut self, payload: serde_json::Value) {
        self.messages.push(ThreadMessage {
            role: MessageRole::Assistant,
            content: None,
            data: Some(payload),
            is_error: false,
        });
        self.pending = false;
    }

    pub fn push_error(&mut self, message: String) {
        self.messages.push(ThreadMessage {
            role: MessageRole::Assistant,
            content: Some(message),
            data: None,
            is_error: true,
        });
        self.pending = false;
    }
}

/// Trimmed prompt, or `None` when there is nothing to send.
pub fn normalize_prompt(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Renderable parts of an assistant payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssistantReply {
    /// Markdown prose.
    pub text: Option<String>,
    /// Source code for the code renderer.
    pub code: Option<String>,
    /// Mermaid diagram source.
    pub diagram: Option<String>,
    /// Pretty JSON fallback when nothing above matched.
    pub raw: Option<String>,
}

impl AssistantReply {
    pub fn from_message(message: &ThreadMessage) -> Self {
        match &message.data {
            Some(data) => Self::from_payload(data),
            None => Self { text: message.content.clone(), ..Self::default() },
        }
    }

    pub fn from_payload(payload: &serde_json::Value) -> Self {
        if let Some(text) = payload.as_str() {
            return Self { text: Some(text.to_owned()), ..Self::default() };
        }
        let field = |name: &str| {
            payload
                .get(name)
                .and_then(serde_json::Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .map(str::to_owned)
        };
        let text = TEXT_FIELDS.iter().find_map(|name| field(name));
        let code = field("code");
        let diagram = field("mermaid_diagram");
        let raw = (text.is_none() && code.is_none() && diagram.is_none())
            .then(|| serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string()));
        Self { text, code, diagram, raw }
    }
}
