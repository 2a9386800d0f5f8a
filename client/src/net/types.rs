//! Wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads. Numeric ids are kept as
//! strings on the client so views never care whether the backend used an
//! integer or a UUID column.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// The authenticated user returned by `GET /auth/user`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backend user identifier.
    #[serde(deserialize_with = "deserialize_id_string")]
    pub id: String,
    /// Display name, if the OAuth provider shared one.
    #[serde(default)]
    pub name: Option<String>,
    /// Account email.
    pub email: String,
    /// Avatar image URL, if available.
    #[serde(default)]
    pub picture: Option<String>,
}

impl User {
    /// Name to show in the UI; falls back to the email address.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

/// A chat session row as listed by `GET /sessions`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Client-supplied session identifier (UUID string).
    pub id: String,
    /// Title derived from the first query.
    pub title: String,
    /// Creation timestamp, ISO 8601.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last-update timestamp, ISO 8601.
    pub updated_at: String,
    /// Number of stored messages.
    #[serde(default)]
    pub message_count: Option<i64>,
}

/// A session with its full message history, from `GET /sessions/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionDetail {
    #[serde(flatten)]
    pub summary: SessionSummary,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    #[serde(other)]
    Unknown,
}

/// A persisted chat message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(deserialize_with = "deserialize_id_string")]
    pub id: String,
    pub session_id: String,
    pub role: MessageRole,
    /// Plain text body (user prompts).
    #[serde(default)]
    pub content: Option<String>,
    /// Structured generation payload (assistant replies).
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    pub created_at: String,
}

/// Body of `POST /sessions`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewSession {
    pub id: String,
    pub title: String,
}

/// Body of `POST /sessions/{id}/messages`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewMessage {
    pub role: MessageRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl NewMessage {
    pub fn user(prompt: &str) -> Self {
        Self { role: MessageRole::User, content: Some(prompt.to_owned()), data: None }
    }

    pub fn assistant(payload: serde_json::Value) -> Self {
        Self { role: MessageRole::Assistant, content: None, data: Some(payload) }
    }
}

/// Body of `POST /generate` and `POST /demo`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Prompt {
    pub prompt: String,
}

fn deserialize_id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}
