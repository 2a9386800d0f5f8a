//! Bearer-token REST client for the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns `ApiError::Unavailable`, since these
//! endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! An `ApiClient` is an immutable value: base URL plus the token it was built
//! with. A new token means a new client (see `util::auth::SessionAuth::client`),
//! so a request can never pick up credentials that changed after it was built.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{NewMessage, NewSession, SessionDetail, SessionSummary, User};
#[cfg(feature = "hydrate")]
use super::types::Prompt;

/// Which generation endpoint answers chat prompts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApiEndpoint {
    /// Canned responses keyed off the prompt text.
    Demo,
    /// Live model generation.
    #[default]
    Generate,
}

impl ApiEndpoint {
    /// Parse the `api` query parameter. Anything unrecognized selects `Generate`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("demo") => Self::Demo,
            _ => Self::Generate,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::Generate => "generate",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Demo => "/demo",
            Self::Generate => "/generate",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Demo => Self::Generate,
            Self::Generate => Self::Demo,
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn session_path(session_id: &str) -> String {
    format!("/sessions/{session_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn session_messages_path(session_id: &str) -> String {
    format!("/sessions/{session_id}/messages")
}

/// HTTP client bound to a base URL and, optionally, a bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client for `token`. `None` (or an empty token) sends no auth header.
    pub fn for_token(base_url: &str, token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            token: token.filter(|t| !t.is_empty()).map(str::to_owned),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Value of the `Authorization` header, if the client carries a token.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {token}"))
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    #[cfg(feature = "hydrate")]
    fn authorize(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match self.authorization() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    #[cfg(feature = "hydrate")]
    async fn checked(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::Status { status, body })
    }

    #[cfg(feature = "hydrate")]
    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.authorize(gloo_net::http::Request::get(&self.url(path))).send().await?;
        let resp = Self::checked(resp).await?;
        Ok(resp.json::<T>().await?)
    }

    #[cfg(feature = "hydrate")]
    async fn post_json<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<gloo_net::http::Response, ApiError> {
        let resp = self
            .authorize(gloo_net::http::Request::post(&self.url(path)))
            .json(body)?
            .send()
            .await?;
        Self::checked(resp).await
    }

    /// `GET /auth/user`: the user the token belongs to.
    ///
    /// # Errors
    ///
    /// Any transport failure, non-2xx status (401 for a bad token), or schema mismatch.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.get_json("/auth/user").await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /sessions`: the user's sessions, newest first.
    ///
    /// # Errors
    ///
    /// Any transport failure, non-2xx status, or schema mismatch.
    pub async fn list_sessions(&self) -> Result<Vec<SessionSummary>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.get_json("/sessions").await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /sessions`. A duplicate id comes back as a `409` status error.
    ///
    /// # Errors
    ///
    /// Any transport failure or non-2xx status.
    pub async fn create_session(&self, session: &NewSession) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.post_json("/sessions", session).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /sessions/{id}` with its messages.
    ///
    /// # Errors
    ///
    /// Any transport failure, non-2xx status (404/403), or schema mismatch.
    pub async fn get_session(&self, session_id: &str) -> Result<SessionDetail, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.get_json(&session_path(session_id)).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session_id;
            Err(ApiError::Unavailable)
        }
    }

    /// `DELETE /sessions/{id}`.
    ///
    /// # Errors
    ///
    /// Any transport failure or non-2xx status.
    pub async fn delete_session(&self, session_id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(&session_path(session_id));
            let resp = self.authorize(gloo_net::http::Request::delete(&url)).send().await?;
            Self::checked(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session_id;
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /sessions/{id}/messages`.
    ///
    /// # Errors
    ///
    /// Any transport failure or non-2xx status.
    pub async fn add_message(&self, session_id: &str, message: &NewMessage) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.post_json(&session_messages_path(session_id), message).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session_id, message);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /generate` or `POST /demo`; returns the raw JSON payload.
    ///
    /// # Errors
    ///
    /// Any transport failure, non-2xx status, or a non-JSON body.
    pub async fn generate(&self, endpoint: ApiEndpoint, prompt: &str) -> Result<serde_json::Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = Prompt { prompt: prompt.to_owned() };
            let resp = self.post_json(endpoint.path(), &body).await?;
            Ok(resp.json::<serde_json::Value>().await?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (endpoint, prompt);
            Err(ApiError::Unavailable)
        }
    }
}
