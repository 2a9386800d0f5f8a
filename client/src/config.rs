//! Build-time client configuration.
//!
//! The WASM bundle has no process environment at runtime, so the backend
//! location and storage key are baked in at compile time from
//! `LYRN_API_URL` and `LYRN_TOKEN_KEY`, falling back to local-dev defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TOKEN_KEY: &str = "auth_token";

/// Backend location and persisted-token key, provided to the view tree as context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL without a trailing slash.
    pub api_base_url: String,
    /// `localStorage` key holding the bearer token.
    pub token_storage_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl ClientConfig {
    /// Config compiled in from `LYRN_API_URL` / `LYRN_TOKEN_KEY`.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("LYRN_API_URL"), option_env!("LYRN_TOKEN_KEY"))
    }

    /// Build config from optional raw values. Blank values use the defaults.
    pub fn from_values(api_base_url: Option<&str>, token_storage_key: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_owned();
        let token_storage_key = token_storage_key
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_TOKEN_KEY)
            .to_owned();
        Self { api_base_url, token_storage_key }
    }

    /// Backend entry point that starts the Google OAuth redirect dance.
    pub fn google_login_url(&self) -> String {
        format!("{}/auth/google", self.api_base_url)
    }
}
