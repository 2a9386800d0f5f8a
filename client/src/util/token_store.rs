//! Persistent storage for the bearer token.
//!
//! `LocalTokenStore` writes to browser `localStorage` under a single key and
//! is inert outside the browser. `MemoryTokenStore` keeps the token in
//! process memory; tests and non-browser hosts use it.
//!
//! TRADE-OFFS
//! ==========
//! Storage failures (quota, disabled storage, private mode) are swallowed:
//! the in-memory auth state is still correct for the lifetime of the page,
//! the token just will not survive a reload.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::{Arc, Mutex};

/// Key/value persistence for exactly one token string.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Token persisted in `window.localStorage`.
#[derive(Clone, Debug)]
pub struct LocalTokenStore {
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    key: String,
}

impl LocalTokenStore {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_owned() }
    }

    #[cfg(feature = "hydrate")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?
                .get_item(&self.key)
                .ok()
                .flatten()
                .filter(|token| !token.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::storage() {
                if storage.set_item(&self.key, token).is_err() {
                    log::warn!("failed to persist auth token");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::storage() {
                let _ = storage.remove_item(&self.key);
            }
        }
    }
}

/// Token held in memory; clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.set(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn set(&self, token: &str) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(token.to_owned());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}
