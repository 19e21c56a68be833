//! Persistence of the session token.
//!
//! The token is the only durable state this client owns: a single
//! `localStorage` entry under a fixed key, present exactly while a session
//! is (believed to be) valid. The [`TokenStore`] trait keeps the session
//! flows testable off-browser; tests use [`MemoryTokenStore`].

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "access_token";

/// Storage seam for the persisted session token.
pub trait TokenStore {
    /// Return the stored token, if any.
    fn load(&self) -> Option<String>;
    /// Store `token`, replacing any previous value.
    fn save(&mut self, token: &str);
    /// Remove the stored token. A no-op when nothing is stored.
    fn clear(&mut self);
}

/// Token store backed by `window.localStorage`.
///
/// Outside the browser (SSR, native tests) every operation is inert and
/// `load` returns `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window()?;
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(value) = storage.get_item(STORAGE_KEY) {
                    return value;
                }
            }
            None
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&mut self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(STORAGE_KEY, token);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(STORAGE_KEY);
                }
            }
        }
    }
}

/// In-memory token store for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Option<String>,
}

impl MemoryTokenStore {
    /// Store pre-seeded with a token, as after a previous session.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Some(token.to_owned()),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.clone()
    }

    fn save(&mut self, token: &str) {
        self.token = Some(token.to_owned());
    }

    fn clear(&mut self) {
        self.token = None;
    }
}
