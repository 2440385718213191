//! Bearer-token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser keeps the token in `localStorage` so a reload can restore the
//! session. Storage failures (private mode, quota) are logged and otherwise
//! treated as "no token".

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::cell::RefCell;

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Where the bearer token lives between page loads.
pub trait TokenStore {
    /// Stored token, if any. An empty value counts as absent.
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// [`TokenStore`] backed by `window.localStorage`. A no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    match web_sys::window().map(|w| w.local_storage()) {
        Some(Ok(Some(storage))) => Some(storage),
        Some(Err(e)) => {
            log::warn!("localStorage unavailable: {e:?}");
            None
        }
        _ => None,
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()?;
            non_empty(raw)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if let Err(e) = storage.set_item(TOKEN_STORAGE_KEY, token) {
                log::warn!("failed to persist token: {e:?}");
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
            if let Some(storage) = local_storage() {
                if let Err(e) = storage.remove_item(TOKEN_STORAGE_KEY) {
                    log::warn!("failed to remove token: {e:?}");
                }
            }
        }
    }
}

/// In-memory [`TokenStore`] for server rendering and tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: RefCell::new(Some(token.into())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone().and_then(non_empty)
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

fn non_empty(raw: String) -> Option<String> {
    if raw.is_empty() { None } else { Some(raw) }
}
