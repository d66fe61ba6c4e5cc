//! Token persistence in `localStorage`.
//!
//! The raw token lives under a single key. Storage access failures (private
//! mode, quota) are logged and otherwise ignored, so a failed write leaves the
//! in-memory session working for the current page. Without the `csr` feature
//! the token is kept in a per-thread slot instead.

use tasks::TokenStore;

#[cfg(feature = "csr")]
use tasks::config::TOKEN_STORAGE_KEY;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(not(feature = "csr"))]
thread_local! {
    static TOKEN_SLOT: std::cell::RefCell<Option<String>> = const { std::cell::RefCell::new(None) };
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            TOKEN_SLOT.with_borrow(Clone::clone)
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let saved = local_storage().is_some_and(|storage| storage.set_item(TOKEN_STORAGE_KEY, token).is_ok());
            if !saved {
                log::warn!("could not persist token to localStorage");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            TOKEN_SLOT.set(Some(token.to_owned()));
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_STORAGE_KEY);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            TOKEN_SLOT.set(None);
        }
    }
}
