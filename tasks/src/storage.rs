//! Durable credential storage.
//!
//! Exactly one value is persisted: the raw bearer token. Absence means the
//! user is logged out. Stores are infallible from the caller's side; a backend
//! that cannot write logs and carries on, which mirrors browser
//! `localStorage` semantics.

use std::cell::RefCell;
use std::rc::Rc;

/// Persists the raw token between runs.
pub trait TokenStore {
    /// The stored token, if any.
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    /// Remove the stored token. Removing an absent token is a no-op.
    fn clear(&self);
}

/// Process-local store. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.save(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}
