//! Session store: the bearer credential and the signed-in user's profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only component that calls the auth and profile endpoints and
//! the only writer of durable token storage. Views get a clone of the
//! [`Session`] injected (context in the web app, a local in the CLI) and read
//! its state through [`Session::snapshot`].
//!
//! CONCURRENCY
//! ===========
//! State sits behind `Rc<RefCell<_>>` for a single-threaded event loop. No
//! borrow is held across an `.await`; results are applied after the response
//! arrives, and a profile response for a credential that has since been
//! replaced or cleared is dropped.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::ApiClient;
use crate::error::AuthError;
use crate::storage::TokenStore;
use crate::transport::Transport;
use crate::types::{Credential, UserProfile};

/// Point-in-time view of the session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub credential: Option<Credential>,
    pub user: Option<UserProfile>,
}

impl SessionState {
    /// A present credential is the whole authentication check. There is no
    /// client-side expiry or signature validation.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }
}

/// Injectable session handle. Clones share state.
#[derive(Clone)]
pub struct Session<T, S> {
    api: ApiClient<T>,
    store: S,
    state: Rc<RefCell<SessionState>>,
}

impl<T: Transport, S: TokenStore> Session<T, S> {
    /// Start a session from whatever token durable storage holds.
    ///
    /// The profile starts empty; call [`Session::refresh_profile`] to load it.
    #[must_use]
    pub fn restore(api: ApiClient<T>, store: S) -> Self {
        let credential = store.load().and_then(Credential::new);
        Self { api, store, state: Rc::new(RefCell::new(SessionState { credential, user: None })) }
    }

    #[must_use]
    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn credential(&self) -> Option<Credential> {
        self.state.borrow().credential.clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Exchange email and password for a credential, persist it, then fetch
    /// the profile once.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] carrying the server `detail` or `"Login failed"`.
    /// Session state and storage are untouched on failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let credential = self.api.login(email, password).await?;
        self.store.save(credential.as_str());
        {
            let mut state = self.state.borrow_mut();
            state.credential = Some(credential);
            state.user = None;
        }
        log::info!("logged in as {email}");
        self.refresh_profile().await;
        Ok(())
    }

    /// Forget the credential and profile, in memory and in storage.
    /// Safe to call when already logged out.
    pub fn logout(&self) {
        *self.state.borrow_mut() = SessionState::default();
        self.store.clear();
    }

    /// Create an account with the default role. Does not log in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] carrying the server `detail` or
    /// `"Registration failed"`.
    pub async fn register(&self, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        let account = self.api.register(email, password).await?;
        log::info!("registered {email}");
        Ok(account)
    }

    /// Reload the profile for the current credential.
    ///
    /// Failures are logged and otherwise ignored: the session stays
    /// authenticated with an empty profile. Does nothing when logged out.
    pub async fn refresh_profile(&self) {
        let Some(credential) = self.credential() else {
            return;
        };
        let result = self.api.current_user(&credential).await;
        let mut state = self.state.borrow_mut();
        if state.credential.as_ref() != Some(&credential) {
            log::debug!("dropping profile response for a replaced credential");
            return;
        }
        match result {
            Ok(user) => state.user = Some(user),
            Err(err) => log::warn!("failed to fetch current user: {err}"),
        }
    }
}
