#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use tasks::{Session, SessionState};

use crate::net::transport::BrowserTransport;
use crate::util::token_storage::BrowserTokenStore;

pub type AppSession = Session<BrowserTransport, BrowserTokenStore>;

/// Session handle provided at the app root.
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: StoredValue<AppSession, LocalStorage>,
    pub state: RwSignal<SessionState>,
}

impl SessionContext {
    pub fn new(session: AppSession) -> Self {
        let state = RwSignal::new(session.snapshot());
        Self { session: StoredValue::new_local(session), state }
    }

    /// A clone of the underlying session; clones share state.
    pub fn session(&self) -> AppSession {
        self.session.get_value()
    }

    /// Copy the session's current state into the signal.
    pub fn sync(&self) {
        let snapshot = self.session.with_value(AppSession::snapshot);
        self.state.set(snapshot);
    }

    pub fn logout(&self) {
        self.session.with_value(AppSession::logout);
        self.sync();
    }

    /// Fetch the profile in the background and publish it when it arrives.
    pub fn refresh_profile(&self) {
        #[cfg(feature = "csr")]
        {
            let ctx = *self;
            let session = self.session();
            leptos::task::spawn_local(async move {
                session.refresh_profile().await;
                ctx.sync();
            });
        }
    }
}

/// Provide the session to the component tree and return the handle.
pub fn provide_session(session: AppSession) -> SessionContext {
    let ctx = SessionContext::new(session);
    provide_context(ctx);
    ctx
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

/// "Logged in as" line for the dashboard header, once a profile is loaded.
pub fn signed_in_label(state: &SessionState) -> Option<String> {
    state.user.as_ref().map(|user| format!("Logged in as {} ({})", user.email, user.role))
}
