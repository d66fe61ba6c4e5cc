//! Login and registration form state.
//!
//! The form only tracks input and feedback; the actual calls go through
//! [`crate::session::Session`]. A form is either idle or has exactly one
//! submission in flight.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::time::Duration;

use crate::error::AuthError;

/// Shown after a successful registration.
pub const REGISTERED_NOTICE: &str = "Registered successfully! You can now log in.";

/// How long the register page waits before moving to the login page.
pub const REGISTER_REDIRECT_DELAY: Duration = Duration::from_secs(1);

/// Email and password as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub draft: Credentials,
    /// A submission is in flight; the submit control is disabled.
    pub busy: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl AuthForm {
    /// Start a submission and hand back the values to send.
    ///
    /// Returns `None` while another submission is still in flight.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.busy {
            return None;
        }
        self.busy = true;
        self.error = None;
        self.notice = None;
        Some(self.draft.clone())
    }

    pub fn fail(&mut self, err: &AuthError) {
        self.busy = false;
        self.error = Some(err.to_string());
    }

    pub fn complete_login(&mut self) {
        self.busy = false;
    }

    /// Show the confirmation and clear the inputs.
    pub fn complete_registration(&mut self) {
        self.busy = false;
        self.notice = Some(REGISTERED_NOTICE.to_owned());
        self.draft = Credentials::default();
    }

    /// Submit button caption for the current state.
    #[must_use]
    pub fn submit_label<'a>(&self, idle: &'a str, pending: &'a str) -> &'a str {
        if self.busy { pending } else { idle }
    }
}
