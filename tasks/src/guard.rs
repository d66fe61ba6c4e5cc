//! Client-side routes and the access decision for each.
//!
//! Only the dashboard is protected, and the only check is whether a
//! credential is present. There is no role distinction.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Root,
    Login,
    Register,
    Dashboard,
}

/// Outcome of a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Render(Route),
    Redirect(Route),
}

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
        }
    }

    #[must_use]
    pub fn is_protected(self) -> bool {
        matches!(self, Self::Dashboard)
    }
}

/// Decide whether `route` renders for a user with or without a credential.
#[must_use]
pub fn resolve(route: Route, authenticated: bool) -> Access {
    match route {
        Route::Root => Access::Redirect(Route::Login),
        protected if protected.is_protected() && !authenticated => Access::Redirect(Route::Login),
        other => Access::Render(other),
    }
}
