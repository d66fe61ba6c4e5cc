//! Route gating against the session.
//!
//! Both components re-evaluate whenever the session signal changes, so a
//! logout on a protected page moves the user to `/login` without any extra
//! navigation call.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use tasks::SessionState;
use tasks::guard::{Access, Route, resolve};

use crate::state::session::use_session;

/// Render `children` when `route` is reachable, otherwise redirect.
#[component]
pub fn RequireSession(route: Route, children: ChildrenFn) -> impl IntoView {
    gate(route, Some(children))
}

/// For routes that have no content of their own, such as `/`.
#[component]
pub fn RouteRedirect(route: Route) -> impl IntoView {
    gate(route, None)
}

fn gate(route: Route, children: Option<ChildrenFn>) -> impl IntoView {
    let session = use_session();
    move || match resolve(route, session.state.with(SessionState::is_authenticated)) {
        Access::Render(_) => children.as_ref().map(|children| children()).into_any(),
        Access::Redirect(target) => view! { <Redirect path=target.path()/> }.into_any(),
    }
}
