//! Root application component with routing and the session provider.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use tasks::{ApiClient, ApiConfig, Session, guard};

use crate::components::guard::{RequireSession, RouteRedirect};
use crate::components::nav::NavBar;
use crate::net::transport::BrowserTransport;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage};
use crate::state::session::{AppSession, provide_session};
use crate::util::token_storage::BrowserTokenStore;

/// API base compiled into the bundle, or the local development default.
#[must_use]
pub fn api_config() -> ApiConfig {
    ApiConfig::from_value(option_env!("TASKDECK_API_BASE"))
}

/// Build the session from whatever token the browser has stored.
pub fn restore_session() -> AppSession {
    let api = ApiClient::new(api_config(), BrowserTransport);
    Session::restore(api, BrowserTokenStore)
}

/// Root application component.
///
/// Owns the session for the whole app lifetime and loads the profile once
/// on mount when a stored token was found.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = provide_session(restore_session());
    if session.state.get_untracked().is_authenticated() {
        session.refresh_profile();
    }

    view! {
        <Title text="Task Manager"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <RouteRedirect route=guard::Route::Root/> }/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| {
                            view! {
                                <RequireSession route=guard::Route::Dashboard>
                                    <DashboardPage/>
                                </RequireSession>
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
