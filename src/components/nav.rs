//! Top navigation bar shown on every route.

use leptos::prelude::*;
use leptos_router::components::A;
use tasks::guard::Route;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <header class="nav-bar">
            <nav class="nav-bar__links">
                <A href=Route::Register.path()>"Register"</A>
                <A href=Route::Login.path()>"Login"</A>
                <A href=Route::Dashboard.path()>"Dashboard"</A>
            </nav>
        </header>
    }
}
