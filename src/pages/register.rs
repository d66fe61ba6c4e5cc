//! Registration page.
//!
//! A successful registration does not sign the user in. The page shows a
//! confirmation, clears the inputs and moves to `/login` after a short delay;
//! the delayed move is dropped if the page unmounts first.

use leptos::prelude::*;
use tasks::AuthForm;

use crate::components::auth_fields::{CredentialFields, FormFeedback};
use crate::state::session::use_session;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let form = RwSignal::new(AuthForm::default());

    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();
    #[cfg(feature = "csr")]
    let alive = {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&alive);
        on_cleanup(move || flag.store(false, Ordering::Relaxed));
        alive
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut sent = None;
        form.update(|f| sent = f.begin_submit());
        let Some(credentials) = sent else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            use std::sync::atomic::Ordering;

            let navigate = navigate.clone();
            let alive = alive.clone();
            let handle = session.session();
            leptos::task::spawn_local(async move {
                match handle.register(&credentials.email, &credentials.password).await {
                    Ok(_) => {
                        form.update(AuthForm::complete_registration);
                        gloo_timers::future::sleep(tasks::forms::REGISTER_REDIRECT_DELAY).await;
                        if alive.load(Ordering::Relaxed) {
                            navigate(tasks::Route::Login.path(), leptos_router::NavigateOptions::default());
                        }
                    }
                    Err(err) => form.update(|f| f.fail(&err)),
                }
            });
        }

        #[cfg(not(feature = "csr"))]
        {
            let _ = (credentials, session);
        }
    };

    view! {
        <div class="auth-shell">
            <div class="auth-card">
                <h2>"Register"</h2>
                <form class="auth-card__form" on:submit=on_submit>
                    <CredentialFields form=form/>
                    <button type="submit" disabled=move || form.with(|f| f.busy)>
                        {move || form.with(|f| f.submit_label("Register", "Registering...").to_owned())}
                    </button>
                </form>
                <FormFeedback form=form/>
            </div>
        </div>
    }
}
