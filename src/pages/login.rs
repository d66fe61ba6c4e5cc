//! Login page: email and password against the session store.

use leptos::prelude::*;
use tasks::AuthForm;

use crate::components::auth_fields::{CredentialFields, FormFeedback};
use crate::state::session::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let form = RwSignal::new(AuthForm::default());
    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut sent = None;
        form.update(|f| sent = f.begin_submit());
        let Some(credentials) = sent else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            let handle = session.session();
            leptos::task::spawn_local(async move {
                match handle.login(&credentials.email, &credentials.password).await {
                    Ok(()) => {
                        form.update(AuthForm::complete_login);
                        session.sync();
                        navigate(tasks::Route::Dashboard.path(), leptos_router::NavigateOptions::default());
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
            <div class="auth-copy">
                <h2>"Welcome back"</h2>
                <p>"Log in to manage your tasks, track progress, and stay on top of your work."</p>
            </div>
            <div class="auth-card">
                <h2>"Login"</h2>
                <form class="auth-card__form" on:submit=on_submit>
                    <CredentialFields form=form/>
                    <button type="submit" disabled=move || form.with(|f| f.busy)>
                        {move || form.with(|f| f.submit_label("Login", "Logging in...").to_owned())}
                    </button>
                </form>
                <FormFeedback form=form/>
            </div>
        </div>
    }
}
