//! Email and password inputs plus feedback lines shared by the login and
//! register pages.

use leptos::prelude::*;
use tasks::AuthForm;

#[component]
pub fn CredentialFields(form: RwSignal<AuthForm>) -> impl IntoView {
    view! {
        <label class="auth-card__field">
            "Email"
            <input
                type="email"
                required
                prop:value=move || form.with(|f| f.draft.email.clone())
                on:input=move |ev| form.update(|f| f.draft.email = event_target_value(&ev))
            />
        </label>
        <label class="auth-card__field">
            "Password"
            <input
                type="password"
                required
                prop:value=move || form.with(|f| f.draft.password.clone())
                on:input=move |ev| form.update(|f| f.draft.password = event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn FormFeedback(form: RwSignal<AuthForm>) -> impl IntoView {
    view! {
        <Show when=move || form.with(|f| f.error.is_some())>
            <p class="auth-card__error">{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
        </Show>
        <Show when=move || form.with(|f| f.notice.is_some())>
            <p class="auth-card__notice">{move || form.with(|f| f.notice.clone().unwrap_or_default())}</p>
        </Show>
    }
}
