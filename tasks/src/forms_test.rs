use super::*;
use crate::session::Session;
use crate::storage::MemoryTokenStore;
use crate::test_support::FakeApi;

fn filled(email: &str, password: &str) -> AuthForm {
    AuthForm { draft: Credentials { email: email.to_owned(), password: password.to_owned() }, ..AuthForm::default() }
}

#[test]
fn begin_submit_blocks_second_submission() {
    let mut form = filled("a@b.io", "pw");
    assert!(form.begin_submit().is_some());
    assert!(form.busy);
    assert_eq!(form.begin_submit(), None);
}

#[test]
fn begin_submit_clears_previous_feedback() {
    let mut form = filled("a@b.io", "pw");
    form.error = Some("old".to_owned());
    form.notice = Some("older".to_owned());
    let sent = form.begin_submit().expect("idle form");
    assert_eq!(sent.email, "a@b.io");
    assert_eq!(form.error, None);
    assert_eq!(form.notice, None);
}

#[test]
fn submit_label_follows_busy_flag() {
    let mut form = AuthForm::default();
    assert_eq!(form.submit_label("Login", "Logging in..."), "Login");
    form.busy = true;
    assert_eq!(form.submit_label("Login", "Logging in..."), "Logging in...");
}

#[test]
fn completed_registration_resets_inputs_and_shows_notice() {
    let mut form = filled("a@b.io", "pw");
    form.begin_submit();
    form.complete_registration();
    assert!(!form.busy);
    assert_eq!(form.draft, Credentials::default());
    assert_eq!(form.notice.as_deref(), Some(REGISTERED_NOTICE));
}

#[test]
fn register_redirect_waits_one_second() {
    assert_eq!(REGISTER_REDIRECT_DELAY, Duration::from_secs(1));
}

#[tokio::test]
async fn wrong_password_shows_server_message_on_login_form() {
    let fake = FakeApi::default();
    fake.client().register("ada@example.com", "right").await.expect("register");
    let session = Session::restore(fake.client(), MemoryTokenStore::default());

    let mut form = filled("ada@example.com", "wrong");
    let sent = form.begin_submit().expect("idle");
    match session.login(&sent.email, &sent.password).await {
        Ok(()) => form.complete_login(),
        Err(err) => form.fail(&err),
    }

    assert_eq!(form.error.as_deref(), Some("Invalid credentials"));
    assert!(!form.busy);
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn register_form_flow_leaves_session_logged_out() {
    let fake = FakeApi::default();
    let session = Session::restore(fake.client(), MemoryTokenStore::default());

    let mut form = filled("new@example.com", "pw");
    let sent = form.begin_submit().expect("idle");
    match session.register(&sent.email, &sent.password).await {
        Ok(_) => form.complete_registration(),
        Err(err) => form.fail(&err),
    }

    assert_eq!(form.notice.as_deref(), Some(REGISTERED_NOTICE));
    assert_eq!(form.error, None);
    assert!(!session.is_authenticated());
}
