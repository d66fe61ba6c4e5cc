use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;
use tokio::sync::oneshot;

use super::*;
use crate::config::ApiConfig;
use crate::error::TransportError;
use crate::storage::MemoryTokenStore;
use crate::test_support::{FAKE_BASE, FakeApi, reply};
use crate::transport::{ApiRequest, ApiResponse, Method};

// =============================================================
// Helpers
// =============================================================

fn session(fake: &FakeApi, store: &MemoryTokenStore) -> Session<FakeApi, MemoryTokenStore> {
    Session::restore(fake.client(), store.clone())
}

async fn registered(fake: &FakeApi, email: &str, password: &str) {
    fake.client().register(email, password).await.expect("register");
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_without_token_is_logged_out() {
    let fake = FakeApi::default();
    let s = session(&fake, &MemoryTokenStore::default());
    assert!(!s.is_authenticated());
    assert_eq!(s.snapshot(), SessionState::default());
}

#[test]
fn restore_picks_up_persisted_token() {
    let fake = FakeApi::default();
    let s = session(&fake, &MemoryTokenStore::with_token("tok-1"));
    assert!(s.is_authenticated());
    assert_eq!(s.credential().unwrap().as_str(), "tok-1");
    assert!(s.snapshot().user.is_none());
}

#[test]
fn restore_treats_blank_token_as_logged_out() {
    let fake = FakeApi::default();
    let s = session(&fake, &MemoryTokenStore::with_token(""));
    assert!(!s.is_authenticated());
}

// =============================================================
// login / register
// =============================================================

#[tokio::test]
async fn register_then_login_yields_credential_and_one_profile_fetch() {
    let fake = FakeApi::default();
    let store = MemoryTokenStore::default();
    let s = session(&fake, &store);

    let account = s.register("ada@example.com", "hunter2").await.expect("register");
    assert_eq!(account.email, "ada@example.com");
    assert_eq!(account.role, "user");

    s.login("ada@example.com", "hunter2").await.expect("login");

    let state = s.snapshot();
    assert!(state.is_authenticated());
    assert_eq!(store.load(), state.credential.as_ref().map(|c| c.as_str().to_owned()));
    assert_eq!(state.user.expect("profile").email, "ada@example.com");
    assert_eq!(fake.count(Method::Get, "/users/me"), 1);
}

#[tokio::test]
async fn register_does_not_log_in() {
    let fake = FakeApi::default();
    let store = MemoryTokenStore::default();
    let s = session(&fake, &store);
    s.register("ada@example.com", "hunter2").await.expect("register");
    assert!(!s.is_authenticated());
    assert_eq!(store.load(), None);
}

#[tokio::test]
async fn login_sends_no_bearer_header() {
    let fake = FakeApi::default();
    registered(&fake, "ada@example.com", "pw").await;
    let s = session(&fake, &MemoryTokenStore::with_token("stale"));
    let _ = s.api().login("ada@example.com", "pw").await;
    let sent = fake.last_request().expect("request");
    assert_eq!(sent.authorization, None);
    assert_eq!(sent.url, format!("{FAKE_BASE}/auth/login"));
}

#[tokio::test]
async fn wrong_password_surfaces_detail_and_leaves_session_empty() {
    let fake = FakeApi::default();
    registered(&fake, "ada@example.com", "right").await;
    let store = MemoryTokenStore::default();
    let s = session(&fake, &store);

    let err = s.login("ada@example.com", "wrong").await.expect_err("should reject");
    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(err.status(), Some(401));
    assert!(!s.is_authenticated());
    assert_eq!(store.load(), None);
    assert_eq!(fake.count(Method::Get, "/users/me"), 0);
}

#[tokio::test]
async fn login_without_detail_uses_fallback_message() {
    let fake = FakeApi::default();
    fake.respond_once(Method::Post, "/auth/login", Ok(ApiResponse::new(500, "Internal Server Error")));
    let s = session(&fake, &MemoryTokenStore::default());
    let err = s.login("a@b.io", "pw").await.expect_err("should fail");
    assert_eq!(err.to_string(), "Login failed");
}

#[tokio::test]
async fn login_validation_error_uses_first_message() {
    let fake = FakeApi::default();
    fake.respond_once(
        Method::Post,
        "/auth/login",
        Ok(reply(422, &json!({ "detail": [{ "loc": ["body", "email"], "msg": "value is not a valid email address" }] }))),
    );
    let s = session(&fake, &MemoryTokenStore::default());
    let err = s.login("nope", "pw").await.expect_err("should fail");
    assert_eq!(err.to_string(), "value is not a valid email address");
}

#[tokio::test]
async fn login_network_failure_is_transport_error() {
    let fake = FakeApi::default();
    fake.set_offline(true);
    let s = session(&fake, &MemoryTokenStore::default());
    let err = s.login("a@b.io", "pw").await.expect_err("offline");
    assert!(matches!(err, AuthError::Transport(TransportError::Network(_))));
    assert!(!s.is_authenticated());
}

#[tokio::test]
async fn login_with_empty_token_is_decode_error() {
    let fake = FakeApi::default();
    fake.respond_once(Method::Post, "/auth/login", Ok(reply(200, &json!({ "access_token": "" }))));
    let s = session(&fake, &MemoryTokenStore::default());
    let err = s.login("a@b.io", "pw").await.expect_err("empty token");
    assert!(matches!(err, AuthError::Decode(_)));
    assert!(!s.is_authenticated());
}

#[tokio::test]
async fn duplicate_registration_surfaces_detail() {
    let fake = FakeApi::default();
    let s = session(&fake, &MemoryTokenStore::default());
    s.register("ada@example.com", "pw").await.expect("first");
    let err = s.register("ada@example.com", "pw").await.expect_err("duplicate");
    assert_eq!(err.to_string(), "Email already registered");
}

#[tokio::test]
async fn registration_without_detail_uses_fallback_message() {
    let fake = FakeApi::default();
    fake.respond_once(Method::Post, "/auth/register", Ok(ApiResponse::new(502, "<html>bad gateway</html>")));
    let s = session(&fake, &MemoryTokenStore::default());
    let err = s.register("a@b.io", "pw").await.expect_err("should fail");
    assert_eq!(err.to_string(), "Registration failed");
}

// =============================================================
// logout
// =============================================================

#[tokio::test]
async fn logout_clears_memory_and_storage() {
    let fake = FakeApi::default();
    registered(&fake, "ada@example.com", "pw").await;
    let store = MemoryTokenStore::default();
    let s = session(&fake, &store);
    s.login("ada@example.com", "pw").await.expect("login");

    s.logout();
    assert_eq!(s.snapshot(), SessionState::default());
    assert_eq!(store.load(), None);
}

#[test]
fn logout_is_idempotent() {
    let fake = FakeApi::default();
    let store = MemoryTokenStore::default();
    let s = session(&fake, &store);
    s.logout();
    s.logout();
    assert!(!s.is_authenticated());
    assert_eq!(store.load(), None);
}

#[test]
fn clones_share_state() {
    let fake = FakeApi::default();
    let s = session(&fake, &MemoryTokenStore::with_token("tok"));
    let other = s.clone();
    other.logout();
    assert!(!s.is_authenticated());
}

// =============================================================
// profile refresh
// =============================================================

#[tokio::test]
async fn profile_failure_is_swallowed() {
    let fake = FakeApi::default();
    registered(&fake, "ada@example.com", "pw").await;
    fake.respond_once(Method::Get, "/users/me", Ok(ApiResponse::new(500, "")));
    let s = session(&fake, &MemoryTokenStore::default());

    s.login("ada@example.com", "pw").await.expect("login still succeeds");
    assert!(s.is_authenticated());
    assert!(s.snapshot().user.is_none());
}

#[tokio::test]
async fn profile_network_failure_is_swallowed() {
    let fake = FakeApi::default();
    let s = session(&fake, &MemoryTokenStore::with_token("tok"));
    fake.set_offline(true);
    s.refresh_profile().await;
    assert!(s.is_authenticated());
    assert!(s.snapshot().user.is_none());
}

#[tokio::test]
async fn refresh_when_logged_out_makes_no_request() {
    let fake = FakeApi::default();
    let s = session(&fake, &MemoryTokenStore::default());
    s.refresh_profile().await;
    assert_eq!(fake.count(Method::Get, "/users/me"), 0);
}

#[derive(Clone)]
struct GatedProfile {
    inner: FakeApi,
    gate: Rc<RefCell<Option<oneshot::Receiver<()>>>>,
}

impl Transport for GatedProfile {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        if request.url.ends_with("/users/me") {
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
        }
        self.inner.send(request).await
    }
}

#[tokio::test]
async fn profile_response_after_logout_is_dropped() {
    let fake = FakeApi::default();
    registered(&fake, "ada@example.com", "pw").await;
    let credential = fake.client().login("ada@example.com", "pw").await.expect("login");

    let (release, gate) = oneshot::channel();
    let transport = GatedProfile { inner: fake.clone(), gate: Rc::new(RefCell::new(Some(gate))) };
    let s = Session::restore(
        ApiClient::new(ApiConfig::new(FAKE_BASE), transport),
        MemoryTokenStore::with_token(credential.as_str()),
    );

    let refresh = s.refresh_profile();
    tokio::pin!(refresh);
    tokio::select! {
        biased;
        () = &mut refresh => panic!("refresh should wait on the gate"),
        () = tokio::task::yield_now() => {}
    }

    s.logout();
    release.send(()).expect("gate open");
    refresh.await;

    assert_eq!(fake.count(Method::Get, "/users/me"), 1);
    assert_eq!(s.snapshot(), SessionState::default());
}
