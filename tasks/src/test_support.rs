//! In-memory stand-in for the task API, used by the async tests.
//!
//! Implements the handful of routes the client calls with the same statuses
//! and `detail` bodies the real server sends, and records every request so
//! tests can assert on call counts.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde_json::{Value, json};

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::error::TransportError;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

pub(crate) const FAKE_BASE: &str = "http://fake.test/api/v1";
pub(crate) const CREATED_AT: &str = "2024-05-01T09:30:00";

struct FakeUser {
    id: i64,
    email: String,
    password: String,
    role: String,
}

struct FakeTask {
    owner: i64,
    body: Value,
}

#[derive(Default)]
struct FakeState {
    users: Vec<FakeUser>,
    tokens: Vec<(String, i64)>,
    tasks: Vec<FakeTask>,
    next_id: i64,
    requests: Vec<ApiRequest>,
    overrides: VecDeque<(Method, String, Result<ApiResponse, TransportError>)>,
    offline: bool,
}

#[derive(Clone, Default)]
pub(crate) struct FakeApi {
    state: Rc<RefCell<FakeState>>,
}

impl FakeApi {
    pub(crate) fn client(&self) -> ApiClient<FakeApi> {
        ApiClient::new(ApiConfig::new(FAKE_BASE), self.clone())
    }

    /// Answer the next `method path` call with `response` instead of routing it.
    pub(crate) fn respond_once(&self, method: Method, path: &str, response: Result<ApiResponse, TransportError>) {
        self.state.borrow_mut().overrides.push_back((method, path.to_owned(), response));
    }

    pub(crate) fn set_offline(&self, offline: bool) {
        self.state.borrow_mut().offline = offline;
    }

    pub(crate) fn count(&self, method: Method, path: &str) -> usize {
        let url = format!("{FAKE_BASE}{path}");
        self.state.borrow().requests.iter().filter(|r| r.method == method && r.url == url).count()
    }

    /// Create, update and delete calls against the task collection.
    pub(crate) fn task_mutation_count(&self) -> usize {
        let prefix = format!("{FAKE_BASE}/tasks");
        self.state
            .borrow()
            .requests
            .iter()
            .filter(|r| r.url.starts_with(&prefix) && matches!(r.method, Method::Post | Method::Put | Method::Delete))
            .count()
    }

    pub(crate) fn last_request(&self) -> Option<ApiRequest> {
        self.state.borrow().requests.last().cloned()
    }

    fn route(&self, method: Method, path: &str, request: &ApiRequest) -> ApiResponse {
        let body: Value = request.body.as_deref().and_then(|b| serde_json::from_str(b).ok()).unwrap_or(Value::Null);
        match (method, path) {
            (Method::Post, "/auth/register") => self.register(&body),
            (Method::Post, "/auth/login") => self.login(&body),
            _ => {
                let Some(user_id) = self.authenticate(request) else {
                    return reply(401, &json!({ "detail": "Not authenticated" }));
                };
                self.route_authenticated(method, path, user_id, &body)
            }
        }
    }

    fn route_authenticated(&self, method: Method, path: &str, user_id: i64, body: &Value) -> ApiResponse {
        match (method, path) {
            (Method::Get, "/users/me") => {
                let state = self.state.borrow();
                let Some(user) = state.users.iter().find(|u| u.id == user_id) else {
                    return reply(404, &json!({ "detail": "User not found" }));
                };
                reply(200, &json!({ "id": user.id, "email": user.email, "role": user.role, "is_active": true }))
            }
            (Method::Get, "/tasks") => {
                let state = self.state.borrow();
                let items: Vec<Value> =
                    state.tasks.iter().filter(|t| t.owner == user_id).map(|t| t.body.clone()).collect();
                reply(200, &Value::Array(items))
            }
            (Method::Post, "/tasks") => {
                let mut state = self.state.borrow_mut();
                state.next_id += 1;
                let task = json!({
                    "id": state.next_id,
                    "title": body.get("title").cloned().unwrap_or(Value::Null),
                    "description": body.get("description").cloned().unwrap_or(Value::Null),
                    "status": body.get("status").cloned().unwrap_or_else(|| json!("pending")),
                    "owner_id": user_id,
                    "created_at": CREATED_AT,
                    "updated_at": CREATED_AT,
                });
                state.tasks.push(FakeTask { owner: user_id, body: task.clone() });
                reply(201, &task)
            }
            _ => self.route_task(method, path, user_id, body),
        }
    }

    fn route_task(&self, method: Method, path: &str, user_id: i64, body: &Value) -> ApiResponse {
        let Some(task_id) = path.strip_prefix("/tasks/").and_then(|id| id.parse::<i64>().ok()) else {
            return reply(404, &json!({ "detail": "Not Found" }));
        };
        let mut state = self.state.borrow_mut();
        let Some(index) =
            state.tasks.iter().position(|t| t.owner == user_id && t.body.get("id") == Some(&json!(task_id)))
        else {
            return reply(404, &json!({ "detail": "Task not found" }));
        };
        match method {
            Method::Get => reply(200, &state.tasks[index].body.clone()),
            Method::Put => {
                let task = &mut state.tasks[index].body;
                if let (Some(fields), Some(target)) = (body.as_object(), task.as_object_mut()) {
                    for (key, value) in fields {
                        target.insert(key.clone(), value.clone());
                    }
                }
                reply(200, task)
            }
            Method::Delete => {
                state.tasks.remove(index);
                ApiResponse::new(204, "")
            }
            Method::Post => reply(405, &json!({ "detail": "Method Not Allowed" })),
        }
    }

    fn register(&self, body: &Value) -> ApiResponse {
        let email = body.get("email").and_then(Value::as_str).unwrap_or_default().to_owned();
        let password = body.get("password").and_then(Value::as_str).unwrap_or_default().to_owned();
        let role = body.get("role").and_then(Value::as_str).unwrap_or("user").to_owned();
        let mut state = self.state.borrow_mut();
        if state.users.iter().any(|u| u.email == email) {
            return reply(400, &json!({ "detail": "Email already registered" }));
        }
        state.next_id += 1;
        let id = state.next_id;
        state.users.push(FakeUser { id, email: email.clone(), password, role: role.clone() });
        reply(201, &json!({ "id": id, "email": email, "role": role, "is_active": true }))
    }

    fn login(&self, body: &Value) -> ApiResponse {
        let email = body.get("email").and_then(Value::as_str).unwrap_or_default();
        let password = body.get("password").and_then(Value::as_str).unwrap_or_default();
        let mut state = self.state.borrow_mut();
        let Some(user_id) = state.users.iter().find(|u| u.email == email && u.password == password).map(|u| u.id)
        else {
            return reply(401, &json!({ "detail": "Invalid credentials" }));
        };
        let token = format!("token-{user_id}-{}", state.tokens.len());
        state.tokens.push((token.clone(), user_id));
        reply(200, &json!({ "access_token": token, "token_type": "bearer" }))
    }

    fn authenticate(&self, request: &ApiRequest) -> Option<i64> {
        let token = request.authorization.as_deref()?.strip_prefix("Bearer ")?;
        self.state.borrow().tokens.iter().find(|(t, _)| t == token).map(|(_, id)| *id)
    }
}

impl Transport for FakeApi {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.state.borrow_mut().requests.push(request.clone());
        if self.state.borrow().offline {
            return Err(TransportError::Network("connection refused".to_owned()));
        }
        let path = request.url.strip_prefix(FAKE_BASE).unwrap_or(&request.url).to_owned();
        let overridden = {
            let mut state = self.state.borrow_mut();
            let position = state.overrides.iter().position(|(m, p, _)| *m == request.method && *p == path);
            position.and_then(|i| state.overrides.remove(i)).map(|(_, _, response)| response)
        };
        if let Some(response) = overridden {
            return response;
        }
        Ok(self.route(request.method, &path, &request))
    }
}

pub(crate) fn reply(status: u16, body: &Value) -> ApiResponse {
    ApiResponse::new(status, body.to_string())
}
