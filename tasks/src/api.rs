//! REST endpoint calls.
//!
//! Each method maps one API route to a typed result. Non-success statuses are
//! turned into [`AuthError`]/[`ResourceError`] using the body's `detail` field
//! when it has one, else a fixed per-operation fallback message.
//!
//! ERROR HANDLING
//! ==============
//! `detail` is usually a string. Validation failures send a list of
//! `{ "msg": ... }` objects instead; the first `msg` is used.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{AuthError, ResourceError, TransportError};
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};
use crate::types::{
    Credential, DEFAULT_ROLE, LoginRequest, NewTask, RegisterRequest, ResourceId, Task, TaskUpdate, TokenResponse,
    UserProfile,
};

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const PROFILE_FAILED: &str = "Failed to load profile";
pub const LOAD_TASKS_FAILED: &str = "Failed to load tasks";
pub const FETCH_TASK_FAILED: &str = "Failed to load task";
pub const CREATE_TASK_FAILED: &str = "Failed to create task";
pub const UPDATE_TASK_FAILED: &str = "Failed to update task";
pub const DELETE_TASK_FAILED: &str = "Failed to delete task";

/// Typed client for the task API over an injected [`Transport`].
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    config: ApiConfig,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    #[must_use]
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// `POST /auth/register` with the default role. Does not log in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] on network failure, non-success status, or an
    /// undecodable account payload.
    pub async fn register(&self, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        let body = encode(&RegisterRequest { email, password, role: DEFAULT_ROLE })?;
        let resp = self.call(Method::Post, "/auth/register", None, Some(body)).await?;
        if !resp.is_success() {
            return Err(AuthError::Rejected {
                status: resp.status,
                message: rejection_message(&resp, REGISTRATION_FAILED),
            });
        }
        decode(&resp).map_err(AuthError::Decode)
    }

    /// `POST /auth/login`, returning the issued bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] on network failure, non-success status, or a
    /// response without a usable `access_token`.
    pub async fn login(&self, email: &str, password: &str) -> Result<Credential, AuthError> {
        let body = encode(&LoginRequest { email, password })?;
        let resp = self.call(Method::Post, "/auth/login", None, Some(body)).await?;
        if !resp.is_success() {
            return Err(AuthError::Rejected { status: resp.status, message: rejection_message(&resp, LOGIN_FAILED) });
        }
        let token: TokenResponse = decode(&resp).map_err(AuthError::Decode)?;
        Credential::new(token.access_token).ok_or_else(|| AuthError::Decode("empty access_token".to_owned()))
    }

    /// `GET /users/me`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on any failure. The session store swallows it.
    pub async fn current_user(&self, credential: &Credential) -> Result<UserProfile, ResourceError> {
        let resp = self.call(Method::Get, "/users/me", Some(credential), None).await?;
        expect_json(&resp, PROFILE_FAILED)
    }

    /// `GET /tasks`, in server order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on network failure, non-success status, or an
    /// undecodable collection.
    pub async fn list_tasks(&self, credential: &Credential) -> Result<Vec<Task>, ResourceError> {
        let resp = self.call(Method::Get, "/tasks", Some(credential), None).await?;
        expect_json(&resp, LOAD_TASKS_FAILED)
    }

    /// `GET /tasks/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on network failure, non-success status, or an
    /// undecodable task.
    pub async fn fetch_task(&self, credential: &Credential, id: &ResourceId) -> Result<Task, ResourceError> {
        let resp = self.call(Method::Get, &task_path(id), Some(credential), None).await?;
        expect_json(&resp, FETCH_TASK_FAILED)
    }

    /// `POST /tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on network failure, non-success status, or an
    /// undecodable created task.
    pub async fn create_task(&self, credential: &Credential, task: &NewTask) -> Result<Task, ResourceError> {
        let body = encode(task)?;
        let resp = self.call(Method::Post, "/tasks", Some(credential), Some(body)).await?;
        expect_json(&resp, CREATE_TASK_FAILED)
    }

    /// `PUT /tasks/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on network failure, non-success status, or an
    /// undecodable updated task.
    pub async fn update_task(
        &self,
        credential: &Credential,
        id: &ResourceId,
        update: &TaskUpdate,
    ) -> Result<Task, ResourceError> {
        let body = encode(update)?;
        let resp = self.call(Method::Put, &task_path(id), Some(credential), Some(body)).await?;
        expect_json(&resp, UPDATE_TASK_FAILED)
    }

    /// `DELETE /tasks/{id}`. Any 2xx, including `204 No Content`, succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on network failure or non-success status.
    pub async fn delete_task(&self, credential: &Credential, id: &ResourceId) -> Result<(), ResourceError> {
        let resp = self.call(Method::Delete, &task_path(id), Some(credential), None).await?;
        if resp.is_success() {
            return Ok(());
        }
        Err(ResourceError::Rejected { status: resp.status, message: rejection_message(&resp, DELETE_TASK_FAILED) })
    }

    async fn call(
        &self,
        method: Method,
        path: &str,
        credential: Option<&Credential>,
        body: Option<String>,
    ) -> Result<ApiResponse, TransportError> {
        let request = ApiRequest {
            method,
            url: self.config.endpoint(path),
            authorization: credential.map(Credential::bearer),
            body,
        };
        let result = self.transport.send(request).await;
        match &result {
            Ok(resp) => log::debug!("{} {path} -> {}", method.as_str(), resp.status),
            Err(err) => log::debug!("{} {path} failed: {err}", method.as_str()),
        }
        result
    }
}

fn task_path(id: &ResourceId) -> String {
    format!("/tasks/{id}")
}

fn encode<B: Serialize>(body: &B) -> Result<String, TransportError> {
    serde_json::to_string(body).map_err(|e| TransportError::Encode(e.to_string()))
}

fn decode<R: DeserializeOwned>(resp: &ApiResponse) -> Result<R, String> {
    serde_json::from_str(&resp.body).map_err(|e| e.to_string())
}

fn expect_json<R: DeserializeOwned>(resp: &ApiResponse, fallback: &str) -> Result<R, ResourceError> {
    if !resp.is_success() {
        return Err(ResourceError::Rejected { status: resp.status, message: rejection_message(resp, fallback) });
    }
    decode(resp).map_err(ResourceError::Decode)
}

fn rejection_message(resp: &ApiResponse, fallback: &str) -> String {
    error_detail(&resp.body).unwrap_or_else(|| fallback.to_owned())
}

/// Human-readable `detail` from an error body, if there is one.
pub(crate) fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
        Value::Array(items) => items.iter().find_map(|item| item.get("msg").and_then(Value::as_str)).map(str::to_owned),
        _ => None,
    }
}
