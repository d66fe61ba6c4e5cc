//! HTTP seam between the core and a concrete client.
//!
//! The browser build plugs in a `gloo-net` transport and the CLI a `reqwest`
//! one. Requests are fully resolved here (absolute URL, bearer header, JSON
//! text) so implementations stay a thin send-and-collect wrapper.

use crate::error::TransportError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A single outbound API call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Full `Authorization` header value, if the call is authenticated.
    pub authorization: Option<String>,
    /// JSON body text. Sent with `Content-Type: application/json`.
    pub body: Option<String>,
}

/// Status and raw body of a completed call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Any 2xx status, which includes `204 No Content`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns the response, whatever its status.
///
/// Only failures to obtain a response are errors; status handling belongs to
/// [`crate::api::ApiClient`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}
