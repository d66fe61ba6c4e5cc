//! `fetch`-backed [`Transport`] for the browser.
//!
//! ERROR HANDLING
//! ==============
//! Only failures to get a response at all (CORS, offline, unreadable body)
//! become [`TransportError`]; HTTP status handling stays in the core.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use tasks::{ApiRequest, ApiResponse, Transport, TransportError};

#[cfg(not(feature = "csr"))]
pub const UNAVAILABLE: &str = "browser transport requires the csr feature";

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::{Method, RequestBuilder};

            let method = match request.method {
                tasks::Method::Get => Method::GET,
                tasks::Method::Post => Method::POST,
                tasks::Method::Put => Method::PUT,
                tasks::Method::Delete => Method::DELETE,
            };
            let mut builder = RequestBuilder::new(&request.url).method(method);
            if let Some(authorization) = &request.authorization {
                builder = builder.header("Authorization", authorization);
            }
            let prepared = match request.body {
                Some(body) => builder.header("Content-Type", "application/json").body(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError::Network(e.to_string()))?;

            let response = prepared.send().await.map_err(|e| TransportError::Network(e.to_string()))?;
            let status = response.status();
            let body = response.text().await.map_err(|e| TransportError::Network(e.to_string()))?;
            Ok(ApiResponse::new(status, body))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(TransportError::Network(UNAVAILABLE.to_owned()))
        }
    }
}
