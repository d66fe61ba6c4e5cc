//! Error kinds surfaced to the views.
//!
//! Network failures, undecodable bodies and non-success statuses are all
//! converted into one of these at the call site. `Rejected` displays as the
//! bare server message so a view can show it verbatim.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// The request never produced an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("network request failed: {0}")]
    Network(String),
    #[error("could not encode request body: {0}")]
    Encode(String),
}

/// Registration or login failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Non-success status; `message` is the server `detail` or a fallback.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// A task collection call failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResourceError {
    /// Non-success status; `message` is the server `detail` or a fallback.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// Rejected locally before any request was made.
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl AuthError {
    /// HTTP status of a server rejection, if this was one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl ResourceError {
    /// HTTP status of a server rejection, if this was one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
