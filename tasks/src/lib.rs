//! Shared client core for the task manager.
//!
//! This crate owns everything both front ends need: wire types, the two
//! user-facing error kinds, the REST endpoint calls, the session store, the
//! task board model, auth form state, route decisions and timestamp display.
//! It has no UI dependency; the web app and the CLI inject their own
//! [`transport::Transport`] and [`storage::TokenStore`].
//!
//! CONSISTENCY
//! ===========
//! The board never patches its local copy. Every successful mutation is
//! followed by a full re-fetch of the collection, and the server ordering is
//! kept as-is.

pub mod api;
pub mod board;
pub mod config;
pub mod error;
pub mod forms;
pub mod guard;
pub mod session;
pub mod storage;
pub mod time;
pub mod transport;
pub mod types;

#[cfg(test)]
mod test_support;

pub use api::ApiClient;
pub use board::{TaskBoard, TaskBoardState, TaskDraft};
pub use config::ApiConfig;
pub use error::{AuthError, ResourceError, TransportError};
pub use forms::{AuthForm, Credentials};
pub use guard::{Access, Route};
pub use session::{Session, SessionState};
pub use storage::{MemoryTokenStore, TokenStore};
pub use time::format_timestamp;
pub use transport::{ApiRequest, ApiResponse, Method, Transport};
pub use types::{Credential, NewTask, ResourceId, Task, TaskUpdate, UserProfile};
