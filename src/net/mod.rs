//! Network layer for communicating with the task API.
//!
//! The browser build sends requests with `gloo-net`; without the `csr`
//! feature every request fails with a transport error.

pub mod transport;
