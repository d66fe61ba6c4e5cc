//! # taskdeck
//!
//! Leptos client-side-rendered frontend for the task manager API.
//!
//! The crate is a thin browser shell around the `tasks` core: it supplies a
//! `gloo-net` transport and a `localStorage` token store, mirrors core state
//! into signals, and renders the routed pages. All request, session and
//! board logic lives in `tasks`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Install browser logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
