//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shell chrome and the task list while reading shared
//! state from Leptos context providers.

pub mod auth_fields;
pub mod guard;
pub mod nav;
pub mod task_card;
