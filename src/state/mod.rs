//! Reactive state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `tasks` core objects are single-threaded (`Rc<RefCell<_>>`), so each
//! one is kept in a local `StoredValue` and paired with an `RwSignal` copy of
//! its state. Views read the signal; actions run on the core object and then
//! copy its snapshot back into the signal.

pub mod board;
pub mod session;
