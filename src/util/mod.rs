//! Browser helpers.

pub mod token_storage;
