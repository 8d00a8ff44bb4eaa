//! Top-level routed pages.

pub mod todo;
