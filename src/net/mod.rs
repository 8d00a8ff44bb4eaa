//! Networking modules for the task REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `api` performs the HTTP calls, and
//! `task_sync` turns one user intent into one call plus a state update.

pub mod api;
pub mod task_sync;
pub mod types;
