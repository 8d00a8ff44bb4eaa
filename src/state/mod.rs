//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`tasks`, `filter`, `ui`) so components can
//! depend on small focused models.

pub mod filter;
pub mod tasks;
pub mod ui;
