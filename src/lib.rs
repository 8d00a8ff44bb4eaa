//! # todo-frontend
//!
//! Leptos + WASM single-page to-do client for a remote `/api/tasks/` REST
//! resource. The server owns every task; this crate keeps a local mirror,
//! issues one request per user action, and applies each confirmed response.
//! A dark mode preference is kept in `localStorage`.
//!
//! Browser-only code sits behind the `csr` feature so the state and sync
//! logic can be tested natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: logging, panic hook, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(config::console_log_level()).is_ok() {
        log::debug!("initialized logging");
    }
    leptos::mount::mount_to_body(app::App);
}
