//! Build-time configuration for the API endpoint and router base path.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app is shipped as static WASM, so there is no runtime environment to
//! read. Values are baked in at compile time via `option_env!` and fall back
//! to defaults that match the dev proxy layout (`/api` proxied to the
//! backend, app served under `/frontend`). `Trunk.toml` sets up the same
//! layout for `trunk serve`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default task collection URL when `TODO_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "/api/tasks/";

/// Default router base path when `TODO_BASE_PATH` is not set at build time.
pub const DEFAULT_BASE_PATH: &str = "/frontend";

/// Browser console log level: verbose in debug builds, `Info` in release.
pub fn console_log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// `localStorage` key holding the dark mode preference.
pub const DARK_MODE_STORAGE_KEY: &str = "darkMode";

/// Resolved client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Task collection URL, always ending in `/`.
    pub api_url: String,
    /// Router base path without a trailing `/` (empty for the site root).
    pub base_path: String,
}

impl ClientConfig {
    /// Build the configuration from compile-time environment variables.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("TODO_API_URL"), option_env!("TODO_BASE_PATH"))
    }

    /// Build the configuration from optional overrides, applying defaults and
    /// normalization.
    pub fn new(api_url: Option<&str>, base_path: Option<&str>) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_URL);
        let base_path = base_path.map(str::trim).unwrap_or(DEFAULT_BASE_PATH);
        Self {
            api_url: with_trailing_slash(api_url),
            base_path: normalize_base_path(base_path),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(None, None)
    }
}

fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_owned()
    } else {
        format!("{url}/")
    }
}

fn normalize_base_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}
