use super::*;

#[test]
fn defaults_match_dev_proxy_layout() {
    let config = ClientConfig::default();
    assert_eq!(config.api_url, "/api/tasks/");
    assert_eq!(config.base_path, "/frontend");
}

#[test]
fn api_url_gets_trailing_slash() {
    let config = ClientConfig::new(Some("https://example.com/api/tasks"), None);
    assert_eq!(config.api_url, "https://example.com/api/tasks/");
}

#[test]
fn api_url_with_trailing_slash_is_kept() {
    let config = ClientConfig::new(Some("/api/todo/"), None);
    assert_eq!(config.api_url, "/api/todo/");
}

#[test]
fn blank_api_url_falls_back_to_default() {
    let config = ClientConfig::new(Some("   "), None);
    assert_eq!(config.api_url, DEFAULT_API_URL);
}

#[test]
fn base_path_is_normalized() {
    assert_eq!(ClientConfig::new(None, Some("app/")).base_path, "/app");
    assert_eq!(ClientConfig::new(None, Some("/app")).base_path, "/app");
}

#[test]
fn root_base_path_becomes_empty() {
    assert_eq!(ClientConfig::new(None, Some("/")).base_path, "");
    assert_eq!(ClientConfig::new(None, Some("")).base_path, "");
}

// =============================================================
// Trunk dev-serve layout
// =============================================================

const TRUNK_TOML: &str = include_str!("../Trunk.toml");

#[test]
fn trunk_serves_under_default_base_path() {
    let expected = format!("public_url = \"{DEFAULT_BASE_PATH}/\"");
    assert!(TRUNK_TOML.lines().any(|l| l.trim() == expected), "{TRUNK_TOML}");
}

#[test]
fn trunk_proxies_default_api_prefix() {
    let backend = TRUNK_TOML
        .lines()
        .find_map(|l| l.trim().strip_prefix("backend = "))
        .map(|v| v.trim_matches('"'))
        .unwrap();
    assert!(backend.ends_with("/api/"), "{backend}");
    assert!(DEFAULT_API_URL.starts_with("/api/"));
}

// =============================================================
// Logging
// =============================================================

#[test]
fn console_log_level_follows_build_profile() {
    let expected = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    assert_eq!(console_log_level(), expected);
}
