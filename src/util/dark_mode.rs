//! Dark mode initialization and toggle.
//!
//! Reads the preference from storage and applies a `data-theme` attribute to
//! the `<html>` element. Toggle writes back to storage and updates that
//! attribute. The stored value is the string `"true"` or `"false"`; anything
//! else, or nothing, means light.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::storage::{KeyValueStore, LocalStorage};
use crate::config::DARK_MODE_STORAGE_KEY;

/// Read the dark mode preference from `store`. Defaults to `false`.
pub fn read_preference_from(store: &impl KeyValueStore) -> bool {
    store
        .get_item(DARK_MODE_STORAGE_KEY)
        .is_some_and(|val| val == "true")
}

/// Persist `enabled` to `store`.
pub fn write_preference_to(store: &impl KeyValueStore, enabled: bool) {
    store.set_item(DARK_MODE_STORAGE_KEY, if enabled { "true" } else { "false" });
}

/// Read the dark mode preference from `localStorage`.
pub fn read_preference() -> bool {
    read_preference_from(&LocalStorage)
}

/// Attribute value for the `<html data-theme>` attribute.
pub fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme_name(enabled));
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// Flip `current`, persist it to `store`, and apply it to the document.
pub fn toggle_in(store: &impl KeyValueStore, current: bool) -> bool {
    let next = !current;
    apply(next);
    write_preference_to(store, next);
    next
}

/// Toggle dark mode and persist the new preference to `localStorage`.
pub fn toggle(current: bool) -> bool {
    toggle_in(&LocalStorage, current)
}
