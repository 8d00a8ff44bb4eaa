//! Key-value storage seam over browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Preferences are read at startup and written on change. Going through
//! [`KeyValueStore`] keeps web-sys glue in one place and lets native tests
//! simulate a reload with [`MemoryStorage`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Minimal string key-value store. Writes are best-effort.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
}

/// The browser's `window.localStorage`. Empty and write-only-to-nowhere when
/// no browser is available.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("localStorage write for {key} failed: {e:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}

/// In-memory store, used by tests and anywhere `localStorage` is absent.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }
}
