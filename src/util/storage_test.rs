use super::*;

#[test]
fn memory_storage_returns_what_was_set() {
    let storage = MemoryStorage::default();
    storage.set_item("k", "v");
    assert_eq!(storage.get_item("k").as_deref(), Some("v"));
}

#[test]
fn memory_storage_overwrites() {
    let storage = MemoryStorage::default();
    storage.set_item("k", "a");
    storage.set_item("k", "b");
    assert_eq!(storage.get_item("k").as_deref(), Some("b"));
}

#[test]
fn memory_storage_missing_key_is_none() {
    assert_eq!(MemoryStorage::default().get_item("nope"), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_is_empty_outside_browser() {
    LocalStorage.set_item("k", "v");
    assert_eq!(LocalStorage.get_item("k"), None);
}
