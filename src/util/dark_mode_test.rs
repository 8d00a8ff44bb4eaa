use super::*;
use crate::util::storage::MemoryStorage;

#[test]
fn missing_preference_defaults_to_light() {
    assert!(!read_preference_from(&MemoryStorage::default()));
}

#[test]
fn unrecognised_value_is_light() {
    let store = MemoryStorage::default();
    store.set_item(DARK_MODE_STORAGE_KEY, "dark");
    assert!(!read_preference_from(&store));
}

#[test]
fn toggle_flips_boolean_value() {
    let store = MemoryStorage::default();
    assert!(toggle_in(&store, false));
    assert!(!toggle_in(&store, true));
}

#[test]
fn toggle_writes_string_flag() {
    let store = MemoryStorage::default();
    toggle_in(&store, false);
    assert_eq!(store.get_item(DARK_MODE_STORAGE_KEY).as_deref(), Some("true"));
    toggle_in(&store, true);
    assert_eq!(store.get_item(DARK_MODE_STORAGE_KEY).as_deref(), Some("false"));
}

#[test]
fn dark_preference_survives_reload() {
    let store = MemoryStorage::default();
    let initial = read_preference_from(&store);
    let dark = toggle_in(&store, initial);
    assert!(dark);

    // A reload re-initializes from storage only.
    assert!(read_preference_from(&store));
}

#[test]
fn theme_name_matches_flag() {
    assert_eq!(theme_name(true), "dark");
    assert_eq!(theme_name(false), "light");
}

#[cfg(not(feature = "csr"))]
#[test]
fn read_preference_is_false_in_native_tests() {
    assert!(!read_preference());
}

#[test]
fn apply_is_callable() {
    apply(false);
    apply(true);
}
