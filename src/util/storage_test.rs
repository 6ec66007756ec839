use super::*;

#[test]
fn memory_storage_round_trips_raw_values() {
    let store = MemoryStorage::default();
    assert_eq!(store.get_item("k"), None);
    store.set_item("k", "v").unwrap();
    assert_eq!(store.get_item("k").as_deref(), Some("v"));
    store.set_item("k", "w").unwrap();
    assert_eq!(store.get_item("k").as_deref(), Some("w"));
}

#[test]
fn load_json_returns_none_for_unset_key() {
    let store = MemoryStorage::default();
    assert_eq!(load_json::<Vec<i64>>(&store, "missing"), None);
}

#[test]
fn load_json_returns_none_for_malformed_value() {
    let store = MemoryStorage::with_item("k", "[1, 2");
    assert_eq!(load_json::<Vec<i64>>(&store, "k"), None);
}

#[test]
fn save_json_writes_compact_json() {
    let store = MemoryStorage::default();
    save_json(&store, "k", &vec![1, 2, 3]).unwrap();
    assert_eq!(store.get_item("k").as_deref(), Some("[1,2,3]"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_is_inert_off_browser() {
    let store = LocalStorage;
    assert!(store.set_item("k", "v").is_ok());
    assert_eq!(store.get_item("k"), None);
}
