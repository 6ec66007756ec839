use super::*;
use crate::config::DEFAULT_STORAGE_KEY;
use crate::util::storage::MemoryStorage;

fn store() -> FavouritesStore<MemoryStorage> {
    FavouritesStore::new(MemoryStorage::default(), DEFAULT_STORAGE_KEY)
}

fn seeded(raw: &str) -> FavouritesStore<MemoryStorage> {
    FavouritesStore::new(MemoryStorage::with_item(DEFAULT_STORAGE_KEY, raw), DEFAULT_STORAGE_KEY)
}

// =============================================================
// FavouriteSet
// =============================================================

#[test]
fn set_insert_ignores_duplicates() {
    let mut set = FavouriteSet::default();
    assert!(set.insert(VehicleId::from(1)));
    assert!(!set.insert(VehicleId::from(1)));
    assert_eq!(set.len(), 1);
}

#[test]
fn set_collapses_duplicates_on_deserialize() {
    let set: FavouriteSet = serde_json::from_str("[3, 1, 3, \"x\", 1]").unwrap();
    let ids: Vec<_> = set.iter().cloned().collect();
    assert_eq!(ids, vec![VehicleId::from(3), VehicleId::from(1), VehicleId::from("x")]);
}

#[test]
fn set_toggle_reports_change() {
    let mut set = FavouriteSet::default();
    assert_eq!(set.toggle(&VehicleId::from(9)), FavouriteChange::Added);
    assert_eq!(set.toggle(&VehicleId::from(9)), FavouriteChange::Removed);
    assert!(set.is_empty());
}

#[test]
fn change_maps_to_toast_text_and_kind() {
    assert_eq!(FavouriteChange::Added.message(), "Added to favourites!");
    assert_eq!(FavouriteChange::Added.toast_kind(), ToastKind::Success);
    assert_eq!(FavouriteChange::Removed.message(), "Removed from favourites");
    assert_eq!(FavouriteChange::Removed.toast_kind(), ToastKind::Neutral);
    assert!(FavouriteChange::Added.is_active());
    assert!(!FavouriteChange::Removed.is_active());
}

// =============================================================
// FavouritesStore
// =============================================================

#[test]
fn get_on_unset_store_is_empty() {
    assert!(store().get().is_empty());
}

#[test]
fn get_on_corrupted_value_is_empty() {
    assert!(seeded("{not json").get().is_empty());
    assert!(seeded("{\"id\": 1}").get().is_empty());
}

#[test]
fn get_drops_only_unusable_elements() {
    let set = seeded("[1, null, \"b\", true, 1.5, {}, 2]").get();
    let ids: Vec<_> = set.iter().cloned().collect();
    assert_eq!(ids, vec![VehicleId::from(1), VehicleId::from("b"), VehicleId::from(2)]);
}

#[test]
fn toggle_keeps_valid_favourites_beside_a_bad_element() {
    let store = seeded("[1, 2, null]");
    let outcome = store.toggle(&VehicleId::from(5));
    assert_eq!(outcome.change, FavouriteChange::Added);
    assert!(store.is_favourite(&VehicleId::from(1)));
    assert!(store.is_favourite(&VehicleId::from(2)));
    assert_eq!(store.storage().get_item(DEFAULT_STORAGE_KEY).as_deref(), Some("[1,2,5]"));
}

#[test]
fn save_overwrites_previous_contents() {
    let store = seeded("[1,2,3]");
    let set = FavouriteSet::from(vec![VehicleId::from("z")]);
    store.save(&set).unwrap();
    assert_eq!(store.storage().get_item(DEFAULT_STORAGE_KEY).as_deref(), Some("[\"z\"]"));
}

#[test]
fn toggle_on_empty_store_persists_single_id() {
    let store = store();
    let outcome = store.toggle(&VehicleId::from(42));
    assert_eq!(outcome.change, FavouriteChange::Added);
    assert!(outcome.save_error.is_none());
    assert_eq!(store.storage().get_item(DEFAULT_STORAGE_KEY).as_deref(), Some("[42]"));
    assert!(store.is_favourite(&VehicleId::from(42)));
}

#[test]
fn toggle_twice_restores_membership() {
    let store = seeded("[7, \"a\"]");
    let before = store.get();
    for id in [VehicleId::from(7), VehicleId::from(8), VehicleId::from("a")] {
        let was = store.is_favourite(&id);
        store.toggle(&id);
        assert_ne!(store.is_favourite(&id), was);
        store.toggle(&id);
        assert_eq!(store.is_favourite(&id), was);
    }
    let after = store.get();
    for id in before.iter() {
        assert!(after.contains(id));
    }
    assert_eq!(after.len(), before.len());
}

#[test]
fn toggle_recovers_from_corrupted_value() {
    let store = seeded("oops");
    let outcome = store.toggle(&VehicleId::from(1));
    assert_eq!(outcome.change, FavouriteChange::Added);
    assert_eq!(store.storage().get_item(DEFAULT_STORAGE_KEY).as_deref(), Some("[1]"));
}

#[test]
fn is_favourite_uses_strict_id_equality() {
    let store = seeded("[42]");
    assert!(store.is_favourite(&VehicleId::from(42)));
    assert!(!store.is_favourite(&VehicleId::from("42")));
}
