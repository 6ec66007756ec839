use std::cell::RefCell;

use super::*;
use crate::config::DEFAULT_STORAGE_KEY;
use crate::state::toast::ToastKind;
use crate::util::storage::MemoryStorage;

#[derive(Default)]
struct RecordingIndicator {
    calls: RefCell<Vec<(VehicleId, bool)>>,
}

impl FavouriteIndicator for RecordingIndicator {
    fn set_active(&self, id: &VehicleId, active: bool) {
        self.calls.borrow_mut().push((id.clone(), active));
    }
}

fn controller(storage: MemoryStorage) -> (FavouritesController<MemoryStorage, RecordingIndicator>, Rc<Toaster>) {
    let toaster = Rc::new(Toaster::new(&ViewBindings::default(), 3500));
    let store = FavouritesStore::new(storage, DEFAULT_STORAGE_KEY);
    (FavouritesController::new(store, Rc::clone(&toaster), RecordingIndicator::default()), toaster)
}

#[test]
fn toggle_on_empty_store_adds_notifies_and_marks_active() {
    let (favs, toaster) = controller(MemoryStorage::default());
    let id = VehicleId::from(42);

    assert_eq!(favs.toggle(&id), FavouriteChange::Added);

    assert_eq!(favs.store().storage().get_item(DEFAULT_STORAGE_KEY).as_deref(), Some("[42]"));
    let toast = toaster.current().unwrap();
    assert_eq!(toast.text, "Added to favourites!");
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(*favs.indicator().calls.borrow(), vec![(id.clone(), true)]);
    assert!(favs.is_favourite(&id));
}

#[test]
fn toggle_existing_removes_and_notifies_neutrally() {
    let (favs, toaster) = controller(MemoryStorage::with_item(DEFAULT_STORAGE_KEY, "[42, 7]"));
    let id = VehicleId::from(42);

    assert_eq!(favs.toggle(&id), FavouriteChange::Removed);

    assert_eq!(favs.store().storage().get_item(DEFAULT_STORAGE_KEY).as_deref(), Some("[7]"));
    let toast = toaster.current().unwrap();
    assert_eq!(toast.text, "Removed from favourites");
    assert_eq!(toast.kind, ToastKind::Neutral);
    assert_eq!(*favs.indicator().calls.borrow(), vec![(id, false)]);
}

#[test]
fn toggle_pair_restores_membership_and_buttons() {
    let (favs, _toaster) = controller(MemoryStorage::default());
    let id = VehicleId::from("rav4");
    favs.toggle(&id);
    favs.toggle(&id);
    assert!(!favs.is_favourite(&id));
    assert!(favs.get().is_empty());
    assert_eq!(*favs.indicator().calls.borrow(), vec![(id.clone(), true), (id, false)]);
}
