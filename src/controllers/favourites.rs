//! Favourite toggling: persist, confirm, and sync every favourite button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Cards rendered by this crate and static markup on other pages both tag
//! their favourite buttons with `data-fav-id`. After each toggle the
//! `FavouriteIndicator` brings all of them in line with the stored set.

#[cfg(test)]
#[path = "favourites_test.rs"]
mod favourites_test;

use std::rc::Rc;

use crate::bindings::ViewBindings;
use crate::controllers::toast::Toaster;
use crate::state::favourites::{FavouriteChange, FavouriteSet, FavouritesStore};
use crate::state::vehicle::VehicleId;
use crate::util::storage::KeyValueStore;

/// Reflects favourite membership on screen.
pub trait FavouriteIndicator {
    fn set_active(&self, id: &VehicleId, active: bool);
}

/// Toggles the `active` class on tagged elements in the document.
#[derive(Clone, Debug, Default)]
pub struct DomIndicator {
    #[cfg(feature = "csr")]
    fav_button: Option<web_sys::Element>,
}

impl DomIndicator {
    pub fn new(bindings: &ViewBindings) -> Self {
        #[cfg(feature = "csr")]
        {
            Self { fav_button: bindings.fav_button.clone() }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = bindings;
            Self {}
        }
    }
}

impl FavouriteIndicator for DomIndicator {
    fn set_active(&self, id: &VehicleId, active: bool) {
        #[cfg(feature = "csr")]
        {
            use crate::bindings::{FAV_ID_ATTR, fav_selector};
            use crate::util::dom::{query_all, set_class};

            for el in query_all(&fav_selector(&id.to_string())) {
                set_class(&el, "active", active);
            }
            // The detail page's button is only tagged by being on that
            // vehicle's page; tagged buttons were handled above.
            if let Some(button) = &self.fav_button {
                if !button.has_attribute(FAV_ID_ATTR) {
                    set_class(button, "active", active);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, active);
        }
    }
}

pub struct FavouritesController<S, I> {
    store: FavouritesStore<S>,
    toaster: Rc<Toaster>,
    indicator: I,
}

impl<S: KeyValueStore, I: FavouriteIndicator> FavouritesController<S, I> {
    pub fn new(store: FavouritesStore<S>, toaster: Rc<Toaster>, indicator: I) -> Self {
        Self { store, toaster, indicator }
    }

    pub fn get(&self) -> FavouriteSet {
        self.store.get()
    }

    pub fn is_favourite(&self, id: &VehicleId) -> bool {
        self.store.is_favourite(id)
    }

    /// Flip `id`, persist, confirm with a toast and update every button.
    pub fn toggle(&self, id: &VehicleId) -> FavouriteChange {
        let outcome = self.store.toggle(id);
        if let Some(e) = &outcome.save_error {
            log::warn!("favourite {id} not persisted: {e}");
        }
        let change = outcome.change;
        log::debug!("favourite {id}: {change:?} ({} total)", outcome.favourites.len());
        self.toaster.notify(change.message(), change.toast_kind());
        self.indicator.set_active(id, outcome.favourites.contains(id));
        change
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &FavouritesStore<S> {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn indicator(&self) -> &I {
        &self.indicator
    }
}
