//! Favourites set and its persistent store.
//!
//! DESIGN
//! ======
//! The set is a JSON array under one storage key. Reads fail soft (unset or
//! malformed data is an empty set); writes overwrite the whole array. A bad
//! element inside an otherwise valid array is dropped on its own, so one
//! stray value never costs the rest of the list. The store is the only code
//! that knows the key.

#[cfg(test)]
#[path = "favourites_test.rs"]
mod favourites_test;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;
use crate::state::toast::ToastKind;
use crate::state::vehicle::VehicleId;
use crate::util::storage::{KeyValueStore, load_json, save_json};

/// Favourite vehicle ids in insertion order, without duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<serde_json::Value>", into = "Vec<VehicleId>")]
pub struct FavouriteSet {
    ids: Vec<VehicleId>,
}

impl From<Vec<VehicleId>> for FavouriteSet {
    fn from(raw: Vec<VehicleId>) -> Self {
        let mut set = Self::default();
        for id in raw {
            set.insert(id);
        }
        set
    }
}

impl From<Vec<serde_json::Value>> for FavouriteSet {
    fn from(raw: Vec<serde_json::Value>) -> Self {
        let mut set = Self::default();
        for (index, entry) in raw.into_iter().enumerate() {
            match serde_json::from_value::<VehicleId>(entry) {
                Ok(id) => {
                    set.insert(id);
                }
                Err(e) => log::warn!("skipping stored favourite {index}: {e}"),
            }
        }
        set
    }
}

impl From<FavouriteSet> for Vec<VehicleId> {
    fn from(set: FavouriteSet) -> Self {
        set.ids
    }
}

impl FavouriteSet {
    #[must_use]
    pub fn contains(&self, id: &VehicleId) -> bool {
        self.ids.contains(id)
    }

    /// Add `id`; returns `false` when it was already present.
    pub fn insert(&mut self, id: VehicleId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove `id`; returns `false` when it was not present.
    pub fn remove(&mut self, id: &VehicleId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        self.ids.len() != before
    }

    /// Flip membership of `id`.
    pub fn toggle(&mut self, id: &VehicleId) -> FavouriteChange {
        if self.remove(id) {
            FavouriteChange::Removed
        } else {
            self.ids.push(id.clone());
            FavouriteChange::Added
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &VehicleId> {
        self.ids.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Outcome of a toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavouriteChange {
    Added,
    Removed,
}

impl FavouriteChange {
    /// Whether the id is a favourite after the change.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Added)
    }

    /// Confirmation text shown in the toast.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Added => "Added to favourites!",
            Self::Removed => "Removed from favourites",
        }
    }

    #[must_use]
    pub fn toast_kind(self) -> ToastKind {
        match self {
            Self::Added => ToastKind::Success,
            Self::Removed => ToastKind::Neutral,
        }
    }
}

/// Result of [`FavouritesStore::toggle`].
#[derive(Debug)]
pub struct ToggleOutcome {
    pub change: FavouriteChange,
    pub favourites: FavouriteSet,
    /// Set when the updated set could not be written back.
    pub save_error: Option<SiteError>,
}

/// Favourites persisted in a key-value store.
#[derive(Debug)]
pub struct FavouritesStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> FavouritesStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    /// Current favourites; empty when unset or unreadable.
    pub fn get(&self) -> FavouriteSet {
        load_json(&self.storage, &self.key).unwrap_or_default()
    }

    /// Overwrite the stored favourites with `set`.
    pub fn save(&self, set: &FavouriteSet) -> Result<(), SiteError> {
        save_json(&self.storage, &self.key, set)
    }

    /// Flip membership of `id` and persist the result.
    pub fn toggle(&self, id: &VehicleId) -> ToggleOutcome {
        let mut favourites = self.get();
        let change = favourites.toggle(id);
        let save_error = self.save(&favourites).err();
        ToggleOutcome { change, favourites, save_error }
    }

    pub fn is_favourite(&self, id: &VehicleId) -> bool {
        self.get().contains(id)
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }
}
