//! Key-value persistence backends.
//!
//! SYSTEM CONTEXT
//! ==============
//! The favourites store only needs string get/set under one key. `LocalStorage`
//! talks to `window.localStorage` in the browser build and degrades to an
//! empty, write-ignoring store elsewhere. `MemoryStorage` keeps values in
//! process for tests and for browsers that block `localStorage`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::SiteError;

/// Minimal string key-value store.
pub trait KeyValueStore {
    /// Raw value for `key`, or `None` when unset or unreadable.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Overwrite the value for `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<(), SiteError>;
}

/// Load a JSON value for `key`. Unset and malformed values both read as `None`.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get_item(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("discarding malformed value under {key}: {e}");
            None
        }
    }
}

/// Save a JSON value for `key`.
pub fn save_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) -> Result<(), SiteError> {
    let raw = serde_json::to_string(value).map_err(SiteError::StorageEncode)?;
    store.set_item(key, &raw)
}

/// Browser `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            Self::storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SiteError> {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = Self::storage() else {
                return Err(SiteError::StorageWrite { key: key.to_owned(), reason: "localStorage unavailable".into() });
            };
            storage
                .set_item(key, value)
                .map_err(|e| SiteError::StorageWrite { key: key.to_owned(), reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Store pre-seeded with one raw value.
    #[must_use]
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SiteError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
