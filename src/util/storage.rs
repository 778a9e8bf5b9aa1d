//! Key-value persistence backing the theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`KeyValueStore`] is the seam between component state and browser
//! `localStorage`. Writes are best-effort: a full or disabled store only
//! loses the preference, never the page.

use std::collections::HashMap;

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store used off the browser.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.set(key, value);
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

/// Browser `localStorage`. Missing or blocked storage behaves as empty.
#[cfg(feature = "browser")]
#[derive(Clone, Debug, Default)]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "browser")]
impl LocalStorage {
    #[must_use]
    pub fn open() -> Self {
        let storage = match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(storage)) => storage,
            Some(Err(err)) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
            None => None,
        };
        Self { storage }
    }
}

#[cfg(feature = "browser")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.as_ref()?.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("localStorage read of {key} failed: {err:?}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::debug!("localStorage write of {key} failed: {err:?}");
        }
    }
}
