//! Item Storage
//!
//! Persists the item list as a JSON array of strings under a single key.
//! Every write replaces the whole snapshot.

use crate::error::{ListError, ListResult};

/// Minimal key-value backend (browser `localStorage` or an in-memory map)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> ListResult<()>;
    fn remove(&self, key: &str);
}

/// `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> ListResult<()> {
        let storage = Self::storage()
            .ok_or_else(|| ListError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| ListError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(key) {
                log::warn!(target: "storage", "remove '{}' failed: {:?}", key, e);
            }
        }
    }
}

/// Storage adapter for the item list
#[derive(Debug, Clone)]
pub struct ItemStorage<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ItemStorage<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Persisted items; empty when nothing is stored or the snapshot is unreadable
    pub fn load(&self) -> Vec<String> {
        let Some(raw) = self.store.get(&self.key) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(items) => items,
            Err(e) => {
                log::warn!(target: "storage", "ignoring unreadable snapshot under '{}': {}", self.key, e);
                Vec::new()
            }
        }
    }

    pub fn save(&self, items: &[String]) -> ListResult<()> {
        let json = serde_json::to_string(items)?;
        self.store.set(&self.key, &json)
    }

    pub fn add(&self, item: &str) -> ListResult<()> {
        let mut items = self.load();
        items.push(item.to_string());
        self.save(&items)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.load().iter().any(|i| i == item)
    }

    /// Drops every entry equal to `item`
    pub fn remove(&self, item: &str) -> ListResult<()> {
        let mut items = self.load();
        items.retain(|i| i != item);
        self.save(&items)
    }

    /// Deletes the snapshot key itself
    pub fn clear(&self) {
        self.store.remove(&self.key);
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }
}
