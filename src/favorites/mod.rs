//! Persisted set of favorite recipe ids.
//!
//! The set is loaded once, mutated on toggle and written back after every
//! mutation. Persistence is best-effort: a missing or malformed blob loads
//! as the empty set, and a failed write leaves the in-memory set as the
//! source of truth for the rest of the session.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

/// Recipe ids marked as favorite. Serialized as a JSON array of integers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoritesSet {
    ids: BTreeSet<u32>,
}

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a persisted blob, returning `None` if it is not a JSON array
    /// of non-negative integers.
    pub fn from_blob(blob: &str) -> Option<Self> {
        serde_json::from_str(blob).ok()
    }

    pub fn to_blob(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn insert(&mut self, id: u32) -> bool {
        self.ids.insert(id)
    }

    pub fn remove(&mut self, id: u32) -> bool {
        self.ids.remove(&id)
    }

    /// Flips membership and returns the new state.
    pub fn toggle(&mut self, id: u32) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<u32> for FavoritesSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        FavoritesSet {
            ids: iter.into_iter().collect(),
        }
    }
}

/// A [`FavoritesSet`] bound to the store and key it persists to.
#[derive(Debug)]
pub struct Favorites<S> {
    store: S,
    key: String,
    set: FavoritesSet,
}

impl<S: KeyValueStore> Favorites<S> {
    /// Loads the set stored under `key`. Never fails.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let set = match store.get(&key) {
            Some(blob) => FavoritesSet::from_blob(&blob).unwrap_or_else(|| {
                tracing::warn!("Ignoring malformed favorites data under {:?}", key);
                FavoritesSet::new()
            }),
            None => FavoritesSet::new(),
        };
        tracing::debug!("Loaded {} favorites", set.len());

        Favorites { store, key, set }
    }

    pub fn set(&self) -> &FavoritesSet {
        &self.set
    }

    pub fn contains(&self, id: u32) -> bool {
        self.set.contains(id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Writes the current set to the store.
    pub fn save(&mut self) -> Result<(), StoreError> {
        self.store.set(&self.key, &self.set.to_blob())
    }

    /// Flips membership of `id`, persists immediately and returns the new
    /// membership. A failed write is logged and otherwise ignored.
    pub fn toggle(&mut self, id: u32) -> bool {
        let now_favorite = self.set.toggle(id);
        if let Err(e) = self.save() {
            tracing::warn!("Failed to persist favorites: {}", e);
        }
        now_favorite
    }
}
