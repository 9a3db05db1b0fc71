//! Item repository over an injected store.
//!
//! # Responsibility
//! - Provide stable list/exists/add/remove/clear APIs over the item list.
//! - Keep read-modify-write sequences within single calls.
//!
//! # Invariants
//! - `add` appends; insertion order is preserved by every operation.
//! - `remove` drops *all* entries equal to the given name. The list may
//!   legitimately contain duplicates produced via the edit path, and those
//!   fall together.

use crate::store::{ItemStore, StoreResult};
use log::info;

/// Repository wrapping an [`ItemStore`] with item-list semantics.
pub struct ItemRepository<S: ItemStore> {
    store: S,
}

impl<S: ItemStore> ItemRepository<S> {
    /// Creates a repository using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns all item names in insertion order.
    pub fn list(&self) -> StoreResult<Vec<String>> {
        self.store.load()
    }

    /// Returns whether `name` is present, using exact string equality.
    pub fn exists(&self, name: &str) -> StoreResult<bool> {
        Ok(self.store.load()?.iter().any(|item| item == name))
    }

    /// Appends `name` and persists. No validation at this layer.
    pub fn add(&self, name: &str) -> StoreResult<()> {
        let mut items = self.store.load()?;
        items.push(name.to_string());
        self.store.save(&items)?;
        info!(
            "event=item_add module=repo status=ok count={}",
            items.len()
        );
        Ok(())
    }

    /// Removes all entries equal to `name` and persists.
    pub fn remove(&self, name: &str) -> StoreResult<()> {
        let mut items = self.store.load()?;
        items.retain(|item| item != name);
        self.store.save(&items)?;
        info!(
            "event=item_remove module=repo status=ok count={}",
            items.len()
        );
        Ok(())
    }

    /// Drops the persisted value entirely.
    pub fn clear(&self) -> StoreResult<()> {
        self.store.clear()?;
        info!("event=item_clear module=repo status=ok");
        Ok(())
    }
}
