//! In-memory item store for tests and ephemeral sessions.

use super::{decode_items, encode_items, ItemStore, StoreResult};
use std::cell::RefCell;

/// Item store holding the serialized payload in memory.
///
/// Stores the same JSON text a real backend would, so payload decode
/// behavior (including malformed-data recovery) is exercised identically.
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    value: RefCell<Option<String>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with a raw payload, valid or not.
    pub fn with_raw_value(raw: impl Into<String>) -> Self {
        Self {
            value: RefCell::new(Some(raw.into())),
        }
    }

    /// Returns the raw persisted payload, if any.
    pub fn raw_value(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl ItemStore for MemoryItemStore {
    fn load(&self) -> StoreResult<Vec<String>> {
        Ok(self
            .value
            .borrow()
            .as_deref()
            .map(decode_items)
            .unwrap_or_default())
    }

    fn save(&self, items: &[String]) -> StoreResult<()> {
        *self.value.borrow_mut() = Some(encode_items(items)?);
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        *self.value.borrow_mut() = None;
        Ok(())
    }
}
