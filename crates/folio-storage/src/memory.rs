//! In-memory slot store
//!
//! Nothing written here outlives the process. Used by tests and as the
//! fallback when the preferences file cannot be opened.

use dashmap::DashMap;
use tracing::trace;

use crate::SlotStore;
use crate::error::StorageError;

/// In-memory implementation of SlotStore
#[derive(Debug, Default)]
pub struct InMemorySlotStore {
    slots: DashMap<String, String>,
}

impl InMemorySlotStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given slots
    pub fn with_slots<K, V>(slots: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        for (slot, value) in slots {
            store.slots.insert(slot.into(), value.into());
        }
        store
    }

    /// Number of slots currently held
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no slot is held
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl SlotStore for InMemorySlotStore {
    fn get(&self, slot: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(slot).map(|value| value.clone()))
    }

    fn set(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        trace!(slot, value, "Setting in-memory slot");
        self.slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<(), StorageError> {
        self.slots.remove(slot);
        Ok(())
    }
}
