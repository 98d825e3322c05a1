//! In-memory store for tests and ephemeral runs.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{Slot, StateStore, StoreError};

/// Slot store backed by a shared in-memory map.
///
/// Clones share the same map, so a component holding one handle sees
/// writes made through another.
#[derive(Clone, Default)]
pub struct MemoryStore {
    slots: Arc<RwLock<HashMap<Slot, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot, builder style.
    pub fn with_slot(self, slot: Slot, payload: impl Into<String>) -> Self {
        self.slots.write().unwrap().insert(slot, payload.into());
        self
    }

    /// Raw payload currently held by a slot (for test assertions).
    pub fn raw(&self, slot: Slot) -> Option<String> {
        self.slots.read().unwrap().get(&slot).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.read().unwrap().is_empty()
    }
}

impl StateStore for MemoryStore {
    fn read_slot(&self, slot: Slot) -> Result<Option<String>, StoreError> {
        Ok(self.slots.read().unwrap().get(&slot).cloned())
    }

    fn write_slot(&self, slot: Slot, payload: &str) -> Result<(), StoreError> {
        self.slots.write().unwrap().insert(slot, payload.to_string());
        Ok(())
    }

    fn erase_slot(&self, slot: Slot) -> Result<(), StoreError> {
        self.slots.write().unwrap().remove(&slot);
        Ok(())
    }
}
