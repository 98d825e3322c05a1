use std::path::{Path, PathBuf};

use super::{Slot, StateStore, StoreError};

/// Slot store keeping one JSON file per slot under a root directory.
///
/// File names are the slot keys, e.g. `employees.json`. The root
/// directory is created on first write.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, slot: Slot) -> PathBuf {
        self.root.join(format!("{}.json", slot.key()))
    }
}

impl StateStore for JsonFileStore {
    fn read_slot(&self, slot: Slot) -> Result<Option<String>, StoreError> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }

        let payload = std::fs::read_to_string(&path)?;
        if payload.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(payload))
    }

    fn write_slot(&self, slot: Slot, payload: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.slot_path(slot), payload)?;
        Ok(())
    }

    fn erase_slot(&self, slot: Slot) -> Result<(), StoreError> {
        let path = self.slot_path(slot);
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}
