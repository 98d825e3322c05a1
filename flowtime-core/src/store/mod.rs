//! Durable slot storage for dashboard state.
//!
//! Every persisted concern owns one named slot holding a single JSON
//! document. A read of a missing slot yields `None`; a payload that no
//! longer deserializes is logged and treated as missing, so a damaged
//! slot degrades to first-run behavior instead of wedging startup.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// The persisted slots and their storage keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Roster,
    Timesheet,
    TimerState,
    Auth,
    CurrentPage,
    Theme,
}

impl Slot {
    pub const ALL: [Slot; 6] = [
        Slot::Roster,
        Slot::Timesheet,
        Slot::TimerState,
        Slot::Auth,
        Slot::CurrentPage,
        Slot::Theme,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Slot::Roster => "employees",
            Slot::Timesheet => "timeEntries",
            Slot::TimerState => "timeClockState",
            Slot::Auth => "isAdmin",
            Slot::CurrentPage => "currentPage",
            Slot::Theme => "theme",
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Key-value persistence boundary for the dashboard state.
///
/// Implementations only move raw strings; the typed helpers layer
/// serde_json on top so every caller persists the same way.
pub trait StateStore {
    fn read_slot(&self, slot: Slot) -> Result<Option<String>, StoreError>;
    fn write_slot(&self, slot: Slot, payload: &str) -> Result<(), StoreError>;
    fn erase_slot(&self, slot: Slot) -> Result<(), StoreError>;

    fn read<T: DeserializeOwned>(&self, slot: Slot) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.read_slot(slot)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!("Discarding malformed payload in slot {}: {}", slot.key(), e);
                Ok(None)
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&self, slot: Slot, value: &T) -> Result<(), StoreError> {
        let payload = serde_json::to_string(value)?;
        self.write_slot(slot, &payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_keys_are_distinct() {
        for (i, a) in Slot::ALL.iter().enumerate() {
            for b in &Slot::ALL[i + 1..] {
                assert_ne!(a.key(), b.key());
            }
        }
    }

    #[test]
    fn typed_read_round_trips() {
        let store = MemoryStore::new();
        store.write(Slot::Theme, &"dark").unwrap();
        let theme: Option<String> = store.read(Slot::Theme).unwrap();
        assert_eq!(theme.as_deref(), Some("dark"));
    }

    #[test]
    fn missing_slot_reads_as_none() {
        let store = MemoryStore::new();
        let value: Option<String> = store.read(Slot::Roster).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn malformed_payload_reads_as_none() {
        let store = MemoryStore::new();
        store.write_slot(Slot::TimerState, "{not json").unwrap();
        let value: Option<serde_json::Value> = store.read(Slot::TimerState).unwrap();
        assert!(value.is_none());
    }
}
