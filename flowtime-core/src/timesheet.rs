//! Append-only ledger of completed work sessions.

use crate::domain::TimeEntry;
use crate::store::{Slot, StateStore, StoreError};

/// The timesheet ledger.
///
/// Entries are only ever appended; there is no edit or removal. The
/// full sequence is written back to its slot after every append.
pub struct TimesheetLedger<S> {
    store: S,
    entries: Vec<TimeEntry>,
}

impl<S: StateStore> TimesheetLedger<S> {
    /// Load the ledger from its slot. A missing or unreadable slot
    /// yields an empty ledger.
    pub fn load(store: S) -> Result<Self, StoreError> {
        let entries = store
            .read::<Vec<TimeEntry>>(Slot::Timesheet)?
            .unwrap_or_default();
        Ok(Self { store, entries })
    }

    /// Entries in append order, oldest first.
    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn append(&mut self, entry: TimeEntry) -> Result<(), StoreError> {
        let mut staged = self.entries.clone();
        staged.push(entry);
        self.store.write(Slot::Timesheet, &staged)?;
        self.entries = staged;
        Ok(())
    }
}
