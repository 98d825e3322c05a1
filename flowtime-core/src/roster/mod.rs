//! Employee repository and the roster list operations.

mod filter;
mod sort;

pub use filter::RosterFilter;
pub use sort::{RosterSort, SortDirection, SortKey};

use time::{Date, OffsetDateTime};

use crate::domain::{Employee, EmployeeUpdate, NewEmployee};
use crate::error::Error;
use crate::store::{Slot, StateStore, StoreError};

/// The employee repository.
///
/// Holds the working copy of the roster and writes the full list back
/// to its slot after every mutation. Mutations stage the new list,
/// persist it, and only then replace the working copy, so a failed
/// write leaves the roster as it was.
pub struct EmployeeRoster<S> {
    store: S,
    employees: Vec<Employee>,
    next_id: u32,
}

impl<S: StateStore> EmployeeRoster<S> {
    /// Load the roster from its slot. A missing or unreadable slot
    /// yields an empty roster.
    pub fn load(store: S) -> Result<Self, StoreError> {
        Self::load_or(store, Vec::new())
    }

    /// Load the roster, falling back to `seed` when the slot has never
    /// been written. The seed is not persisted until the first
    /// mutation.
    pub fn load_or(store: S, seed: Vec<Employee>) -> Result<Self, StoreError> {
        let employees = store.read::<Vec<Employee>>(Slot::Roster)?.unwrap_or(seed);
        let next_id = employees.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Ok(Self {
            store,
            employees,
            next_id,
        })
    }

    /// All employees, newest first.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn get(&self, id: u32) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Create an employee at the front of the roster and persist the
    /// new list. The hire date defaults to today when not supplied.
    pub fn add(&mut self, new: NewEmployee) -> Result<Employee, Error> {
        let name = new.name.trim();
        let position = new.position.trim();
        validate_required(name, position)?;

        let employee = Employee {
            id: self.next_id,
            name: name.to_string(),
            position: position.to_string(),
            department: new.department,
            status: new.status,
            hire_date: new.hire_date.unwrap_or_else(today),
        };

        let mut staged = self.employees.clone();
        staged.insert(0, employee.clone());
        self.store.write(Slot::Roster, &staged)?;
        self.employees = staged;
        self.next_id += 1;

        tracing::debug!("Added employee {} ({})", employee.id, employee.name);
        Ok(employee)
    }

    /// Apply a partial update and persist the new list. Supplied name
    /// and position fields must be non-empty after trimming.
    pub fn update(&mut self, id: u32, update: EmployeeUpdate) -> Result<Employee, Error> {
        let index = self
            .employees
            .iter()
            .position(|e| e.id == id)
            .ok_or(Error::NotFound(id))?;

        let mut empty = Vec::new();
        if update.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            empty.push("name");
        }
        if update.position.as_deref().is_some_and(|p| p.trim().is_empty()) {
            empty.push("position");
        }
        if !empty.is_empty() {
            return Err(Error::validation(empty));
        }

        let mut staged = self.employees.clone();
        let employee = &mut staged[index];
        if let Some(name) = update.name {
            employee.name = name.trim().to_string();
        }
        if let Some(position) = update.position {
            employee.position = position.trim().to_string();
        }
        if let Some(department) = update.department {
            employee.department = department;
        }
        if let Some(status) = update.status {
            employee.status = status;
        }
        if let Some(hire_date) = update.hire_date {
            employee.hire_date = hire_date;
        }
        let updated = employee.clone();

        self.store.write(Slot::Roster, &staged)?;
        self.employees = staged;
        Ok(updated)
    }

    /// Permanently remove an employee and persist the new list.
    pub fn remove(&mut self, id: u32) -> Result<(), Error> {
        let index = self
            .employees
            .iter()
            .position(|e| e.id == id)
            .ok_or(Error::NotFound(id))?;

        let mut staged = self.employees.clone();
        staged.remove(index);
        self.store.write(Slot::Roster, &staged)?;
        self.employees = staged;

        tracing::debug!("Removed employee {}", id);
        Ok(())
    }
}

fn validate_required(name: &str, position: &str) -> Result<(), Error> {
    let mut empty = Vec::new();
    if name.is_empty() {
        empty.push("name");
    }
    if position.is_empty() {
        empty.push("position");
    }
    if empty.is_empty() {
        Ok(())
    } else {
        Err(Error::validation(empty))
    }
}

fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Department, EmployeeStatus};
    use crate::store::MemoryStore;

    fn roster() -> EmployeeRoster<MemoryStore> {
        EmployeeRoster::load(MemoryStore::new()).unwrap()
    }

    #[test]
    fn ids_start_at_one_and_increment() {
        let mut roster = roster();

        let ann = roster
            .add(NewEmployee::new("Ann", "Engineer", Department::It))
            .unwrap();
        let bob = roster
            .add(NewEmployee::new("Bob", "Recruiter", Department::Hr))
            .unwrap();

        assert_eq!(ann.id, 1);
        assert_eq!(bob.id, 2);
    }

    #[test]
    fn newest_employee_is_listed_first() {
        let mut roster = roster();

        roster
            .add(NewEmployee::new("Ann", "Engineer", Department::It))
            .unwrap();
        roster
            .add(NewEmployee::new("Bob", "Recruiter", Department::Hr))
            .unwrap();

        let names: Vec<_> = roster.employees().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Bob", "Ann"]);
    }

    #[test]
    fn deleted_ids_are_never_reassigned() {
        let mut roster = roster();

        roster
            .add(NewEmployee::new("Ann", "Engineer", Department::It))
            .unwrap();
        let bob = roster
            .add(NewEmployee::new("Bob", "Recruiter", Department::Hr))
            .unwrap();

        roster.remove(bob.id).unwrap();
        let carol = roster
            .add(NewEmployee::new("Carol", "Sales Rep", Department::Sales))
            .unwrap();

        assert_eq!(carol.id, 3);
    }

    #[test]
    fn next_id_continues_from_the_persisted_maximum() {
        let store = MemoryStore::new();
        let mut roster = EmployeeRoster::load(store.clone()).unwrap();
        roster
            .add(NewEmployee::new("Ann", "Engineer", Department::It))
            .unwrap();
        roster
            .add(NewEmployee::new("Bob", "Recruiter", Department::Hr))
            .unwrap();

        let mut reloaded = EmployeeRoster::load(store).unwrap();
        let carol = reloaded
            .add(NewEmployee::new("Carol", "Sales Rep", Department::Sales))
            .unwrap();

        assert_eq!(carol.id, 3);
    }

    #[test]
    fn add_requires_name_and_position() {
        let mut roster = roster();

        let err = roster
            .add(NewEmployee::new("   ", "", Department::It))
            .unwrap_err();

        match err {
            Error::Validation { fields } => assert_eq!(fields, ["name", "position"]),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn add_trims_whitespace() {
        let mut roster = roster();

        let ann = roster
            .add(NewEmployee::new("  Ann  ", " Engineer ", Department::It))
            .unwrap();

        assert_eq!(ann.name, "Ann");
        assert_eq!(ann.position, "Engineer");
    }

    #[test]
    fn failed_add_is_not_persisted() {
        let mut roster = roster();

        let result = roster.add(NewEmployee::new("", "Engineer", Department::It));

        assert!(result.is_err());
        assert!(roster.employees().is_empty());
    }

    #[test]
    fn mutations_survive_a_reload() {
        let store = MemoryStore::new();
        let mut roster = EmployeeRoster::load(store.clone()).unwrap();
        roster
            .add(
                NewEmployee::new("Ann", "Engineer", Department::It)
                    .with_status(EmployeeStatus::Sick),
            )
            .unwrap();

        let reloaded = EmployeeRoster::load(store).unwrap();

        assert_eq!(reloaded.employees(), roster.employees());
    }

    #[test]
    fn update_merges_only_supplied_fields() {
        let mut roster = roster();
        let ann = roster
            .add(NewEmployee::new("Ann", "Engineer", Department::It))
            .unwrap();

        let updated = roster
            .update(
                ann.id,
                EmployeeUpdate {
                    position: Some("Staff Engineer".to_string()),
                    status: Some(EmployeeStatus::DayOff),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Ann");
        assert_eq!(updated.position, "Staff Engineer");
        assert_eq!(updated.status, EmployeeStatus::DayOff);
        assert_eq!(updated.department, Department::It);
        assert_eq!(updated.hire_date, ann.hire_date);
    }

    #[test]
    fn update_rejects_blank_supplied_fields() {
        let mut roster = roster();
        let ann = roster
            .add(NewEmployee::new("Ann", "Engineer", Department::It))
            .unwrap();

        let err = roster
            .update(
                ann.id,
                EmployeeUpdate {
                    name: Some("  ".to_string()),
                    ..Default::default()
                },
            )
            .unwrap_err();

        match err {
            Error::Validation { fields } => assert_eq!(fields, ["name"]),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(roster.get(ann.id).unwrap().name, "Ann");
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut roster = roster();

        let err = roster.update(42, EmployeeUpdate::default()).unwrap_err();

        assert!(matches!(err, Error::NotFound(42)));
    }

    #[test]
    fn remove_is_permanent() {
        let store = MemoryStore::new();
        let mut roster = EmployeeRoster::load(store.clone()).unwrap();
        let ann = roster
            .add(NewEmployee::new("Ann", "Engineer", Department::It))
            .unwrap();

        roster.remove(ann.id).unwrap();

        assert!(roster.get(ann.id).is_none());
        let reloaded = EmployeeRoster::load(store).unwrap();
        assert!(reloaded.employees().is_empty());
    }

    #[test]
    fn remove_unknown_id_is_not_found() {
        let mut roster = roster();

        assert!(matches!(roster.remove(7), Err(Error::NotFound(7))));
    }

    #[test]
    fn remove_allows_terminated_employees() {
        // Gating terminated employees is the caller's concern.
        let mut roster = roster();
        let bob = roster
            .add(
                NewEmployee::new("Bob", "Recruiter", Department::Hr)
                    .with_status(EmployeeStatus::Terminated),
            )
            .unwrap();

        assert!(roster.remove(bob.id).is_ok());
    }

    #[derive(Clone)]
    struct FailingStore;

    impl StateStore for FailingStore {
        fn read_slot(&self, _slot: Slot) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn write_slot(&self, _slot: Slot, _payload: &str) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk full",
            )))
        }

        fn erase_slot(&self, _slot: Slot) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk full",
            )))
        }
    }

    #[test]
    fn storage_failure_leaves_the_roster_unchanged() {
        let mut roster = EmployeeRoster::load(FailingStore).unwrap();

        let result = roster.add(NewEmployee::new("Ann", "Engineer", Department::It));

        assert!(matches!(result, Err(Error::Storage(_))));
        assert!(roster.employees().is_empty());
        assert_eq!(roster.next_id, 1);
    }

    #[test]
    fn seed_is_used_only_when_the_slot_is_absent() {
        let store = MemoryStore::new();
        let seed = vec![Employee {
            id: 5,
            name: "Seeded".to_string(),
            position: "Engineer".to_string(),
            department: Department::It,
            status: EmployeeStatus::Working,
            hire_date: today(),
        }];

        let mut roster = EmployeeRoster::load_or(store.clone(), seed.clone()).unwrap();
        assert_eq!(roster.employees(), seed.as_slice());
        // Nothing is written until the first mutation.
        assert!(store.raw(Slot::Roster).is_none());

        let ann = roster
            .add(NewEmployee::new("Ann", "Engineer", Department::It))
            .unwrap();
        assert_eq!(ann.id, 6);
        assert!(store.raw(Slot::Roster).is_some());

        // A persisted roster wins over the seed from then on.
        let reloaded = EmployeeRoster::load_or(store, vec![]).unwrap();
        assert_eq!(reloaded.employees().len(), 2);
    }
}
