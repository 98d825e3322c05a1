use strum::{Display, EnumString};

use crate::domain::Employee;

/// Column the roster can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SortKey {
    Name,
    HireDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Active roster ordering.
///
/// At most one column is active at a time. `toggle` encodes the
/// header-click rule: picking the active column flips its direction,
/// picking another column starts over ascending and drops the old
/// column's direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterSort {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl RosterSort {
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }

    pub fn toggle(current: Option<RosterSort>, key: SortKey) -> RosterSort {
        match current {
            Some(sort) if sort.key == key => RosterSort {
                key,
                direction: sort.direction.flipped(),
            },
            _ => RosterSort::ascending(key),
        }
    }

    /// Stable-sorted copy of `employees`. Names compare
    /// case-insensitively, hire dates as calendar dates.
    pub fn apply(&self, employees: &[Employee]) -> Vec<Employee> {
        let mut sorted = employees.to_vec();
        sorted.sort_by(|a, b| {
            let ordering = match self.key {
                SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
                SortKey::HireDate => a.hire_date.cmp(&b.hire_date),
            };
            match self.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        sorted
    }
}
