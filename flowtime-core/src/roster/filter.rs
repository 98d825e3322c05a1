use crate::domain::{Department, Employee, EmployeeStatus};

/// Roster list filter.
///
/// `None` selectors match every employee; the search term is a
/// case-insensitive substring match against the name. The three
/// predicates are combined with AND, so applying them in any order
/// yields the same list.
#[derive(Debug, Clone, Default)]
pub struct RosterFilter {
    pub status: Option<EmployeeStatus>,
    pub department: Option<Department>,
    pub search_term: String,
}

impl RosterFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: EmployeeStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_department(mut self, department: Department) -> Self {
        self.department = Some(department);
        self
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        if let Some(status) = self.status {
            if employee.status != status {
                return false;
            }
        }
        if let Some(department) = self.department {
            if employee.department != department {
                return false;
            }
        }
        if !self.search_term.is_empty() {
            let term = self.search_term.to_lowercase();
            if !employee.name.to_lowercase().contains(&term) {
                return false;
            }
        }
        true
    }

    /// Filtered copy of `employees`, input order preserved.
    pub fn apply(&self, employees: &[Employee]) -> Vec<Employee> {
        employees
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect()
    }
}
