use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Organizational department an employee belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum Department {
    #[serde(rename = "IT")]
    #[strum(ascii_case_insensitive, serialize = "IT")]
    It,
    #[serde(rename = "HR")]
    #[strum(ascii_case_insensitive, serialize = "HR")]
    Hr,
    #[serde(rename = "Sales")]
    #[strum(ascii_case_insensitive, serialize = "Sales")]
    Sales,
}

/// Employment status shown on the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EmployeeStatus {
    Working,
    DayOff,
    Sick,
    Terminated,
}

/// A member of the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub department: Department,
    pub status: EmployeeStatus,
    #[serde(with = "iso_date")]
    pub hire_date: Date,
}

/// Payload for creating an employee. The id, and the hire date when
/// omitted, are filled in by the roster.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub position: String,
    pub department: Department,
    pub status: EmployeeStatus,
    pub hire_date: Option<Date>,
}

impl NewEmployee {
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        department: Department,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            department,
            status: EmployeeStatus::Working,
            hire_date: None,
        }
    }

    pub fn with_status(mut self, status: EmployeeStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_hire_date(mut self, hire_date: Date) -> Self {
        self.hire_date = Some(hire_date);
        self
    }
}

/// Partial update for an employee. `None` fields keep their current
/// values.
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub position: Option<String>,
    pub department: Option<Department>,
    pub status: Option<EmployeeStatus>,
    pub hire_date: Option<Date>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    #[test]
    fn employee_serializes_with_camel_case_keys() {
        let employee = Employee {
            id: 3,
            name: "Ann".to_string(),
            position: "Engineer".to_string(),
            department: Department::It,
            status: EmployeeStatus::DayOff,
            hire_date: Date::from_calendar_date(2023, Month::May, 2).unwrap(),
        };

        let json = serde_json::to_string(&employee).unwrap();
        assert!(json.contains("\"hireDate\":\"2023-05-02\""));
        assert!(json.contains("\"department\":\"IT\""));
        assert!(json.contains("\"status\":\"day_off\""));
    }

    #[test]
    fn employee_round_trips() {
        let employee = Employee {
            id: 1,
            name: "Bob".to_string(),
            position: "Manager".to_string(),
            department: Department::Sales,
            status: EmployeeStatus::Terminated,
            hire_date: Date::from_calendar_date(2020, Month::January, 15).unwrap(),
        };

        let json = serde_json::to_string(&employee).unwrap();
        let back: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(back, employee);
    }

    #[test]
    fn department_parses_case_insensitively() {
        assert_eq!("it".parse::<Department>().unwrap(), Department::It);
        assert_eq!("HR".parse::<Department>().unwrap(), Department::Hr);
        assert_eq!("sales".parse::<Department>().unwrap(), Department::Sales);
        assert!("marketing".parse::<Department>().is_err());
    }

    #[test]
    fn status_displays_as_wire_value() {
        assert_eq!(EmployeeStatus::DayOff.to_string(), "day_off");
        assert_eq!("day_off".parse::<EmployeeStatus>().unwrap(), EmployeeStatus::DayOff);
    }
}
