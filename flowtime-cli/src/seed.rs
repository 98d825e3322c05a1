//! Roster the dashboard boots with when storage is empty.

use flowtime_core::domain::{Department, Employee, EmployeeStatus};
use time::macros::date;
use time::Date;

fn employee(
    id: u32,
    name: &str,
    position: &str,
    department: Department,
    status: EmployeeStatus,
    hire_date: Date,
) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        position: position.to_string(),
        department,
        status,
        hire_date,
    }
}

pub fn default_roster() -> Vec<Employee> {
    vec![
        employee(
            1,
            "John Smith",
            "Frontend Developer",
            Department::It,
            EmployeeStatus::Working,
            date!(2021 - 03 - 15),
        ),
        employee(
            2,
            "Anna Johnson",
            "HR Manager",
            Department::Hr,
            EmployeeStatus::Working,
            date!(2019 - 11 - 02),
        ),
        employee(
            3,
            "Peter Brown",
            "Sales Representative",
            Department::Sales,
            EmployeeStatus::DayOff,
            date!(2022 - 06 - 20),
        ),
        employee(
            4,
            "Maria Garcia",
            "Backend Developer",
            Department::It,
            EmployeeStatus::Sick,
            date!(2020 - 01 - 08),
        ),
        employee(
            5,
            "James Wilson",
            "Recruiter",
            Department::Hr,
            EmployeeStatus::Working,
            date!(2023 - 04 - 11),
        ),
        employee(
            6,
            "Linda Martinez",
            "Account Executive",
            Department::Sales,
            EmployeeStatus::Terminated,
            date!(2018 - 09 - 30),
        ),
    ]
}
