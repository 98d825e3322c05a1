mod employee;
mod page;
mod theme;
mod time_entry;
mod timer_state;

pub use employee::{Department, Employee, EmployeeStatus, EmployeeUpdate, NewEmployee};
pub use page::Page;
pub use theme::Theme;
pub use time_entry::{format_duration, TimeEntry};
pub use timer_state::StoredTimerState;
