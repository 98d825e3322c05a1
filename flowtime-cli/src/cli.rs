use clap::{Parser, Subcommand};
use flowtime_core::domain::{Department, EmployeeStatus, Page};
use flowtime_core::roster::SortKey;

#[derive(Debug, Parser)]
#[command(name = "flowtime")]
#[command(about = "Employee roster and time clock for the Flowtime dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in to unlock the other commands
    Login {
        /// Account name (the password is prompted for)
        username: String,
    },
    /// Sign out and land back on the employees page
    Logout,
    /// Show the session, page, theme and any running work session
    Status,
    /// Pick the page restored on the next start
    Open {
        /// Page name: employees or timeClock
        page: Page,
    },
    /// Manage the employee roster
    Roster {
        #[command(subcommand)]
        command: RosterCommands,
    },
    /// Clock in and out of work sessions
    Clock {
        #[command(subcommand)]
        command: ClockCommands,
    },
    /// List recorded work sessions
    Timesheet,
    /// Show or switch the dark/light theme
    Theme {
        #[command(subcommand)]
        command: ThemeCommands,
    },
    /// Print config path and create default file if missing
    ConfigPath,
}

#[derive(Debug, Subcommand)]
pub enum RosterCommands {
    /// List employees, optionally filtered and sorted
    List {
        /// Keep only this status: working, day_off, sick or terminated
        #[arg(long)]
        status: Option<EmployeeStatus>,
        /// Keep only this department: IT, HR or Sales
        #[arg(long)]
        department: Option<Department>,
        /// Case-insensitive name search
        #[arg(long)]
        search: Option<String>,
        /// Sort by name or hire_date
        #[arg(long)]
        sort: Option<SortKey>,
        /// Sort descending instead of ascending
        #[arg(long, requires = "sort")]
        desc: bool,
    },
    /// Add an employee at the top of the roster
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        position: String,
        /// IT, HR or Sales
        #[arg(long)]
        department: Department,
        /// working, day_off, sick or terminated (default working)
        #[arg(long)]
        status: Option<EmployeeStatus>,
        /// YYYY-MM-DD (default today)
        #[arg(long)]
        hire_date: Option<String>,
    },
    /// Change fields of an employee
    Edit {
        id: u32,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        position: Option<String>,
        /// IT, HR or Sales
        #[arg(long)]
        department: Option<Department>,
        /// working, day_off, sick or terminated
        #[arg(long)]
        status: Option<EmployeeStatus>,
        /// YYYY-MM-DD
        #[arg(long)]
        hire_date: Option<String>,
    },
    /// Remove an employee for good
    Remove { id: u32 },
}

#[derive(Debug, Subcommand)]
pub enum ClockCommands {
    /// Start a work session for a department
    In {
        /// IT, HR or Sales
        department: Department,
    },
    /// Close the running session and record it on the timesheet
    Out,
    /// Follow the elapsed time of the running session
    Watch,
}

#[derive(Debug, Subcommand)]
pub enum ThemeCommands {
    /// Print the active theme
    Show,
    /// Switch between dark and light
    Toggle,
}
