//! State and persistence core of the Flowtime admin dashboard.
//!
//! Everything the dashboard remembers lives in six durable slots
//! behind the [`store::StateStore`] trait: the employee roster, the
//! timesheet ledger, the running work session, the signed-in flag, the
//! last active page and the theme. [`bootstrap::restore`] rebuilds the
//! presentation state from those slots after a restart.

pub mod bootstrap;
pub mod domain;
mod error;
pub mod roster;
pub mod session;
pub mod store;
pub mod theme;
pub mod timeclock;
pub mod timesheet;

pub use error::Error;
