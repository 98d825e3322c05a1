use thiserror::Error;

use crate::store::StoreError;
use crate::timeclock::Phase;

/// Errors that can occur during dashboard state operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("required field(s) empty: {}", .fields.join(", "))]
    Validation { fields: Vec<String> },
    #[error("employee not found: {0}")]
    NotFound(u32),
    #[error("cannot {action} while {phase}")]
    InvalidTransition { action: &'static str, phase: Phase },
    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),
}

impl Error {
    pub fn validation(fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::Validation {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn invalid_transition(action: &'static str, phase: Phase) -> Self {
        Self::InvalidTransition { action, phase }
    }
}
