use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Department;

/// Persisted projection of a running work session.
///
/// Written when a session starts and erased when it ends, so its
/// presence marks a session that should survive a restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredTimerState {
    pub is_working: bool,
    /// Session start in epoch milliseconds.
    pub start_time: i64,
    pub selected_department: Department,
}

impl StoredTimerState {
    pub fn running(department: Department, started_at: OffsetDateTime) -> Self {
        Self {
            is_working: true,
            start_time: epoch_ms(started_at),
            selected_department: department,
        }
    }

    /// Start instant, unless `start_time` is outside the representable
    /// range.
    pub fn started_at(&self) -> Option<OffsetDateTime> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.start_time) * 1_000_000).ok()
    }
}

fn epoch_ms(instant: OffsetDateTime) -> i64 {
    (instant.unix_timestamp_nanos() / 1_000_000) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let start = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let state = StoredTimerState::running(Department::Hr, start);

        let json = serde_json::to_string(&state).unwrap();

        assert!(json.contains("\"isWorking\":true"));
        assert!(json.contains("\"startTime\":1700000000000"));
        assert!(json.contains("\"selectedDepartment\":\"HR\""));
    }

    #[test]
    fn round_trips_the_start_instant_at_millisecond_precision() {
        let start = OffsetDateTime::from_unix_timestamp_nanos(1_700_000_000_123_000_000).unwrap();
        let state = StoredTimerState::running(Department::It, start);

        let back: StoredTimerState =
            serde_json::from_str(&serde_json::to_string(&state).unwrap()).unwrap();

        assert_eq!(back.started_at().unwrap(), start);
    }

    #[test]
    fn out_of_range_start_time_yields_none() {
        let state = StoredTimerState {
            is_working: true,
            start_time: i64::MAX,
            selected_department: Department::It,
        };

        assert!(state.started_at().is_none());
    }
}
