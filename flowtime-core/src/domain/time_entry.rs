use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime, UtcOffset};

use super::Department;

/// A completed work session as it appears on the timesheet.
///
/// Every field is a preformatted string: entries are display records,
/// frozen at the moment the session closes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub date: String,
    pub department: String,
    pub start: String,
    pub end: String,
    pub total: String,
}

impl TimeEntry {
    /// Build the ledger entry for a session that ran from `start` to
    /// `end`. Date and clock times are rendered in the local offset
    /// when it can be determined, UTC otherwise.
    pub fn from_session(
        department: Department,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> Self {
        let start_local = to_local_time(start);
        let end_local = to_local_time(end);
        Self {
            date: format_date(end_local),
            department: department.to_string(),
            start: format_clock(start_local),
            end: format_clock(end_local),
            total: format_duration(end - start),
        }
    }
}

/// Zero-padded `HH:MM:SS` for an elapsed duration, floored to whole
/// seconds. Hours wider than two digits keep their full width.
pub fn format_duration(elapsed: Duration) -> String {
    let total_seconds = elapsed.whole_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

fn to_local_time(dt: OffsetDateTime) -> OffsetDateTime {
    if let Ok(local_offset) = UtcOffset::current_local_offset() {
        dt.to_offset(local_offset)
    } else {
        dt
    }
}

fn format_date(dt: OffsetDateTime) -> String {
    format!("{:04}-{:02}-{:02}", dt.year(), dt.month() as u8, dt.day())
}

fn format_clock(dt: OffsetDateTime) -> String {
    format!("{:02}:{:02}:{:02}", dt.hour(), dt.minute(), dt.second())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{Date, Month};

    #[test]
    fn duration_is_zero_padded() {
        assert_eq!(format_duration(Duration::seconds(0)), "00:00:00");
        assert_eq!(format_duration(Duration::seconds(7)), "00:00:07");
        assert_eq!(format_duration(Duration::seconds(5 * 60 + 30)), "00:05:30");
        assert_eq!(format_duration(Duration::seconds(5 * 3600 + 2 * 60 + 9)), "05:02:09");
    }

    #[test]
    fn duration_floors_subsecond_remainders() {
        assert_eq!(format_duration(Duration::milliseconds(90_900)), "00:01:30");
    }

    #[test]
    fn duration_hours_widen_past_two_digits() {
        assert_eq!(format_duration(Duration::seconds(100 * 3600)), "100:00:00");
    }

    #[test]
    fn negative_duration_clamps_to_zero() {
        assert_eq!(format_duration(Duration::seconds(-30)), "00:00:00");
    }

    #[test]
    fn session_total_is_the_wall_clock_difference() {
        let start = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let end = start + Duration::seconds(5 * 3600 + 2 * 60 + 9);

        let entry = TimeEntry::from_session(Department::It, start, end);

        assert_eq!(entry.total, "05:02:09");
        assert_eq!(entry.department, "IT");
    }

    #[test]
    fn dates_and_clock_times_render_fixed_width() {
        let dt = Date::from_calendar_date(2024, Month::March, 1)
            .unwrap()
            .with_hms(9, 5, 3)
            .unwrap()
            .assume_utc();

        assert_eq!(format_date(dt), "2024-03-01");
        assert_eq!(format_clock(dt), "09:05:03");
    }
}
