//! Lateness and due-date standing shared by the report and visit classifiers.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// Whether an action happened after its due date, and by how many days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lateness {
    pub is_late: bool,
    pub days_late: u32,
}

impl Lateness {
    /// On time.
    pub const ON_TIME: Self = Self {
        is_late: false,
        days_late: 0,
    };

    /// Evaluates an action at `at` against `due`.
    ///
    /// Late means strictly after the due instant. Days are counted by
    /// calendar date, and any lateness counts as at least one day.
    pub fn evaluate(due: Timestamp, at: Timestamp) -> Self {
        if !at.is_after(&due) {
            return Self::ON_TIME;
        }
        Self {
            is_late: true,
            days_late: at.calendar_days_since(&due).max(1) as u32,
        }
    }
}

/// Returns true when a submission at `submitted_at` misses `due`.
///
/// Late submissions are accepted; this only decides the flag stamped on them.
pub fn is_submission_late(due: Timestamp, submitted_at: Timestamp) -> bool {
    Lateness::evaluate(due, submitted_at).is_late
}

/// Where `now` stands relative to a due date when nothing has been done yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DueStanding {
    Overdue { days: u32 },
    DueSoon,
    Upcoming,
}

impl DueStanding {
    pub(crate) fn evaluate(due: Timestamp, now: Timestamp, due_soon_days: u32) -> Self {
        let lateness = Lateness::evaluate(due, now);
        if lateness.is_late {
            return DueStanding::Overdue {
                days: lateness.days_late,
            };
        }
        if due.calendar_days_since(&now) <= i64::from(due_soon_days) {
            DueStanding::DueSoon
        } else {
            DueStanding::Upcoming
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(input: &str) -> Timestamp {
        Timestamp::parse(input).unwrap()
    }

    #[test]
    fn action_at_due_instant_is_on_time() {
        let due = ts("2026-01-16").end_of_day();
        assert_eq!(Lateness::evaluate(due, due), Lateness::ON_TIME);
    }

    #[test]
    fn action_next_morning_is_one_day_late() {
        let due = ts("2026-01-16").end_of_day();
        let lateness = Lateness::evaluate(due, ts("2026-01-17T08:00:00"));
        assert!(lateness.is_late);
        assert_eq!(lateness.days_late, 1);
    }

    #[test]
    fn lateness_counts_calendar_days() {
        let due = ts("2026-01-16").end_of_day();
        assert_eq!(Lateness::evaluate(due, ts("2026-01-20")).days_late, 4);
    }

    #[test]
    fn same_day_lateness_counts_as_one_day() {
        let due = ts("2026-01-16T12:00:00");
        assert_eq!(Lateness::evaluate(due, ts("2026-01-16T13:00:00")).days_late, 1);
    }

    #[test]
    fn is_submission_late_is_strict() {
        let due = ts("2026-02-05").end_of_day();
        assert!(!is_submission_late(due, ts("2026-02-05T18:00:00")));
        assert!(is_submission_late(due, ts("2026-02-06")));
    }

    #[test]
    fn standing_splits_due_soon_from_upcoming() {
        let due = ts("2026-02-05").end_of_day();
        assert_eq!(DueStanding::evaluate(due, ts("2026-01-29"), 7), DueStanding::DueSoon);
        assert_eq!(DueStanding::evaluate(due, ts("2026-01-28"), 7), DueStanding::Upcoming);
        assert_eq!(
            DueStanding::evaluate(due, ts("2026-02-08"), 7),
            DueStanding::Overdue { days: 3 }
        );
    }
}
