//! CycleModel trait - the compliance cycle provider callers depend on.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{CycleDescriptor, InternshipDates};
use crate::domain::foundation::Timestamp;

/// Which cycle model an institution or cohort runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CycleModelKind {
    /// Legacy 4-week cycles anchored on each internship's start date.
    FixedDuration,
    /// Calendar-aligned months with an inclusion threshold.
    #[default]
    CalendarMonth,
}

impl fmt::Display for CycleModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CycleModelKind::FixedDuration => "fixed_duration",
            CycleModelKind::CalendarMonth => "calendar_month",
        };
        write!(f, "{}", s)
    }
}

/// A strategy that turns internship dates into reporting cycles.
///
/// Implementors provide the enumeration; every aggregate query is derived
/// from it so the two can never disagree.
pub trait CycleModel: Send + Sync {
    /// Which model this is.
    fn kind(&self) -> CycleModelKind;

    /// The expected cycles for the range, ordered by index from 1.
    ///
    /// Reversed ranges yield an empty sequence.
    fn cycles(&self, dates: &InternshipDates) -> Vec<CycleDescriptor>;

    /// Number of expected cycles over the whole internship.
    fn total_expected_count(&self, dates: &InternshipDates) -> usize {
        self.cycles(dates).len()
    }

    /// Number of cycles whose report due date has strictly passed at `now`.
    fn expected_reports_as_of(&self, dates: &InternshipDates, now: Timestamp) -> usize {
        if dates.is_reversed() || now < dates.normalized_start() {
            return 0;
        }
        self.cycles(dates)
            .iter()
            .filter(|c| c.is_report_due(&now))
            .count()
    }

    /// Number of cycles whose visit due date has strictly passed at `now`.
    fn expected_visits_as_of(&self, dates: &InternshipDates, now: Timestamp) -> usize {
        if dates.is_reversed() || now < dates.normalized_start() {
            return 0;
        }
        self.cycles(dates)
            .iter()
            .filter(|c| c.is_visit_due(&now))
            .count()
    }

    /// The cycle containing `now`.
    ///
    /// Falls back to the nearest upcoming cycle when `now` is before or
    /// between cycles, and to the last cycle once all are in the past.
    fn current_cycle(&self, dates: &InternshipDates, now: Timestamp) -> Option<CycleDescriptor> {
        let cycles = self.cycles(dates);
        cycles
            .iter()
            .find(|c| now <= c.period_end)
            .or_else(|| cycles.last())
            .copied()
    }

    /// Earliest report due date strictly after `now`.
    fn next_report_due(&self, dates: &InternshipDates, now: Timestamp) -> Option<Timestamp> {
        self.cycles(dates)
            .iter()
            .map(|c| c.report_due_at)
            .filter(|due| due.is_after(&now))
            .min()
    }

    /// Earliest visit due date strictly after `now`.
    fn next_visit_due(&self, dates: &InternshipDates, now: Timestamp) -> Option<Timestamp> {
        self.cycles(dates)
            .iter()
            .map(|c| c.visit_due_at)
            .filter(|due| due.is_after(&now))
            .min()
    }

    /// The cycle with the given 1-based index.
    fn cycle_by_index(&self, dates: &InternshipDates, index: u32) -> Option<CycleDescriptor> {
        self.cycles(dates).into_iter().find(|c| c.index == index)
    }
}
