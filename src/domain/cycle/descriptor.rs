//! CycleDescriptor value object - one reporting period of an internship.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{calendar, Timestamp};

/// Model-specific details of a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum CycleWindow {
    /// A 28-day window with a grace-period submission window after it.
    #[serde(rename_all = "camelCase")]
    FixedDuration {
        submission_window_start: Timestamp,
        submission_window_end: Timestamp,
    },
    /// A calendar month touched by the internship.
    #[serde(rename_all = "camelCase")]
    CalendarMonth {
        year: i32,
        month: u32,
        is_included: bool,
    },
}

/// One reporting/visit period within an internship.
///
/// `period_start`/`period_end` are clamped to the internship range and
/// normalized to start-of-day/end-of-day respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleDescriptor {
    pub index: u32,
    pub period_start: Timestamp,
    pub period_end: Timestamp,
    pub days_in_period: u32,
    pub report_due_at: Timestamp,
    pub visit_due_at: Timestamp,
    pub is_first: bool,
    pub is_last: bool,
    pub window: CycleWindow,
}

impl CycleDescriptor {
    /// Returns true if `at` falls inside this period.
    pub fn contains(&self, at: &Timestamp) -> bool {
        *at >= self.period_start && *at <= self.period_end
    }

    /// Returns true if the report due date has passed at `now`.
    pub fn is_report_due(&self, now: &Timestamp) -> bool {
        now.is_after(&self.report_due_at)
    }

    /// Returns true if the visit due date has passed at `now`.
    pub fn is_visit_due(&self, now: &Timestamp) -> bool {
        now.is_after(&self.visit_due_at)
    }

    /// Whether the period counts toward expected reports.
    ///
    /// Fixed-duration cycles always count.
    pub fn is_included(&self) -> bool {
        match self.window {
            CycleWindow::FixedDuration { .. } => true,
            CycleWindow::CalendarMonth { is_included, .. } => is_included,
        }
    }

    /// Display label, e.g. "Cycle 3" or "March 2026".
    pub fn label(&self) -> String {
        match self.window {
            CycleWindow::FixedDuration { .. } => format!("Cycle {}", self.index),
            CycleWindow::CalendarMonth { year, month, .. } => match calendar::month_name(month) {
                Ok(name) => format!("{} {}", name, year),
                Err(_) => format!("Month {}", self.index),
            },
        }
    }
}
