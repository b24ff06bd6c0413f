//! Report status classification.

use serde::{Deserialize, Serialize};

use super::lateness::{DueStanding, Lateness};
use super::ReportRecord;
use crate::domain::cycle::StatusRules;
use crate::domain::foundation::{ReportRecordStatus, Timestamp};

/// Live status of one cycle report as shown on dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportState {
    NotStarted,
    DueSoon,
    Draft,
    Submitted,
    Rejected,
    Overdue,
    Approved,
}

impl ReportState {
    /// Returns the display label for this state.
    pub fn label(&self) -> &'static str {
        match self {
            ReportState::NotStarted => "Not started",
            ReportState::DueSoon => "Due soon",
            ReportState::Draft => "Draft",
            ReportState::Submitted => "Submitted",
            ReportState::Rejected => "Returned for revision",
            ReportState::Overdue => "Overdue",
            ReportState::Approved => "Approved",
        }
    }
}

/// Classification of a report against its due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStatusResult {
    pub status: ReportState,
    pub label: String,
    pub is_overdue: bool,
    pub days_overdue: u32,
    /// Whether the student may still submit. Late submission is always allowed.
    pub can_submit: bool,
    /// Whether a recorded submission happened after the due date.
    pub is_late: bool,
}

impl ReportStatusResult {
    fn new(status: ReportState, can_submit: bool) -> Self {
        Self {
            status,
            label: status.label().to_string(),
            is_overdue: false,
            days_overdue: 0,
            can_submit,
            is_late: false,
        }
    }

    fn overdue(mut self, days: u32) -> Self {
        self.is_overdue = true;
        self.days_overdue = days;
        if self.status != ReportState::Overdue {
            self.label = format!("{} (overdue)", self.status.label());
        }
        self
    }

    fn late(mut self, lateness: Lateness) -> Self {
        if lateness.is_late {
            self.is_late = true;
            self.is_overdue = true;
            self.days_overdue = lateness.days_late;
            self.label = format!("{} (late)", self.status.label());
        }
        self
    }
}

pub(crate) fn classify_report(
    due: Timestamp,
    record: Option<&ReportRecord>,
    now: Timestamp,
    rules: &StatusRules,
) -> ReportStatusResult {
    let Some((record, status)) = record.and_then(|r| r.parsed_status().map(|s| (r, s))) else {
        return by_due_date(due, now, rules);
    };

    match status {
        ReportRecordStatus::Approved => {
            let lateness = record
                .submitted_at
                .map(|at| Lateness::evaluate(due, at))
                .unwrap_or(Lateness::ON_TIME);
            ReportStatusResult::new(ReportState::Approved, false).late(lateness)
        }
        ReportRecordStatus::Submitted => {
            let lateness = record
                .submitted_at
                .map(|at| Lateness::evaluate(due, at))
                .unwrap_or(Lateness::ON_TIME);
            ReportStatusResult::new(ReportState::Submitted, false).late(lateness)
        }
        ReportRecordStatus::Draft | ReportRecordStatus::Rejected => {
            let state = if status == ReportRecordStatus::Draft {
                ReportState::Draft
            } else {
                ReportState::Rejected
            };
            let result = ReportStatusResult::new(state, true);
            match (record.submitted_at, DueStanding::evaluate(due, now, rules.due_soon_days)) {
                (None, DueStanding::Overdue { days }) => result.overdue(days),
                _ => result,
            }
        }
    }
}

fn by_due_date(due: Timestamp, now: Timestamp, rules: &StatusRules) -> ReportStatusResult {
    match DueStanding::evaluate(due, now, rules.due_soon_days) {
        DueStanding::Overdue { days } => {
            ReportStatusResult::new(ReportState::Overdue, true).overdue(days)
        }
        DueStanding::DueSoon => ReportStatusResult::new(ReportState::DueSoon, true),
        DueStanding::Upcoming => ReportStatusResult::new(ReportState::NotStarted, true),
    }
}
