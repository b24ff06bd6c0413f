//! Mentor visit status classification.

use serde::{Deserialize, Serialize};

use super::lateness::{DueStanding, Lateness};
use super::VisitRecord;
use crate::domain::cycle::StatusRules;
use crate::domain::foundation::{Timestamp, VisitRecordStatus};

/// Live status of one cycle's mentor visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitState {
    Upcoming,
    DueSoon,
    Scheduled,
    Pending,
    Completed,
    Overdue,
}

impl VisitState {
    /// Returns the display label for this state.
    pub fn label(&self) -> &'static str {
        match self {
            VisitState::Upcoming => "Upcoming",
            VisitState::DueSoon => "Due soon",
            VisitState::Scheduled => "Scheduled",
            VisitState::Pending => "Pending",
            VisitState::Completed => "Completed",
            VisitState::Overdue => "Overdue",
        }
    }
}

/// Classification of a visit against its due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitStatusResult {
    pub status: VisitState,
    pub label: String,
    pub is_overdue: bool,
    pub days_overdue: u32,
    /// Whether the visit may still be completed. Late completion is always allowed.
    pub can_complete: bool,
    /// Whether a recorded completion happened after the due date.
    pub is_late: bool,
}

impl VisitStatusResult {
    fn new(status: VisitState, can_complete: bool) -> Self {
        Self {
            status,
            label: status.label().to_string(),
            is_overdue: false,
            days_overdue: 0,
            can_complete,
            is_late: false,
        }
    }

    fn overdue(mut self, days: u32) -> Self {
        self.is_overdue = true;
        self.days_overdue = days;
        if self.status != VisitState::Overdue {
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

pub(crate) fn classify_visit(
    due: Timestamp,
    record: Option<&VisitRecord>,
    now: Timestamp,
    rules: &StatusRules,
) -> VisitStatusResult {
    let Some((record, status)) = record.and_then(|r| r.parsed_status().map(|s| (r, s))) else {
        return by_due_date(due, now, rules);
    };

    match status {
        VisitRecordStatus::Completed => {
            let lateness = record
                .completed_at
                .map(|at| Lateness::evaluate(due, at))
                .unwrap_or(Lateness::ON_TIME);
            VisitStatusResult::new(VisitState::Completed, false).late(lateness)
        }
        VisitRecordStatus::Scheduled | VisitRecordStatus::Pending => {
            let state = if status == VisitRecordStatus::Scheduled {
                VisitState::Scheduled
            } else {
                VisitState::Pending
            };
            let result = VisitStatusResult::new(state, true);
            match (record.completed_at, DueStanding::evaluate(due, now, rules.due_soon_days)) {
                (None, DueStanding::Overdue { days }) => result.overdue(days),
                _ => result,
            }
        }
    }
}

fn by_due_date(due: Timestamp, now: Timestamp, rules: &StatusRules) -> VisitStatusResult {
    match DueStanding::evaluate(due, now, rules.due_soon_days) {
        DueStanding::Overdue { days } => VisitStatusResult::new(VisitState::Overdue, true).overdue(days),
        DueStanding::DueSoon => VisitStatusResult::new(VisitState::DueSoon, true),
        DueStanding::Upcoming => VisitStatusResult::new(VisitState::Upcoming, true),
    }
}
