//! SubmissionStamp - lateness recorded on a report or visit at write time.

use serde::Serialize;

use super::AlertKind;
use crate::domain::cycle::CycleDescriptor;
use crate::domain::foundation::Timestamp;
use crate::domain::status::Lateness;

/// Lateness stamped onto a submission. Never blocks the write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionStamp {
    pub kind: AlertKind,
    pub cycle_index: u32,
    pub due_at: Timestamp,
    pub submitted_at: Timestamp,
    pub is_late: bool,
    pub days_late: u32,
}

impl SubmissionStamp {
    /// Stamps a report submission for `cycle`.
    pub fn for_report(cycle: &CycleDescriptor, submitted_at: Timestamp) -> Self {
        Self::build(AlertKind::Report, cycle.index, cycle.report_due_at, submitted_at)
    }

    /// Stamps a visit completion for `cycle`.
    pub fn for_visit(cycle: &CycleDescriptor, completed_at: Timestamp) -> Self {
        Self::build(AlertKind::Visit, cycle.index, cycle.visit_due_at, completed_at)
    }

    fn build(kind: AlertKind, cycle_index: u32, due_at: Timestamp, at: Timestamp) -> Self {
        let lateness = Lateness::evaluate(due_at, at);
        Self {
            kind,
            cycle_index,
            due_at,
            submitted_at: at,
            is_late: lateness.is_late,
            days_late: lateness.days_late,
        }
    }
}
