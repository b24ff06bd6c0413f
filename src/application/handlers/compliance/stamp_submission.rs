//! StampSubmissionHandler - Command handler that stamps lateness on a submission.
//!
//! Late submissions are accepted; the stamp only records how late they were.
//! A report still awaiting review may be resubmitted and is stamped again.
//! Approved reports and completed visits are final and reject a new stamp.

use std::sync::Arc;

use tracing::info;

use super::schedule::InternshipSchedule;
use crate::domain::compliance::{AlertKind, SubmissionStamp};
use crate::domain::cycle::{CycleModel, CycleModelSelector};
use crate::domain::foundation::{
    DomainError, ErrorCode, InternshipId, ReportRecordStatus, StateMachine, Timestamp,
    VisitRecordStatus,
};
use crate::ports::{Clock, InternshipReader};

/// Command to stamp a report submission or visit completion.
#[derive(Debug, Clone)]
pub struct StampSubmissionCommand {
    pub internship_id: InternshipId,
    pub kind: AlertKind,
    pub cycle_index: u32,
    /// Defaults to the clock's current time
    pub submitted_at: Option<Timestamp>,
}

/// Handler for submission stamps.
pub struct StampSubmissionHandler {
    reader: Arc<dyn InternshipReader>,
    selector: Arc<CycleModelSelector>,
    clock: Arc<dyn Clock>,
}

impl StampSubmissionHandler {
    pub fn new(
        reader: Arc<dyn InternshipReader>,
        selector: Arc<CycleModelSelector>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            reader,
            selector,
            clock,
        }
    }

    pub async fn handle(&self, cmd: StampSubmissionCommand) -> Result<SubmissionStamp, DomainError> {
        let schedule =
            InternshipSchedule::load(self.reader.as_ref(), &self.selector, &cmd.internship_id)
                .await?;

        let cycle = schedule
            .strategy
            .cycle_by_index(&schedule.dates, cmd.cycle_index)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::CycleNotFound,
                    format!("cycle {} not found", cmd.cycle_index),
                )
                .with_detail("internship_id", cmd.internship_id.to_string())
            })?;

        let submitted_at = cmd.submitted_at.unwrap_or_else(|| self.clock.now());

        let stamp = match cmd.kind {
            AlertKind::Report => {
                self.check_report_transition(&cmd).await?;
                SubmissionStamp::for_report(&cycle, submitted_at)
            }
            AlertKind::Visit => {
                self.check_visit_transition(&cmd).await?;
                SubmissionStamp::for_visit(&cycle, submitted_at)
            }
        };

        if stamp.is_late {
            info!(
                internship_id = %schedule.internship.id,
                kind = ?stamp.kind,
                cycle_index = stamp.cycle_index,
                days_late = stamp.days_late,
                "Submission stamped late"
            );
        }

        Ok(stamp)
    }

    async fn check_report_transition(&self, cmd: &StampSubmissionCommand) -> Result<(), DomainError> {
        let reports = self.reader.list_reports(&cmd.internship_id).await?;
        let current = reports
            .iter()
            .find(|r| r.cycle_index == cmd.cycle_index)
            .and_then(|r| r.parsed_status())
            .unwrap_or_default();
        if current != ReportRecordStatus::Submitted {
            current.transition_to(ReportRecordStatus::Submitted)?;
        }
        Ok(())
    }

    async fn check_visit_transition(&self, cmd: &StampSubmissionCommand) -> Result<(), DomainError> {
        let visits = self.reader.list_visits(&cmd.internship_id).await?;
        let current = visits
            .iter()
            .find(|v| v.cycle_index == cmd.cycle_index)
            .and_then(|v| v.parsed_status())
            .unwrap_or_default();
        current.transition_to(VisitRecordStatus::Completed)?;
        Ok(())
    }
}
