//! ComplianceSummary - the "X of Y submitted" view for dashboards.

use serde::Serialize;

use crate::domain::cycle::{CycleDescriptor, CycleModel, CycleModelKind, InternshipDates};
use crate::domain::foundation::{Percentage, ReportRecordStatus, Timestamp, VisitRecordStatus};
use crate::domain::status::{ReportRecord, VisitRecord};

/// Progress of one internship against its compliance schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceSummary {
    pub model: CycleModelKind,
    pub total_cycles: usize,

    /// Cycles whose report/visit due date has passed
    pub expected_reports: usize,
    pub expected_visits: usize,

    /// Due cycles that have a submitted or approved report / completed visit
    pub submitted_reports: usize,
    pub completed_visits: usize,
    pub missing_reports: usize,
    pub missing_visits: usize,

    pub report_progress: Percentage,
    pub visit_progress: Percentage,

    pub current_cycle: Option<CycleDescriptor>,
    pub next_report_due: Option<Timestamp>,
    pub next_visit_due: Option<Timestamp>,
    pub evaluated_at: Timestamp,
}

impl ComplianceSummary {
    /// Computes the summary at `now`.
    ///
    /// Records for cycles that are not yet due do not count toward progress.
    pub fn compute(
        model: &dyn CycleModel,
        dates: &InternshipDates,
        reports: &[ReportRecord],
        visits: &[VisitRecord],
        now: Timestamp,
    ) -> Self {
        let cycles = model.cycles(dates);
        let started = !dates.is_reversed() && now >= dates.normalized_start();

        let due_reports: Vec<u32> = cycles
            .iter()
            .filter(|c| started && c.is_report_due(&now))
            .map(|c| c.index)
            .collect();
        let due_visits: Vec<u32> = cycles
            .iter()
            .filter(|c| started && c.is_visit_due(&now))
            .map(|c| c.index)
            .collect();

        let submitted_reports = due_reports
            .iter()
            .filter(|index| reports.iter().any(|r| r.cycle_index == **index && is_submitted(r)))
            .count();
        let completed_visits = due_visits
            .iter()
            .filter(|index| visits.iter().any(|v| v.cycle_index == **index && is_completed(v)))
            .count();

        Self {
            model: model.kind(),
            total_cycles: cycles.len(),
            expected_reports: due_reports.len(),
            expected_visits: due_visits.len(),
            submitted_reports,
            completed_visits,
            missing_reports: due_reports.len() - submitted_reports,
            missing_visits: due_visits.len() - completed_visits,
            report_progress: Percentage::from_ratio(submitted_reports, due_reports.len()),
            visit_progress: Percentage::from_ratio(completed_visits, due_visits.len()),
            current_cycle: model.current_cycle(dates, now),
            next_report_due: model.next_report_due(dates, now),
            next_visit_due: model.next_visit_due(dates, now),
            evaluated_at: now,
        }
    }

    /// True when every due report and visit is in.
    pub fn is_compliant(&self) -> bool {
        self.missing_reports == 0 && self.missing_visits == 0
    }
}

fn is_submitted(record: &ReportRecord) -> bool {
    matches!(
        record.parsed_status(),
        Some(ReportRecordStatus::Submitted | ReportRecordStatus::Approved)
    )
}

fn is_completed(record: &VisitRecord) -> bool {
    record.parsed_status() == Some(VisitRecordStatus::Completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cycle::{CalendarMonthModel, FixedDurationModel};

    fn ts(input: &str) -> Timestamp {
        Timestamp::parse(input).unwrap()
    }

    fn dates() -> InternshipDates {
        InternshipDates::new(ts("2026-01-15"), ts("2026-05-15"))
    }

    #[test]
    fn summary_counts_due_and_submitted_reports() {
        let reports = vec![
            ReportRecord::new(1, "APPROVED").submitted_at(ts("2026-02-03")),
            ReportRecord::new(2, "DRAFT"),
            ReportRecord::new(3, "SUBMITTED").submitted_at(ts("2026-04-04")),
        ];
        let visits = vec![VisitRecord::new(1, "COMPLETED").completed_at(ts("2026-01-30"))];

        let summary = ComplianceSummary::compute(
            &CalendarMonthModel::default(),
            &dates(),
            &reports,
            &visits,
            ts("2026-04-10"),
        );

        assert_eq!(summary.model, CycleModelKind::CalendarMonth);
        assert_eq!(summary.total_cycles, 5);
        assert_eq!(summary.expected_reports, 3);
        assert_eq!(summary.submitted_reports, 2);
        assert_eq!(summary.missing_reports, 1);
        assert_eq!(summary.report_progress.value(), 66);
        assert_eq!(summary.expected_visits, 3);
        assert_eq!(summary.completed_visits, 1);
        assert_eq!(summary.visit_progress.value(), 33);
        assert!(!summary.is_compliant());
        assert_eq!(summary.current_cycle.unwrap().index, 4);
        assert_eq!(summary.next_report_due, Some(ts("2026-05-05").end_of_day()));
        assert_eq!(summary.next_visit_due, Some(ts("2026-04-30").end_of_day()));
    }

    #[test]
    fn records_for_future_cycles_do_not_inflate_progress() {
        let reports = vec![ReportRecord::new(5, "SUBMITTED")];
        let summary = ComplianceSummary::compute(
            &CalendarMonthModel::default(),
            &dates(),
            &reports,
            &[],
            ts("2026-02-10"),
        );
        assert_eq!(summary.expected_reports, 1);
        assert_eq!(summary.submitted_reports, 0);
    }

    #[test]
    fn summary_before_start_is_trivially_compliant() {
        let summary = ComplianceSummary::compute(
            &FixedDurationModel::default(),
            &dates(),
            &[],
            &[],
            ts("2026-01-01"),
        );
        assert_eq!(summary.expected_reports, 0);
        assert_eq!(summary.report_progress, Percentage::HUNDRED);
        assert!(summary.is_compliant());
        assert_eq!(summary.current_cycle.unwrap().index, 1);
    }

    #[test]
    fn reversed_dates_yield_empty_summary() {
        let reversed = InternshipDates::new(ts("2026-05-15"), ts("2026-01-15"));
        let summary = ComplianceSummary::compute(
            &CalendarMonthModel::default(),
            &reversed,
            &[],
            &[],
            ts("2026-03-01"),
        );
        assert_eq!(summary.total_cycles, 0);
        assert!(summary.current_cycle.is_none());
        assert!(summary.next_report_due.is_none());
    }
}
