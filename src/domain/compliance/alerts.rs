//! Overdue alerts for notification fan-out.

use serde::Serialize;

use crate::domain::cycle::{CycleModel, InternshipDates};
use crate::domain::foundation::Timestamp;
use crate::domain::status::{ReportRecord, StatusClassifier, VisitRecord};

/// What an alert is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Report,
    Visit,
}

/// An overdue item someone should be reminded about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverdueAlert {
    pub kind: AlertKind,
    pub cycle_index: u32,
    pub cycle_label: String,
    pub due_at: Timestamp,
    pub days_overdue: u32,
    pub status_label: String,
}

/// Collects actionable overdue reports and visits, in cycle order.
///
/// Items already approved or completed late are not actionable and produce
/// no alert.
pub fn collect_overdue_alerts(
    model: &dyn CycleModel,
    classifier: &StatusClassifier,
    dates: &InternshipDates,
    reports: &[ReportRecord],
    visits: &[VisitRecord],
    now: Timestamp,
) -> Vec<OverdueAlert> {
    let mut alerts = Vec::new();

    for cycle in model.cycles(dates) {
        let report = reports.iter().find(|r| r.cycle_index == cycle.index);
        let result = classifier.report(cycle.report_due_at, report, now);
        if result.is_overdue && result.can_submit {
            alerts.push(OverdueAlert {
                kind: AlertKind::Report,
                cycle_index: cycle.index,
                cycle_label: cycle.label(),
                due_at: cycle.report_due_at,
                days_overdue: result.days_overdue,
                status_label: result.label,
            });
        }

        let visit = visits.iter().find(|v| v.cycle_index == cycle.index);
        let result = classifier.visit(cycle.visit_due_at, visit, now);
        if result.is_overdue && result.can_complete {
            alerts.push(OverdueAlert {
                kind: AlertKind::Visit,
                cycle_index: cycle.index,
                cycle_label: cycle.label(),
                due_at: cycle.visit_due_at,
                days_overdue: result.days_overdue,
                status_label: result.label,
            });
        }
    }

    alerts
}
