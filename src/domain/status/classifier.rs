//! StatusClassifier - entry point for report and visit status queries.

use super::report::{classify_report, ReportStatusResult};
use super::visit::{classify_visit, VisitStatusResult};
use super::{ReportRecord, VisitRecord};
use crate::domain::cycle::StatusRules;
use crate::domain::foundation::Timestamp;

/// Classifies reports and visits relative to their due dates.
///
/// Classification never fails. Unknown status strings fall back to
/// comparing the due date with `now`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusClassifier {
    rules: StatusRules,
}

impl StatusClassifier {
    /// Creates a classifier with the given rules.
    pub fn new(rules: StatusRules) -> Self {
        Self { rules }
    }

    /// Classifies a report due at `due`.
    pub fn report(
        &self,
        due: Timestamp,
        record: Option<&ReportRecord>,
        now: Timestamp,
    ) -> ReportStatusResult {
        classify_report(due, record, now, &self.rules)
    }

    /// Classifies a mentor visit due at `due`.
    pub fn visit(
        &self,
        due: Timestamp,
        record: Option<&VisitRecord>,
        now: Timestamp,
    ) -> VisitStatusResult {
        classify_visit(due, record, now, &self.rules)
    }
}
