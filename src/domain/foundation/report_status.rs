//! ReportRecordStatus enum for the lifecycle of a submitted cycle report.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Review state of a stored report record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportRecordStatus {
    #[default]
    Draft,
    Submitted,
    Approved,
    Rejected,
}

impl ReportRecordStatus {
    /// Parses a stored status string, ignoring case and `-`/`_`/space separators.
    ///
    /// Returns `None` for anything unrecognized; callers degrade to
    /// date-only classification in that case.
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "draft" => Some(ReportRecordStatus::Draft),
            "submitted" | "pendingreview" | "underreview" => Some(ReportRecordStatus::Submitted),
            "approved" => Some(ReportRecordStatus::Approved),
            "rejected" | "returned" => Some(ReportRecordStatus::Rejected),
            _ => None,
        }
    }

    /// Returns the wire representation used by the portal's records.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportRecordStatus::Draft => "DRAFT",
            ReportRecordStatus::Submitted => "SUBMITTED",
            ReportRecordStatus::Approved => "APPROVED",
            ReportRecordStatus::Rejected => "REJECTED",
        }
    }
}

impl StateMachine for ReportRecordStatus {
    fn valid_transitions(&self) -> Vec<Self> {
        use ReportRecordStatus::*;
        match self {
            Draft => vec![Submitted],
            Submitted => vec![Approved, Rejected],
            Rejected => vec![Draft, Submitted],
            Approved => vec![],
        }
    }
}

impl fmt::Display for ReportRecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
