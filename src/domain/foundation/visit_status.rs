//! VisitRecordStatus enum for mentor visit records.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// State of a stored mentor visit record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisitRecordStatus {
    #[default]
    Pending,
    Scheduled,
    Completed,
}

impl VisitRecordStatus {
    /// Parses a stored status string, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for anything unrecognized.
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(VisitRecordStatus::Pending),
            "scheduled" => Some(VisitRecordStatus::Scheduled),
            "completed" | "done" => Some(VisitRecordStatus::Completed),
            _ => None,
        }
    }

    /// Returns the wire representation used by the portal's records.
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitRecordStatus::Pending => "PENDING",
            VisitRecordStatus::Scheduled => "SCHEDULED",
            VisitRecordStatus::Completed => "COMPLETED",
        }
    }
}

impl StateMachine for VisitRecordStatus {
    fn valid_transitions(&self) -> Vec<Self> {
        use VisitRecordStatus::*;
        match self {
            Pending => vec![Scheduled, Completed],
            Scheduled => vec![Pending, Completed],
            Completed => vec![],
        }
    }
}

impl fmt::Display for VisitRecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lenient_ignores_case() {
        assert_eq!(VisitRecordStatus::parse_lenient("Completed"), Some(VisitRecordStatus::Completed));
        assert_eq!(VisitRecordStatus::parse_lenient("SCHEDULED"), Some(VisitRecordStatus::Scheduled));
        assert_eq!(VisitRecordStatus::parse_lenient("cancelled"), None);
    }

    #[test]
    fn completed_is_terminal() {
        assert!(VisitRecordStatus::Completed.is_terminal());
        assert!(!VisitRecordStatus::Scheduled.is_terminal());
    }

    #[test]
    fn scheduled_visit_can_be_rescheduled_back_to_pending() {
        assert!(VisitRecordStatus::Scheduled.can_transition_to(&VisitRecordStatus::Pending));
        assert!(!VisitRecordStatus::Completed.can_transition_to(&VisitRecordStatus::Pending));
    }
}
