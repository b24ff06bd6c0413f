//! Caller-owned report and visit records as read from storage.
//!
//! Status fields stay raw strings: classification must keep working when the
//! stored value is something this crate does not know about.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ReportRecordStatus, Timestamp, VisitRecordStatus};

/// A student's report for one cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    pub cycle_index: u32,
    pub status: String,
    pub submitted_at: Option<Timestamp>,
}

impl ReportRecord {
    /// Creates a record with no submission timestamp.
    pub fn new(cycle_index: u32, status: impl Into<String>) -> Self {
        Self {
            cycle_index,
            status: status.into(),
            submitted_at: None,
        }
    }

    /// Sets the submission timestamp.
    pub fn submitted_at(mut self, at: Timestamp) -> Self {
        self.submitted_at = Some(at);
        self
    }

    /// The parsed status, or `None` when unrecognized.
    pub fn parsed_status(&self) -> Option<ReportRecordStatus> {
        ReportRecordStatus::parse_lenient(&self.status)
    }
}

/// A mentor visit record for one cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitRecord {
    pub cycle_index: u32,
    pub status: String,
    pub completed_at: Option<Timestamp>,
}

impl VisitRecord {
    /// Creates a record with no completion timestamp.
    pub fn new(cycle_index: u32, status: impl Into<String>) -> Self {
        Self {
            cycle_index,
            status: status.into(),
            completed_at: None,
        }
    }

    /// Sets the completion timestamp.
    pub fn completed_at(mut self, at: Timestamp) -> Self {
        self.completed_at = Some(at);
        self
    }

    /// The parsed status, or `None` when unrecognized.
    pub fn parsed_status(&self) -> Option<VisitRecordStatus> {
        VisitRecordStatus::parse_lenient(&self.status)
    }
}
