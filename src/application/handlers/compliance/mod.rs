//! Compliance query and command handlers.

mod collect_overdue_alerts;
mod get_compliance_summary;
mod schedule;
mod stamp_submission;

pub use collect_overdue_alerts::{CollectOverdueAlertsHandler, CollectOverdueAlertsQuery};
pub use get_compliance_summary::{GetComplianceSummaryHandler, GetComplianceSummaryQuery};
pub use stamp_submission::{StampSubmissionCommand, StampSubmissionHandler};
