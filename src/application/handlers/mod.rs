//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod compliance;

pub use compliance::{
    CollectOverdueAlertsHandler, CollectOverdueAlertsQuery, GetComplianceSummaryHandler,
    GetComplianceSummaryQuery, StampSubmissionCommand, StampSubmissionHandler,
};
