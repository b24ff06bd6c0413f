//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Queries read compliance views; the single command stamps lateness on a
//! submission without blocking it.

pub mod handlers;

pub use handlers::{
    CollectOverdueAlertsHandler, CollectOverdueAlertsQuery, GetComplianceSummaryHandler,
    GetComplianceSummaryQuery, StampSubmissionCommand, StampSubmissionHandler,
};
