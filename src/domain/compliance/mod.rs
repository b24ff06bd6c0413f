//! Compliance module - aggregate views consumed by dashboards and alerting.
//!
//! # Components
//!
//! - `ComplianceSummary` - expected vs. submitted counts and progress
//! - `collect_overdue_alerts` - actionable overdue items per internship
//! - `SubmissionStamp` - lateness stamped on a submission at write time

mod alerts;
mod stamp;
mod summary;

pub use alerts::{collect_overdue_alerts, AlertKind, OverdueAlert};
pub use stamp::SubmissionStamp;
pub use summary::ComplianceSummary;
