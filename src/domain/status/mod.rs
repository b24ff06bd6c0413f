//! Status module - live classification of reports and mentor visits.
//!
//! Pure functions over a due date, an optional caller-supplied record and the
//! current instant. Late actions are never blocked, only flagged.

mod classifier;
mod lateness;
mod records;
mod report;
mod visit;

pub use classifier::StatusClassifier;
pub use lateness::{is_submission_late, Lateness};
pub use records::{ReportRecord, VisitRecord};
pub use report::{ReportState, ReportStatusResult};
pub use visit::{VisitState, VisitStatusResult};
