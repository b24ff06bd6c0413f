//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, calendar helpers, status enums and
//! error types that form the vocabulary of the compliance domain.

pub mod calendar;
mod errors;
mod ids;
mod percentage;
mod report_status;
mod state_machine;
mod timestamp;
mod visit_status;

pub use calendar::{days_in_month, month_name, next_month, MONTH_NAMES};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{InstitutionId, InternshipId};
pub use percentage::Percentage;
pub use report_status::ReportRecordStatus;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
pub use visit_status::VisitRecordStatus;
