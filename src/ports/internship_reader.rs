//! Internship reader port (read side).
//!
//! Supplies the stored internship dates and the report/visit records the
//! compliance queries run against.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::cycle::InternshipDates;
use crate::domain::foundation::{
    DomainError, ErrorCode, InstitutionId, InternshipId, Timestamp,
};
use crate::domain::status::{ReportRecord, VisitRecord};

/// Reader port for internship compliance data.
#[async_trait]
pub trait InternshipReader: Send + Sync {
    /// Get an internship by ID.
    ///
    /// Returns `InternshipNotFound` if it does not exist.
    async fn get_internship(&self, id: &InternshipId) -> Result<InternshipRecord, DomainError>;

    /// List report records for an internship, in any order.
    async fn list_reports(&self, id: &InternshipId) -> Result<Vec<ReportRecord>, DomainError>;

    /// List visit records for an internship, in any order.
    async fn list_visits(&self, id: &InternshipId) -> Result<Vec<VisitRecord>, DomainError>;
}

/// Stored internship as seen by the compliance engine.
///
/// Dates are optional because drafts may be saved before they are known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternshipRecord {
    pub id: InternshipId,
    pub institution_id: InstitutionId,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
}

impl InternshipRecord {
    /// Dates usable by the cycle models.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when either date is missing.
    pub fn dates(&self) -> Result<InternshipDates, DomainError> {
        InternshipDates::from_optional(self.start_date, self.end_date).map_err(|err| {
            let field = err.field().unwrap_or("dates").to_string();
            DomainError::new(ErrorCode::InvalidArgument, "internship start/end date required")
                .with_detail("field", field)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(start: Option<&str>, end: Option<&str>) -> InternshipRecord {
        InternshipRecord {
            id: InternshipId::new(),
            institution_id: InstitutionId::new("uni-1").unwrap(),
            start_date: start.map(|s| Timestamp::parse(s).unwrap()),
            end_date: end.map(|s| Timestamp::parse(s).unwrap()),
        }
    }

    #[test]
    fn dates_are_built_when_both_present() {
        let dates = record(Some("2026-01-15"), Some("2026-05-15")).dates().unwrap();
        assert_eq!(dates.span_days(), 121);
    }

    #[test]
    fn missing_end_date_is_invalid_argument() {
        let err = record(Some("2026-01-15"), None).dates().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
        assert_eq!(err.message, "internship start/end date required");
        assert_eq!(err.details.get("field").map(String::as_str), Some("end_date"));
    }

    #[test]
    fn missing_start_date_is_reported_first() {
        let err = record(None, None).dates().unwrap_err();
        assert_eq!(err.details.get("field").map(String::as_str), Some("start_date"));
    }
}
