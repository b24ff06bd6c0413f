//! InternshipDates value object - the two inputs every cycle query starts from.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, ValidationError};

/// Start and end of an internship as recorded by the caller.
///
/// A reversed range is representable on purpose: compliance queries run over
/// every stored internship, bad data included, and must yield empty results
/// instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternshipDates {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl InternshipDates {
    /// Creates dates from two known timestamps.
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Creates dates from optional stored values.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` naming the first missing date.
    pub fn from_optional(
        start: Option<Timestamp>,
        end: Option<Timestamp>,
    ) -> Result<Self, ValidationError> {
        let start = start.ok_or_else(|| ValidationError::empty_field("start_date"))?;
        let end = end.ok_or_else(|| ValidationError::empty_field("end_date"))?;
        Ok(Self::new(start, end))
    }

    /// Parses dates from optional raw strings.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` for a missing or blank date and `InvalidFormat`
    /// for one that is not a calendar date.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self, ValidationError> {
        let start = parse_field("start_date", start)?;
        let end = parse_field("end_date", end)?;
        Ok(Self::new(start, end))
    }

    /// Start clamped to start-of-day.
    pub fn normalized_start(&self) -> Timestamp {
        self.start.start_of_day()
    }

    /// End clamped to end-of-day.
    pub fn normalized_end(&self) -> Timestamp {
        self.end.end_of_day()
    }

    /// True when the end falls on an earlier calendar day than the start.
    pub fn is_reversed(&self) -> bool {
        self.normalized_end() < self.normalized_start()
    }

    /// True when start and end fall on the same calendar day.
    pub fn is_single_day(&self) -> bool {
        self.start.is_same_day(&self.end)
    }

    /// Inclusive count of calendar days covered, 0 when reversed.
    pub fn span_days(&self) -> u32 {
        if self.is_reversed() {
            return 0;
        }
        (self.end.calendar_days_since(&self.start) + 1) as u32
    }
}

fn parse_field(field: &str, raw: Option<&str>) -> Result<Timestamp, ValidationError> {
    let raw = raw
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ValidationError::empty_field(field))?;
    Timestamp::parse(raw).map_err(|err| match err {
        ValidationError::InvalidFormat { reason, .. } => ValidationError::invalid_format(field, reason),
        other => other,
    })
}
