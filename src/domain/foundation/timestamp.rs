//! Timestamp value object for points in local calendar time.
//!
//! All engine arithmetic happens on the wall-clock calendar of the caller.
//! No timezone conversion is performed: RFC 3339 input keeps its local part.
//!
//! Day arithmetic saturates at the ends of the representable calendar, so a
//! date far in the future never panics; it simply stops moving.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Immutable point in local calendar time, millisecond precision in practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Creates a timestamp for the current local moment.
    pub fn now() -> Self {
        Self(Local::now().naive_local())
    }

    /// Creates a timestamp from a naive local date-time.
    pub fn from_datetime(dt: NaiveDateTime) -> Self {
        Self(dt)
    }

    /// Creates a timestamp at the start of the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::default()))
    }

    /// Creates a start-of-day timestamp from calendar components.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::from_date)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "date",
                    format!("{:04}-{:02}-{:02} is not a calendar date", year, month, day),
                )
            })
    }

    /// Parses a date or date-time string.
    ///
    /// Accepts `YYYY-MM-DD`, naive ISO 8601 date-times and RFC 3339. A bare
    /// date resolves to the start of that day.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ValidationError::empty_field("date"));
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Ok(Self(dt.naive_local()));
        }

        for format in NAIVE_DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
                return Ok(Self(dt));
            }
        }

        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .map(Self::from_date)
            .map_err(|_| {
                ValidationError::invalid_format(
                    "date",
                    format!("'{}' is not a recognizable calendar date", input),
                )
            })
    }

    /// Returns the inner date-time.
    pub fn as_datetime(&self) -> &NaiveDateTime {
        &self.0
    }

    /// Returns the calendar date of this timestamp.
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// Returns a copy clamped to 00:00:00.000 of the same day.
    pub fn start_of_day(&self) -> Self {
        Self::from_date(self.0.date())
    }

    /// Returns a copy clamped to 23:59:59.999 of the same day.
    pub fn end_of_day(&self) -> Self {
        let last_millisecond = Duration::milliseconds(MILLIS_PER_DAY - 1);
        Self(
            self.start_of_day()
                .0
                .checked_add_signed(last_millisecond)
                .unwrap_or(NaiveDateTime::MAX),
        )
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Checks if both timestamps fall on the same calendar day.
    pub fn is_same_day(&self, other: &Timestamp) -> bool {
        self.date() == other.date()
    }

    /// Returns the duration from another timestamp to this one.
    ///
    /// Returns negative duration if other is after self.
    pub fn duration_since(&self, other: &Timestamp) -> Duration {
        self.0.signed_duration_since(other.0)
    }

    /// Number of calendar days from `other`'s date to this timestamp's date.
    ///
    /// Negative when `other` falls on a later day.
    pub fn calendar_days_since(&self, other: &Timestamp) -> i64 {
        self.date().signed_duration_since(other.date()).num_days()
    }

    /// Creates a new timestamp by adding the specified number of days.
    ///
    /// Negative values subtract days. Saturates at the calendar bounds.
    pub fn add_days(&self, days: i64) -> Self {
        let shifted = Duration::try_days(days).and_then(|delta| self.0.checked_add_signed(delta));
        match shifted {
            Some(dt) => Self(dt),
            None if days < 0 => Self(NaiveDateTime::MIN),
            None => Self(NaiveDateTime::MAX),
        }
    }

    /// Creates a new timestamp by subtracting the specified number of days.
    pub fn minus_days(&self, days: i64) -> Self {
        self.add_days(days.saturating_neg())
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S%.3f"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn ts(input: &str) -> Timestamp {
        Timestamp::parse(input).unwrap()
    }

    #[test]
    fn parse_accepts_bare_date_at_start_of_day() {
        let t = ts("2026-01-15");
        assert_eq!(t.date(), NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
        assert_eq!(t.as_datetime().hour(), 0);
    }

    #[test]
    fn parse_keeps_wall_clock_of_rfc3339() {
        let t = ts("2026-03-10T22:30:00+05:30");
        assert_eq!(t.as_datetime().day(), 10);
        assert_eq!(t.as_datetime().hour(), 22);
        assert_eq!(t.as_datetime().minute(), 30);
    }

    #[test]
    fn parse_accepts_naive_datetime_with_millis() {
        let t = ts("2026-01-16T23:59:59.999");
        assert_eq!(t, ts("2026-01-16").end_of_day());
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert_eq!(
            Timestamp::parse("   "),
            Err(ValidationError::empty_field("date"))
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = Timestamp::parse("next tuesday").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn parse_rejects_impossible_date() {
        assert!(Timestamp::parse("2025-02-29").is_err());
    }

    #[test]
    fn from_ymd_rejects_invalid_day() {
        assert!(Timestamp::from_ymd(2026, 4, 31).is_err());
        assert!(Timestamp::from_ymd(2024, 2, 29).is_ok());
    }

    #[test]
    fn start_and_end_of_day_clamp_time() {
        let t = ts("2026-05-15T13:45:12");
        assert_eq!(t.start_of_day().to_string(), "2026-05-15T00:00:00.000");
        assert_eq!(t.end_of_day().to_string(), "2026-05-15T23:59:59.999");
    }

    #[test]
    fn end_of_day_is_idempotent() {
        let t = ts("2026-05-15").end_of_day();
        assert_eq!(t.end_of_day(), t);
    }

    #[test]
    fn calendar_days_since_ignores_time_of_day() {
        let due = ts("2026-01-16").end_of_day();
        let now = ts("2026-01-17T00:00:01");
        assert_eq!(now.calendar_days_since(&due), 1);
        assert_eq!(due.calendar_days_since(&now), -1);
    }

    #[test]
    fn add_days_crosses_year_boundary() {
        assert_eq!(ts("2025-12-31").add_days(1), ts("2026-01-01"));
        assert_eq!(ts("2026-01-01").minus_days(1), ts("2025-12-31"));
    }

    #[test]
    fn day_arithmetic_saturates_at_calendar_bounds() {
        let last_day = Timestamp::from_date(NaiveDate::MAX);
        let end = last_day.end_of_day();
        assert_eq!(end.date(), NaiveDate::MAX);
        assert_eq!(end.as_datetime().hour(), 23);
        assert_eq!(end.as_datetime().nanosecond(), 999_000_000);
        assert_eq!(last_day.add_days(5).date(), NaiveDate::MAX);
        assert!(ts("+262142-12-31").add_days(400).is_after(&ts("+262142-12-31")));
        assert_eq!(last_day.add_days(i64::MAX).date(), NaiveDate::MAX);
        assert_eq!(ts("2026-01-01").minus_days(i64::MIN).date(), NaiveDate::MAX);
        assert_eq!(ts("2026-01-01").add_days(i64::MIN).date(), NaiveDate::MIN);
    }

    #[test]
    fn timestamp_serializes_to_json() {
        let json = serde_json::to_string(&ts("2026-01-16").end_of_day()).unwrap();
        assert!(json.contains("2026-01-16T23:59:59.999"));
    }

    #[test]
    fn timestamp_ordering_works() {
        let earlier = ts("2026-01-01");
        let later = ts("2026-01-02");
        assert!(earlier < later);
        assert!(earlier.is_before(&later));
        assert!(later.is_after(&earlier));
    }
}
