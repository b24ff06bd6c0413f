//! Calendar primitives shared by both cycle models.

use chrono::{Datelike, NaiveDate};

use super::ValidationError;

/// English display labels for months, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn check_month(month: u32) -> Result<(), ValidationError> {
    if !(1..=12).contains(&month) {
        return Err(ValidationError::out_of_range("month", 1, 12, i64::from(month)));
    }
    Ok(())
}

/// Returns the number of days in a month, accounting for leap years.
///
/// # Errors
///
/// Returns `OutOfRange` when `month` is outside 1-12.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, ValidationError> {
    check_month(month)?;
    month_bounds(year, month)
        .map(|(_, last)| last.day())
        .ok_or_else(|| ValidationError::invalid_format("year", format!("{} is out of range", year)))
}

/// Returns the display label for a 1-based month number.
///
/// # Errors
///
/// Returns `OutOfRange` when `month` is outside 1-12.
pub fn month_name(month: u32) -> Result<&'static str, ValidationError> {
    check_month(month)?;
    Ok(MONTH_NAMES[(month - 1) as usize])
}

/// Returns the month following `(year, month)`, wrapping at December.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// First and last calendar day of a month, or `None` if unrepresentable.
pub(crate) fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_month) = next_month(year, month);
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
    Some((first, last))
}

/// Day-of-month clamped to the month's length, e.g. day 31 of April is the 30th.
pub(crate) fn clamped_day(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let (_, last) = month_bounds(year, month)?;
    NaiveDate::from_ymd_opt(year, month, day.clamp(1, last.day()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2025, 2).unwrap(), 28);
        assert_eq!(days_in_month(2000, 2).unwrap(), 29);
        assert_eq!(days_in_month(1900, 2).unwrap(), 28);
    }

    #[test]
    fn days_in_month_covers_long_and_short_months() {
        assert_eq!(days_in_month(2026, 1).unwrap(), 31);
        assert_eq!(days_in_month(2026, 4).unwrap(), 30);
        assert_eq!(days_in_month(2026, 12).unwrap(), 31);
    }

    #[test]
    fn days_in_month_rejects_invalid_month() {
        assert_eq!(
            days_in_month(2026, 0),
            Err(ValidationError::out_of_range("month", 1, 12, 0))
        );
        assert!(days_in_month(2026, 13).is_err());
    }

    #[test]
    fn month_name_returns_label() {
        assert_eq!(month_name(1).unwrap(), "January");
        assert_eq!(month_name(12).unwrap(), "December");
        assert!(month_name(13).is_err());
    }

    #[test]
    fn next_month_wraps_december() {
        assert_eq!(next_month(2025, 12), (2026, 1));
        assert_eq!(next_month(2026, 1), (2026, 2));
    }

    #[test]
    fn clamped_day_caps_to_month_length() {
        assert_eq!(
            clamped_day(2026, 2, 31),
            NaiveDate::from_ymd_opt(2026, 2, 28)
        );
        assert_eq!(clamped_day(2026, 3, 5), NaiveDate::from_ymd_opt(2026, 3, 5));
    }
}
