//! Calendar-month cycle model - reporting periods aligned to calendar months.
//!
//! A month counts toward compliance only when the internship covers strictly
//! more than `min_days_for_inclusion` days of it. Reports for month M are due
//! on `report_due_day` of month M+1; mentor visits are due on the last day of
//! month M itself.

use chrono::{Datelike, NaiveDate};
use tracing::warn;

use super::{
    CalendarMonthRules, CycleDescriptor, CycleModel, CycleModelKind, CycleWindow, InternshipDates,
};
use crate::domain::foundation::{calendar, Timestamp, ValidationError};

/// The calendar-aligned monthly cycle model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalendarMonthModel {
    rules: CalendarMonthRules,
}

impl CalendarMonthModel {
    /// Creates a model with the given rules.
    pub fn new(rules: CalendarMonthRules) -> Self {
        Self { rules }
    }

    /// Returns the rules this model was built with.
    pub fn rules(&self) -> &CalendarMonthRules {
        &self.rules
    }

    /// Every month the internship touches, with its inclusion flag.
    ///
    /// Indices and `is_first`/`is_last` are relative to this full sequence.
    /// Intended for audit and diagnostic display.
    pub fn all_months(&self, dates: &InternshipDates) -> Vec<CycleDescriptor> {
        let start = dates.normalized_start();
        let end = dates.normalized_end();
        if end < start {
            return Vec::new();
        }

        let mut months = Vec::new();
        let (mut year, mut month) = (start.date().year(), start.date().month());

        for index in 1..=self.rules.max_months.max(1) {
            let Some(descriptor) = self.month_descriptor(index, year, month, start, end) else {
                break;
            };
            months.push(descriptor);
            (year, month) = calendar::next_month(year, month);
        }

        if let Some((last_year, last_month)) = months.last().map(year_month) {
            let (next_year, next_month) = calendar::next_month(last_year, last_month);
            let more_remaining = Timestamp::from_ymd(next_year, next_month, 1)
                .map(|first| first <= end)
                .unwrap_or(false);
            if more_remaining {
                warn!(
                    start = %start,
                    end = %end,
                    max_months = self.rules.max_months,
                    "calendar-month generation reached its ceiling"
                );
            }
        }

        if let Some(last) = months.last_mut() {
            last.is_last = true;
        }
        months
    }

    /// Months that count toward compliance, re-indexed from 1.
    ///
    /// `is_first`/`is_last` mark the first and last *included* month.
    pub fn included_months(&self, dates: &InternshipDates) -> Vec<CycleDescriptor> {
        let mut included: Vec<CycleDescriptor> = self
            .all_months(dates)
            .into_iter()
            .filter(CycleDescriptor::is_included)
            .collect();

        let count = included.len();
        for (position, month) in included.iter_mut().enumerate() {
            month.index = position as u32 + 1;
            month.is_first = position == 0;
            month.is_last = position + 1 == count;
        }
        included
    }

    /// Report due date for month `(year, month)`: `report_due_day` of the
    /// following month at end-of-day, clamped to that month's length.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` when `month` is outside 1-12.
    pub fn report_due_date(&self, year: i32, month: u32) -> Result<Timestamp, ValidationError> {
        calendar::days_in_month(year, month)?;
        self.report_due(year, month).ok_or_else(|| {
            ValidationError::invalid_format("year", format!("{} is out of range", year))
        })
    }

    /// Visit due date for month `(year, month)`: its last day at end-of-day.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` when `month` is outside 1-12.
    pub fn visit_due_date(&self, year: i32, month: u32) -> Result<Timestamp, ValidationError> {
        let last_day = calendar::days_in_month(year, month)?;
        Ok(Timestamp::from_ymd(year, month, last_day)?.end_of_day())
    }

    fn report_due(&self, year: i32, month: u32) -> Option<Timestamp> {
        let (due_year, due_month) = calendar::next_month(year, month);
        calendar::clamped_day(due_year, due_month, self.rules.report_due_day)
            .map(|date| Timestamp::from_date(date).end_of_day())
    }

    fn month_descriptor(
        &self,
        index: u32,
        year: i32,
        month: u32,
        start: Timestamp,
        end: Timestamp,
    ) -> Option<CycleDescriptor> {
        let (first, last) = calendar::month_bounds(year, month)?;
        let month_start = Timestamp::from_date(first);
        if month_start > end {
            return None;
        }
        let month_end = Timestamp::from_date(last).end_of_day();

        let period_start = start.max(month_start);
        let period_end = end.min(month_end);
        let days_in_period = (period_end.calendar_days_since(&period_start) + 1) as u32;

        Some(CycleDescriptor {
            index,
            period_start,
            period_end,
            days_in_period,
            report_due_at: self
                .report_due(year, month)
                .unwrap_or_else(|| Timestamp::from_date(NaiveDate::MAX).end_of_day()),
            visit_due_at: month_end,
            is_first: index == 1,
            is_last: false,
            window: CycleWindow::CalendarMonth {
                year,
                month,
                is_included: days_in_period > self.rules.min_days_for_inclusion,
            },
        })
    }
}

fn year_month(descriptor: &CycleDescriptor) -> (i32, u32) {
    match descriptor.window {
        CycleWindow::CalendarMonth { year, month, .. } => (year, month),
        CycleWindow::FixedDuration { .. } => (
            descriptor.period_start.date().year(),
            descriptor.period_start.date().month(),
        ),
    }
}

impl CycleModel for CalendarMonthModel {
    fn kind(&self) -> CycleModelKind {
        CycleModelKind::CalendarMonth
    }

    fn cycles(&self, dates: &InternshipDates) -> Vec<CycleDescriptor> {
        self.included_months(dates)
    }
}

#[cfg(test)]
#[path = "calendar_month_test.rs"]
mod calendar_month_test;
