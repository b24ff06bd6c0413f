//! Cycle module - reporting and mentor-visit cycles of an internship.
//!
//! Two models compute the same answers from an internship's start and end:
//!
//! - `FixedDurationModel` - 28-day windows anchored on the start date, with a
//!   grace-period submission window after each
//! - `CalendarMonthModel` - calendar months filtered by an inclusion
//!   threshold, reports due on a fixed day of the following month
//!
//! Callers depend on the `CycleModel` trait and obtain a concrete
//! `CycleStrategy` from `CycleModelSelector`.

mod calendar_month;
mod dates;
mod descriptor;
mod fixed_duration;
mod model;
mod rules;
mod strategy;

pub use calendar_month::CalendarMonthModel;
pub use dates::InternshipDates;
pub use descriptor::{CycleDescriptor, CycleWindow};
pub use fixed_duration::FixedDurationModel;
pub use model::{CycleModel, CycleModelKind};
pub use rules::{CalendarMonthRules, FixedDurationRules, StatusRules};
pub use strategy::{CycleModelSelector, CycleStrategy};
