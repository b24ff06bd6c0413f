//! Fixed-duration cycle model - 4-week windows anchored on the start date.
//!
//! Every internship gets its own schedule: cycle 1 starts on the student's
//! first day, not on a calendar boundary, so two students who start a week
//! apart have deadlines a week apart.
//!
//! # Timeline
//!
//! ```text
//! start                 start+27   +1 .. +grace
//!   |------ cycle 1 ------|  [submission window]  due = last window day, 23:59:59.999
//!                          |------ cycle 2 ------| ...
//! ```

use tracing::warn;

use super::{
    CycleDescriptor, CycleModel, CycleModelKind, CycleWindow, FixedDurationRules, InternshipDates,
};
use crate::domain::foundation::Timestamp;

/// The legacy 4-week cycle model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedDurationModel {
    rules: FixedDurationRules,
}

impl FixedDurationModel {
    /// Creates a model with the given rules.
    pub fn new(rules: FixedDurationRules) -> Self {
        Self { rules }
    }

    /// Returns the rules this model was built with.
    pub fn rules(&self) -> &FixedDurationRules {
        &self.rules
    }

    /// Closed-form cycle count without building descriptors.
    ///
    /// Agrees with `cycles(dates).len()` for every input.
    pub fn estimated_cycle_count(&self, dates: &InternshipDates) -> usize {
        let span = dates.span_days();
        if span == 0 {
            return 0;
        }
        let span = u64::from(span);
        let duration = u64::from(self.rules.cycle_duration_days.max(1));
        let count = (span + duration - 1) / duration;
        count.min(u64::from(self.rules.max_cycles.max(1))) as usize
    }

    fn single_day_cycle(&self, start: Timestamp, end: Timestamp) -> CycleDescriptor {
        let window_start = end.add_days(1).start_of_day();
        let due = end
            .add_days(1 + i64::from(self.rules.submission_grace_days))
            .end_of_day();
        let visit_due = end
            .add_days(1 + i64::from(self.rules.visit_grace_days))
            .end_of_day();
        CycleDescriptor {
            index: 1,
            period_start: start,
            period_end: end,
            days_in_period: 1,
            report_due_at: due,
            visit_due_at: visit_due,
            is_first: true,
            is_last: true,
            window: CycleWindow::FixedDuration {
                submission_window_start: window_start,
                submission_window_end: due,
            },
        }
    }

    fn window_cycle(&self, index: u32, start: Timestamp, end: Timestamp, is_last: bool) -> CycleDescriptor {
        let grace = i64::from(self.rules.submission_grace_days);
        let window_start = end.add_days(1).start_of_day();
        let window_end = end.add_days(grace).end_of_day();
        let visit_due = end
            .add_days(i64::from(self.rules.visit_grace_days))
            .end_of_day();
        CycleDescriptor {
            index,
            period_start: start,
            period_end: end,
            days_in_period: (end.calendar_days_since(&start) + 1) as u32,
            report_due_at: window_end,
            visit_due_at: visit_due,
            is_first: index == 1,
            is_last,
            window: CycleWindow::FixedDuration {
                submission_window_start: window_start,
                submission_window_end: window_end,
            },
        }
    }
}

impl CycleModel for FixedDurationModel {
    fn kind(&self) -> CycleModelKind {
        CycleModelKind::FixedDuration
    }

    fn cycles(&self, dates: &InternshipDates) -> Vec<CycleDescriptor> {
        let start = dates.normalized_start();
        let end = dates.normalized_end();

        if end < start {
            return Vec::new();
        }
        if dates.is_single_day() {
            return vec![self.single_day_cycle(start, end)];
        }

        let span = i64::from(self.rules.cycle_duration_days.max(1)) - 1;
        let max_cycles = self.rules.max_cycles.max(1);
        let mut cycles = Vec::new();
        let mut cycle_start = start;

        for index in 1..=max_cycles {
            let natural_end = cycle_start.add_days(span).end_of_day();
            let is_final = natural_end >= end;
            let cycle_end = if is_final { end } else { natural_end };

            cycles.push(self.window_cycle(index, cycle_start, cycle_end, is_final));
            if is_final {
                return cycles;
            }
            cycle_start = natural_end.add_days(1).start_of_day();
        }

        warn!(
            start = %start,
            end = %end,
            max_cycles,
            "fixed-duration cycle generation reached its ceiling"
        );
        if let Some(last) = cycles.last_mut() {
            last.is_last = true;
        }
        cycles
    }

    fn total_expected_count(&self, dates: &InternshipDates) -> usize {
        self.estimated_cycle_count(dates)
    }
}
