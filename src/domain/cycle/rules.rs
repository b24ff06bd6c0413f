//! Tunable parameters for both cycle models.
//!
//! These are plain values injected at model construction. The `config`
//! module deserializes them from the environment or a settings file.

use serde::{Deserialize, Serialize};

/// Parameters of the fixed-duration (4-week) cycle model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedDurationRules {
    /// Length of one cycle in days.
    #[serde(default = "default_cycle_duration_days")]
    pub cycle_duration_days: u32,

    /// Days the report submission window stays open after a cycle ends.
    #[serde(default = "default_grace_days")]
    pub submission_grace_days: u32,

    /// Days after a cycle ends by which the mentor visit is due.
    #[serde(default = "default_grace_days")]
    pub visit_grace_days: u32,

    /// Hard ceiling on generated cycles (26 x 4 weeks is about two years).
    #[serde(default = "default_max_cycles")]
    pub max_cycles: u32,
}

impl Default for FixedDurationRules {
    fn default() -> Self {
        Self {
            cycle_duration_days: default_cycle_duration_days(),
            submission_grace_days: default_grace_days(),
            visit_grace_days: default_grace_days(),
            max_cycles: default_max_cycles(),
        }
    }
}

/// Parameters of the calendar-month cycle model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarMonthRules {
    /// A month counts only when the internship covers strictly more days than this.
    #[serde(default = "default_min_days_for_inclusion")]
    pub min_days_for_inclusion: u32,

    /// Day of the following month on which a month's report is due.
    #[serde(default = "default_report_due_day")]
    pub report_due_day: u32,

    /// Hard ceiling on generated months.
    #[serde(default = "default_max_months")]
    pub max_months: u32,
}

impl Default for CalendarMonthRules {
    fn default() -> Self {
        Self {
            min_days_for_inclusion: default_min_days_for_inclusion(),
            report_due_day: default_report_due_day(),
            max_months: default_max_months(),
        }
    }
}

/// Parameters of the report/visit status classifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRules {
    /// Items due within this many days are flagged "due soon".
    #[serde(default = "default_due_soon_days")]
    pub due_soon_days: u32,
}

impl Default for StatusRules {
    fn default() -> Self {
        Self {
            due_soon_days: default_due_soon_days(),
        }
    }
}

fn default_cycle_duration_days() -> u32 {
    28
}

fn default_grace_days() -> u32 {
    5
}

fn default_max_cycles() -> u32 {
    26
}

fn default_min_days_for_inclusion() -> u32 {
    10
}

fn default_report_due_day() -> u32 {
    5
}

fn default_max_months() -> u32 {
    24
}

fn default_due_soon_days() -> u32 {
    7
}
