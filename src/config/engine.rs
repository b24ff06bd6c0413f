//! Cycle engine configuration

use std::collections::HashMap;

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::cycle::{
    CalendarMonthRules, CycleModelKind, CycleModelSelector, FixedDurationRules, StatusRules,
};

/// Upper bound for cycle lengths and grace periods, in days.
const MAX_PERIOD_DAYS: u32 = 366;

/// Cycle engine configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Rules for the 28-day model
    #[serde(default)]
    pub fixed_duration: FixedDurationRules,

    /// Rules for the calendar-month model
    #[serde(default)]
    pub calendar_month: CalendarMonthRules,

    /// Status classifier settings
    #[serde(default)]
    pub status: StatusRules,

    /// Model used for institutions without an override
    #[serde(default)]
    pub default_model: CycleModelKind,

    /// Institution id -> model kind
    #[serde(default)]
    pub institution_overrides: HashMap<String, CycleModelKind>,
}

impl EngineConfig {
    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fixed = &self.fixed_duration;
        if !(1..=MAX_PERIOD_DAYS).contains(&fixed.cycle_duration_days) {
            return Err(ValidationError::InvalidCycleDuration);
        }
        if !(1..=MAX_PERIOD_DAYS).contains(&fixed.submission_grace_days) {
            return Err(ValidationError::InvalidGraceDays);
        }
        if fixed.visit_grace_days > MAX_PERIOD_DAYS {
            return Err(ValidationError::InvalidVisitGraceDays);
        }
        if fixed.max_cycles == 0 {
            return Err(ValidationError::InvalidMaxCycles);
        }

        let monthly = &self.calendar_month;
        if !(1..=31).contains(&monthly.report_due_day) {
            return Err(ValidationError::InvalidReportDueDay(monthly.report_due_day));
        }
        if monthly.min_days_for_inclusion > 31 {
            return Err(ValidationError::InvalidInclusionThreshold(
                monthly.min_days_for_inclusion,
            ));
        }
        if monthly.max_months == 0 {
            return Err(ValidationError::InvalidMaxMonths);
        }

        if let Some(blank) = self
            .institution_overrides
            .keys()
            .find(|id| id.trim().is_empty())
        {
            return Err(ValidationError::InvalidInstitutionOverride(blank.clone()));
        }
        Ok(())
    }

    /// Build the per-institution model selector
    pub fn selector(&self) -> CycleModelSelector {
        CycleModelSelector::new(self.default_model, self.fixed_duration, self.calendar_month)
            .with_overrides(self.institution_overrides.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::InstitutionId;

    #[test]
    fn test_engine_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.fixed_duration.cycle_duration_days, 28);
        assert_eq!(config.fixed_duration.submission_grace_days, 5);
        assert_eq!(config.fixed_duration.max_cycles, 26);
        assert_eq!(config.calendar_month.min_days_for_inclusion, 10);
        assert_eq!(config.calendar_month.report_due_day, 5);
        assert_eq!(config.calendar_month.max_months, 24);
        assert_eq!(config.status.due_soon_days, 7);
        assert_eq!(config.default_model, CycleModelKind::CalendarMonth);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_zero_duration() {
        let mut config = EngineConfig::default();
        config.fixed_duration.cycle_duration_days = 0;
        assert_eq!(config.validate(), Err(ValidationError::InvalidCycleDuration));
    }

    #[test]
    fn test_validation_zero_grace() {
        let mut config = EngineConfig::default();
        config.fixed_duration.submission_grace_days = 0;
        assert_eq!(config.validate(), Err(ValidationError::InvalidGraceDays));
    }

    #[test]
    fn test_validation_period_upper_bounds() {
        let mut config = EngineConfig::default();
        config.fixed_duration.cycle_duration_days = 366;
        config.fixed_duration.submission_grace_days = 366;
        config.fixed_duration.visit_grace_days = 366;
        assert!(config.validate().is_ok());

        config.fixed_duration.cycle_duration_days = 367;
        assert_eq!(config.validate(), Err(ValidationError::InvalidCycleDuration));

        let mut config = EngineConfig::default();
        config.fixed_duration.submission_grace_days = u32::MAX;
        assert_eq!(config.validate(), Err(ValidationError::InvalidGraceDays));

        let mut config = EngineConfig::default();
        config.fixed_duration.visit_grace_days = 367;
        assert_eq!(config.validate(), Err(ValidationError::InvalidVisitGraceDays));
    }

    #[test]
    fn test_validation_zero_ceilings() {
        let mut config = EngineConfig::default();
        config.fixed_duration.max_cycles = 0;
        assert_eq!(config.validate(), Err(ValidationError::InvalidMaxCycles));

        let mut config = EngineConfig::default();
        config.calendar_month.max_months = 0;
        assert_eq!(config.validate(), Err(ValidationError::InvalidMaxMonths));
    }

    #[test]
    fn test_validation_report_due_day_range() {
        let mut config = EngineConfig::default();
        config.calendar_month.report_due_day = 0;
        assert_eq!(config.validate(), Err(ValidationError::InvalidReportDueDay(0)));

        config.calendar_month.report_due_day = 32;
        assert_eq!(config.validate(), Err(ValidationError::InvalidReportDueDay(32)));

        config.calendar_month.report_due_day = 31;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_inclusion_threshold() {
        let mut config = EngineConfig::default();
        config.calendar_month.min_days_for_inclusion = 32;
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidInclusionThreshold(32))
        );

        config.calendar_month.min_days_for_inclusion = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_blank_override() {
        let mut config = EngineConfig::default();
        config
            .institution_overrides
            .insert("  ".to_string(), CycleModelKind::FixedDuration);
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidInstitutionOverride(_))
        ));
    }

    #[test]
    fn test_selector_honours_overrides() {
        let mut config = EngineConfig::default();
        config
            .institution_overrides
            .insert("legacy-u".to_string(), CycleModelKind::FixedDuration);

        let selector = config.selector();
        let legacy = InstitutionId::new("legacy-u").unwrap();
        let other = InstitutionId::new("new-u").unwrap();
        assert_eq!(selector.kind_for(&legacy), CycleModelKind::FixedDuration);
        assert_eq!(selector.kind_for(&other), CycleModelKind::CalendarMonth);
    }
}
