//! Runtime selection between the two cycle models.
//!
//! Institutions migrate between models at different times, so the model is
//! chosen per institution with a process-wide default.

use std::collections::HashMap;

use tracing::debug;

use super::{
    CalendarMonthModel, CalendarMonthRules, CycleDescriptor, CycleModel, CycleModelKind,
    FixedDurationModel, FixedDurationRules, InternshipDates,
};
use crate::domain::foundation::{InstitutionId, Timestamp};

/// One of the two concrete cycle models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleStrategy {
    FixedDuration(FixedDurationModel),
    CalendarMonth(CalendarMonthModel),
}

impl CycleStrategy {
    fn as_model(&self) -> &dyn CycleModel {
        match self {
            CycleStrategy::FixedDuration(model) => model,
            CycleStrategy::CalendarMonth(model) => model,
        }
    }
}

impl From<FixedDurationModel> for CycleStrategy {
    fn from(model: FixedDurationModel) -> Self {
        CycleStrategy::FixedDuration(model)
    }
}

impl From<CalendarMonthModel> for CycleStrategy {
    fn from(model: CalendarMonthModel) -> Self {
        CycleStrategy::CalendarMonth(model)
    }
}

impl CycleModel for CycleStrategy {
    fn kind(&self) -> CycleModelKind {
        self.as_model().kind()
    }

    fn cycles(&self, dates: &InternshipDates) -> Vec<CycleDescriptor> {
        self.as_model().cycles(dates)
    }

    fn total_expected_count(&self, dates: &InternshipDates) -> usize {
        self.as_model().total_expected_count(dates)
    }

    fn expected_reports_as_of(&self, dates: &InternshipDates, now: Timestamp) -> usize {
        self.as_model().expected_reports_as_of(dates, now)
    }

    fn expected_visits_as_of(&self, dates: &InternshipDates, now: Timestamp) -> usize {
        self.as_model().expected_visits_as_of(dates, now)
    }
}

/// Picks the cycle model for an institution.
#[derive(Debug, Clone, Default)]
pub struct CycleModelSelector {
    default_kind: CycleModelKind,
    overrides: HashMap<String, CycleModelKind>,
    fixed_duration: FixedDurationRules,
    calendar_month: CalendarMonthRules,
}

impl CycleModelSelector {
    /// Creates a selector that uses `default_kind` everywhere.
    pub fn new(
        default_kind: CycleModelKind,
        fixed_duration: FixedDurationRules,
        calendar_month: CalendarMonthRules,
    ) -> Self {
        Self {
            default_kind,
            overrides: HashMap::new(),
            fixed_duration,
            calendar_month,
        }
    }

    /// Assigns a model to one institution.
    pub fn with_override(mut self, institution: impl Into<String>, kind: CycleModelKind) -> Self {
        self.overrides.insert(institution.into(), kind);
        self
    }

    /// Assigns models to several institutions at once.
    pub fn with_overrides(mut self, overrides: HashMap<String, CycleModelKind>) -> Self {
        self.overrides.extend(overrides);
        self
    }

    /// The model kind configured for an institution.
    pub fn kind_for(&self, institution: &InstitutionId) -> CycleModelKind {
        self.overrides
            .get(institution.as_str())
            .copied()
            .unwrap_or(self.default_kind)
    }

    /// Builds the strategy of a given kind with the configured rules.
    pub fn strategy(&self, kind: CycleModelKind) -> CycleStrategy {
        match kind {
            CycleModelKind::FixedDuration => FixedDurationModel::new(self.fixed_duration).into(),
            CycleModelKind::CalendarMonth => CalendarMonthModel::new(self.calendar_month).into(),
        }
    }

    /// Builds the strategy for an institution.
    pub fn for_institution(&self, institution: &InstitutionId) -> CycleStrategy {
        let kind = self.kind_for(institution);
        debug!(institution = %institution, model = %kind, "selected cycle model");
        self.strategy(kind)
    }
}
