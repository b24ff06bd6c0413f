//! Shared loading step for the compliance handlers.

use tracing::debug;

use crate::domain::cycle::{CycleModelSelector, CycleStrategy, InternshipDates};
use crate::domain::foundation::{DomainError, InternshipId};
use crate::ports::{InternshipReader, InternshipRecord};

/// An internship with its dates resolved and its cycle model chosen.
#[derive(Debug, Clone)]
pub(super) struct InternshipSchedule {
    pub internship: InternshipRecord,
    pub dates: InternshipDates,
    pub strategy: CycleStrategy,
}

impl InternshipSchedule {
    pub(super) async fn load(
        reader: &dyn InternshipReader,
        selector: &CycleModelSelector,
        id: &InternshipId,
    ) -> Result<Self, DomainError> {
        let internship = reader.get_internship(id).await?;
        let dates = internship.dates()?;
        let strategy = selector.for_institution(&internship.institution_id);

        debug!(
            internship_id = %id,
            institution_id = %internship.institution_id,
            reversed = dates.is_reversed(),
            "Loaded internship schedule"
        );

        Ok(Self {
            internship,
            dates,
            strategy,
        })
    }
}
