//! GetComplianceSummaryHandler - Query handler for an internship's compliance progress.

use std::sync::Arc;

use super::schedule::InternshipSchedule;
use crate::domain::compliance::ComplianceSummary;
use crate::domain::cycle::CycleModelSelector;
use crate::domain::foundation::{DomainError, InternshipId};
use crate::ports::{Clock, InternshipReader};

/// Query for the compliance summary of one internship.
#[derive(Debug, Clone)]
pub struct GetComplianceSummaryQuery {
    pub internship_id: InternshipId,
}

/// Handler for compliance summaries.
pub struct GetComplianceSummaryHandler {
    reader: Arc<dyn InternshipReader>,
    selector: Arc<CycleModelSelector>,
    clock: Arc<dyn Clock>,
}

impl GetComplianceSummaryHandler {
    pub fn new(
        reader: Arc<dyn InternshipReader>,
        selector: Arc<CycleModelSelector>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            reader,
            selector,
            clock,
        }
    }

    pub async fn handle(
        &self,
        query: GetComplianceSummaryQuery,
    ) -> Result<ComplianceSummary, DomainError> {
        let schedule =
            InternshipSchedule::load(self.reader.as_ref(), &self.selector, &query.internship_id)
                .await?;
        let reports = self.reader.list_reports(&query.internship_id).await?;
        let visits = self.reader.list_visits(&query.internship_id).await?;

        Ok(ComplianceSummary::compute(
            &schedule.strategy,
            &schedule.dates,
            &reports,
            &visits,
            self.clock.now(),
        ))
    }
}
