//! CollectOverdueAlertsHandler - Query handler feeding reminder notifications.

use std::sync::Arc;

use tracing::debug;

use super::schedule::InternshipSchedule;
use crate::domain::compliance::{collect_overdue_alerts, OverdueAlert};
use crate::domain::cycle::CycleModelSelector;
use crate::domain::foundation::{DomainError, InternshipId};
use crate::domain::status::StatusClassifier;
use crate::ports::{Clock, InternshipReader};

/// Query for the actionable overdue items of one internship.
#[derive(Debug, Clone)]
pub struct CollectOverdueAlertsQuery {
    pub internship_id: InternshipId,
}

/// Handler for overdue alerts.
pub struct CollectOverdueAlertsHandler {
    reader: Arc<dyn InternshipReader>,
    selector: Arc<CycleModelSelector>,
    classifier: StatusClassifier,
    clock: Arc<dyn Clock>,
}

impl CollectOverdueAlertsHandler {
    pub fn new(
        reader: Arc<dyn InternshipReader>,
        selector: Arc<CycleModelSelector>,
        classifier: StatusClassifier,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            reader,
            selector,
            classifier,
            clock,
        }
    }

    pub async fn handle(
        &self,
        query: CollectOverdueAlertsQuery,
    ) -> Result<Vec<OverdueAlert>, DomainError> {
        let schedule =
            InternshipSchedule::load(self.reader.as_ref(), &self.selector, &query.internship_id)
                .await?;
        let reports = self.reader.list_reports(&query.internship_id).await?;
        let visits = self.reader.list_visits(&query.internship_id).await?;

        let alerts = collect_overdue_alerts(
            &schedule.strategy,
            &self.classifier,
            &schedule.dates,
            &reports,
            &visits,
            self.clock.now(),
        );

        debug!(
            internship_id = %query.internship_id,
            alert_count = alerts.len(),
            "Collected overdue alerts"
        );

        Ok(alerts)
    }
}
