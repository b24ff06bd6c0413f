//! In-Memory Internship Reader Adapter
//!
//! Holds internships and their report/visit records in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, InternshipId};
use crate::domain::status::{ReportRecord, VisitRecord};
use crate::ports::{InternshipReader, InternshipRecord};

/// In-memory store of internships and compliance records
#[derive(Debug, Clone, Default)]
pub struct InMemoryInternshipReader {
    internships: Arc<RwLock<HashMap<InternshipId, InternshipRecord>>>,
    reports: Arc<RwLock<HashMap<InternshipId, Vec<ReportRecord>>>>,
    visits: Arc<RwLock<HashMap<InternshipId, Vec<VisitRecord>>>>,
}

impl InMemoryInternshipReader {
    /// Create an empty reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an internship
    pub async fn insert_internship(&self, internship: InternshipRecord) {
        self.internships
            .write()
            .await
            .insert(internship.id, internship);
    }

    /// Insert or replace the report for a cycle
    pub async fn upsert_report(&self, id: InternshipId, report: ReportRecord) {
        let mut reports = self.reports.write().await;
        let entries = reports.entry(id).or_default();
        entries.retain(|r| r.cycle_index != report.cycle_index);
        entries.push(report);
    }

    /// Insert or replace the visit for a cycle
    pub async fn upsert_visit(&self, id: InternshipId, visit: VisitRecord) {
        let mut visits = self.visits.write().await;
        let entries = visits.entry(id).or_default();
        entries.retain(|v| v.cycle_index != visit.cycle_index);
        entries.push(visit);
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.internships.write().await.clear();
        self.reports.write().await.clear();
        self.visits.write().await.clear();
    }

    /// Get the number of stored internships
    pub async fn internship_count(&self) -> usize {
        self.internships.read().await.len()
    }

    async fn ensure_exists(&self, id: &InternshipId) -> Result<(), DomainError> {
        if self.internships.read().await.contains_key(id) {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

fn not_found(id: &InternshipId) -> DomainError {
    DomainError::new(ErrorCode::InternshipNotFound, format!("internship {} not found", id))
        .with_detail("internship_id", id.to_string())
}

#[async_trait]
impl InternshipReader for InMemoryInternshipReader {
    async fn get_internship(&self, id: &InternshipId) -> Result<InternshipRecord, DomainError> {
        let internships = self.internships.read().await;
        internships.get(id).cloned().ok_or_else(|| not_found(id))
    }

    async fn list_reports(&self, id: &InternshipId) -> Result<Vec<ReportRecord>, DomainError> {
        self.ensure_exists(id).await?;
        let reports = self.reports.read().await;
        Ok(reports.get(id).cloned().unwrap_or_default())
    }

    async fn list_visits(&self, id: &InternshipId) -> Result<Vec<VisitRecord>, DomainError> {
        self.ensure_exists(id).await?;
        let visits = self.visits.read().await;
        Ok(visits.get(id).cloned().unwrap_or_default())
    }
}
