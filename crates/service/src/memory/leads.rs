use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use models::{Lead, LeadPatch, LeadStatus, Stage};

use crate::errors::ServiceError;
use crate::storage::record_table::RecordTable;
use crate::stores::LeadStore;

const ENTITY: &str = "lead";

/// Process-lifetime lead store. Construct one per app (or per test) from seed records.
#[derive(Clone)]
pub struct InMemoryLeadStore {
    table: RecordTable<Lead>,
}

impl InMemoryLeadStore {
    pub fn new(seed: Vec<Lead>) -> Self {
        Self { table: RecordTable::new(seed) }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub async fn get_all(&self) -> Vec<Lead> {
        self.table.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Lead, ServiceError> {
        self.table.get(id).await.ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }

    pub async fn get_hotlist(&self) -> Vec<Lead> {
        self.table.filter(|l| l.is_hotlist).await
    }

    #[instrument(skip(self, data))]
    pub async fn create(&self, data: LeadPatch) -> Lead {
        let now = Utc::now();
        let lead = self.table.insert_with(|id| Lead::create(id, now, &data)).await;
        info!(lead_id = lead.id, stage = ?lead.stage, "lead_created");
        lead
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: LeadPatch) -> Result<Lead, ServiceError> {
        self.modify(id, |lead| lead.apply(&patch)).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<Lead, ServiceError> {
        match self.table.remove(id).await {
            Some(lead) => {
                info!(lead_id = id, "lead_deleted");
                Ok(lead)
            }
            None => {
                warn!(lead_id = id, "lead_delete_missing");
                Err(ServiceError::not_found(ENTITY, id))
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn bulk_delete(&self, ids: &[i64]) -> Vec<Lead> {
        let removed = self.table.remove_many(ids).await;
        info!(requested = ids.len(), removed = removed.len(), "leads_bulk_deleted");
        removed
    }

    #[instrument(skip(self))]
    pub async fn update_status(&self, id: i64, status: LeadStatus, stage: Option<Stage>) -> Result<Lead, ServiceError> {
        let patch = LeadPatch::status(status, stage);
        self.modify(id, |lead| lead.apply(&patch)).await
    }

    #[instrument(skip(self))]
    pub async fn toggle_hotlist(&self, id: i64) -> Result<Lead, ServiceError> {
        self.modify(id, |lead| lead.is_hotlist = !lead.is_hotlist).await
    }

    #[instrument(skip(self))]
    pub async fn move_stage(&self, id: i64, stage: Stage) -> Result<Lead, ServiceError> {
        let now = Utc::now();
        let patch = LeadPatch::status(stage.entry_status(), Some(stage));
        let mut moved = false;
        let lead = self
            .table
            .update(id, |lead| {
                if lead.stage != Some(stage) {
                    lead.apply(&patch);
                    lead.touch(now);
                    moved = true;
                }
            })
            .await
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        if moved {
            info!(lead_id = id, stage = %stage, "lead_stage_moved");
        } else {
            debug!(lead_id = id, stage = %stage, "lead_stage_unchanged");
        }
        Ok(lead)
    }

    /// Single write path: apply `f`, then refresh `last_contact`, under one lock.
    async fn modify<F>(&self, id: i64, f: F) -> Result<Lead, ServiceError>
    where
        F: FnOnce(&mut Lead),
    {
        let now = Utc::now();
        let updated = self
            .table
            .update(id, |lead| {
                f(lead);
                lead.touch(now);
            })
            .await;
        match updated {
            Some(lead) => {
                debug!(lead_id = id, is_hotlist = lead.is_hotlist, status = ?lead.status, "lead_updated");
                Ok(lead)
            }
            None => {
                warn!(lead_id = id, "lead_update_missing");
                Err(ServiceError::not_found(ENTITY, id))
            }
        }
    }
}

#[async_trait]
impl LeadStore for InMemoryLeadStore {
    async fn get_all(&self) -> Vec<Lead> { self.get_all().await }
    async fn get_by_id(&self, id: i64) -> Result<Lead, ServiceError> { self.get_by_id(id).await }
    async fn get_hotlist(&self) -> Vec<Lead> { self.get_hotlist().await }
    async fn create(&self, data: LeadPatch) -> Lead { self.create(data).await }
    async fn update(&self, id: i64, patch: LeadPatch) -> Result<Lead, ServiceError> { self.update(id, patch).await }
    async fn delete(&self, id: i64) -> Result<Lead, ServiceError> { self.delete(id).await }
    async fn bulk_delete(&self, ids: &[i64]) -> Vec<Lead> { self.bulk_delete(ids).await }
    async fn update_status(&self, id: i64, status: LeadStatus, stage: Option<Stage>) -> Result<Lead, ServiceError> {
        self.update_status(id, status, stage).await
    }
    async fn toggle_hotlist(&self, id: i64) -> Result<Lead, ServiceError> { self.toggle_hotlist(id).await }
    async fn move_stage(&self, id: i64, stage: Stage) -> Result<Lead, ServiceError> { self.move_stage(id, stage).await }
}
