use async_trait::async_trait;
use models::{Lead, LeadPatch, LeadStatus, Stage};

use crate::errors::ServiceError;
use crate::latency::{Delayed, Op};

/// Lead record service. Every result is an owned copy.
#[async_trait]
pub trait LeadStore: Send + Sync {
    async fn get_all(&self) -> Vec<Lead>;
    async fn get_by_id(&self, id: i64) -> Result<Lead, ServiceError>;
    async fn get_hotlist(&self) -> Vec<Lead>;
    async fn create(&self, data: LeadPatch) -> Lead;
    async fn update(&self, id: i64, patch: LeadPatch) -> Result<Lead, ServiceError>;
    async fn delete(&self, id: i64) -> Result<Lead, ServiceError>;
    /// Unknown ids are skipped.
    async fn bulk_delete(&self, ids: &[i64]) -> Vec<Lead>;
    /// `stage` is only changed when given.
    async fn update_status(&self, id: i64, status: LeadStatus, stage: Option<Stage>) -> Result<Lead, ServiceError>;
    async fn toggle_hotlist(&self, id: i64) -> Result<Lead, ServiceError>;
    /// Put the lead in `stage` with the status that stage maps to. A lead already
    /// in `stage` comes back untouched; the check and the write share one lock.
    async fn move_stage(&self, id: i64, stage: Stage) -> Result<Lead, ServiceError>;
}

#[async_trait]
impl<S: LeadStore> LeadStore for Delayed<S> {
    async fn get_all(&self) -> Vec<Lead> {
        self.pause(Op::GetAll).await;
        self.inner().get_all().await
    }

    async fn get_by_id(&self, id: i64) -> Result<Lead, ServiceError> {
        self.pause(Op::GetById).await;
        self.inner().get_by_id(id).await
    }

    async fn get_hotlist(&self) -> Vec<Lead> {
        self.pause(Op::GetHotlist).await;
        self.inner().get_hotlist().await
    }

    async fn create(&self, data: LeadPatch) -> Lead {
        self.pause(Op::Create).await;
        self.inner().create(data).await
    }

    async fn update(&self, id: i64, patch: LeadPatch) -> Result<Lead, ServiceError> {
        self.pause(Op::Update).await;
        self.inner().update(id, patch).await
    }

    async fn delete(&self, id: i64) -> Result<Lead, ServiceError> {
        self.pause(Op::Delete).await;
        self.inner().delete(id).await
    }

    async fn bulk_delete(&self, ids: &[i64]) -> Vec<Lead> {
        self.pause(Op::BulkDelete).await;
        self.inner().bulk_delete(ids).await
    }

    async fn update_status(&self, id: i64, status: LeadStatus, stage: Option<Stage>) -> Result<Lead, ServiceError> {
        self.pause(Op::UpdateStatus).await;
        self.inner().update_status(id, status, stage).await
    }

    async fn toggle_hotlist(&self, id: i64) -> Result<Lead, ServiceError> {
        self.pause(Op::ToggleHotlist).await;
        self.inner().toggle_hotlist(id).await
    }

    async fn move_stage(&self, id: i64, stage: Stage) -> Result<Lead, ServiceError> {
        self.pause(Op::UpdateStatus).await;
        self.inner().move_stage(id, stage).await
    }
}
