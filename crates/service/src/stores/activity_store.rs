use async_trait::async_trait;
use models::{Activity, ActivityPatch, NewActivity};

use crate::errors::ServiceError;
use crate::latency::{Delayed, Op};

/// Activity log service.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn get_all(&self) -> Vec<Activity>;
    async fn get_by_lead_id(&self, lead_id: i64) -> Vec<Activity>;
    async fn create(&self, input: NewActivity) -> Activity;
    async fn update(&self, id: i64, patch: ActivityPatch) -> Result<Activity, ServiceError>;
    async fn delete(&self, id: i64) -> Result<Activity, ServiceError>;
}

#[async_trait]
impl<S: ActivityStore> ActivityStore for Delayed<S> {
    async fn get_all(&self) -> Vec<Activity> {
        self.pause(Op::GetAll).await;
        self.inner().get_all().await
    }

    async fn get_by_lead_id(&self, lead_id: i64) -> Vec<Activity> {
        self.pause(Op::GetByLeadId).await;
        self.inner().get_by_lead_id(lead_id).await
    }

    async fn create(&self, input: NewActivity) -> Activity {
        self.pause(Op::Create).await;
        self.inner().create(input).await
    }

    async fn update(&self, id: i64, patch: ActivityPatch) -> Result<Activity, ServiceError> {
        self.pause(Op::Update).await;
        self.inner().update(id, patch).await
    }

    async fn delete(&self, id: i64) -> Result<Activity, ServiceError> {
        self.pause(Op::Delete).await;
        self.inner().delete(id).await
    }
}
