use async_trait::async_trait;
use models::{Deal, DealPatch, NewDeal, Stage};

use crate::errors::ServiceError;
use crate::latency::{Delayed, Op};

/// Deal record service.
#[async_trait]
pub trait DealStore: Send + Sync {
    async fn get_all(&self) -> Vec<Deal>;
    async fn get_by_id(&self, id: i64) -> Result<Deal, ServiceError>;
    async fn get_by_stage(&self, stage: Stage) -> Vec<Deal>;
    async fn create(&self, input: NewDeal) -> Deal;
    async fn update(&self, id: i64, patch: DealPatch) -> Result<Deal, ServiceError>;
    async fn delete(&self, id: i64) -> Result<Deal, ServiceError>;
}

#[async_trait]
impl<S: DealStore> DealStore for Delayed<S> {
    async fn get_all(&self) -> Vec<Deal> {
        self.pause(Op::GetAll).await;
        self.inner().get_all().await
    }

    async fn get_by_id(&self, id: i64) -> Result<Deal, ServiceError> {
        self.pause(Op::GetById).await;
        self.inner().get_by_id(id).await
    }

    async fn get_by_stage(&self, stage: Stage) -> Vec<Deal> {
        self.pause(Op::GetByStage).await;
        self.inner().get_by_stage(stage).await
    }

    async fn create(&self, input: NewDeal) -> Deal {
        self.pause(Op::Create).await;
        self.inner().create(input).await
    }

    async fn update(&self, id: i64, patch: DealPatch) -> Result<Deal, ServiceError> {
        self.pause(Op::Update).await;
        self.inner().update(id, patch).await
    }

    async fn delete(&self, id: i64) -> Result<Deal, ServiceError> {
        self.pause(Op::Delete).await;
        self.inner().delete(id).await
    }
}
