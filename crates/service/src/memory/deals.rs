use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, instrument, warn};

use models::{Deal, DealPatch, NewDeal, Stage};

use crate::errors::ServiceError;
use crate::storage::record_table::RecordTable;
use crate::stores::DealStore;

const ENTITY: &str = "deal";

#[derive(Clone)]
pub struct InMemoryDealStore {
    table: RecordTable<Deal>,
}

impl InMemoryDealStore {
    pub fn new(seed: Vec<Deal>) -> Self {
        Self { table: RecordTable::new(seed) }
    }

    pub async fn get_all(&self) -> Vec<Deal> {
        self.table.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Deal, ServiceError> {
        self.table.get(id).await.ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }

    pub async fn get_by_stage(&self, stage: Stage) -> Vec<Deal> {
        self.table.filter(|d| d.stage == stage).await
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create(&self, input: NewDeal) -> Deal {
        let now = Utc::now();
        let deal = self.table.insert_with(move |id| Deal::create(id, now, input)).await;
        info!(deal_id = deal.id, stage = %deal.stage, "deal_created");
        deal
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: DealPatch) -> Result<Deal, ServiceError> {
        match self.table.update(id, move |deal| deal.apply(patch)).await {
            Some(deal) => {
                info!(deal_id = id, stage = %deal.stage, "deal_updated");
                Ok(deal)
            }
            None => {
                warn!(deal_id = id, "deal_update_missing");
                Err(ServiceError::not_found(ENTITY, id))
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<Deal, ServiceError> {
        let deal = self.table.remove(id).await.ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        info!(deal_id = id, "deal_deleted");
        Ok(deal)
    }
}

#[async_trait]
impl DealStore for InMemoryDealStore {
    async fn get_all(&self) -> Vec<Deal> { self.get_all().await }
    async fn get_by_id(&self, id: i64) -> Result<Deal, ServiceError> { self.get_by_id(id).await }
    async fn get_by_stage(&self, stage: Stage) -> Vec<Deal> { self.get_by_stage(stage).await }
    async fn create(&self, input: NewDeal) -> Deal { self.create(input).await }
    async fn update(&self, id: i64, patch: DealPatch) -> Result<Deal, ServiceError> { self.update(id, patch).await }
    async fn delete(&self, id: i64) -> Result<Deal, ServiceError> { self.delete(id).await }
}
