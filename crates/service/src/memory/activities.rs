use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, instrument};

use models::{Activity, ActivityPatch, NewActivity};

use crate::errors::ServiceError;
use crate::storage::record_table::RecordTable;
use crate::stores::ActivityStore;

const ENTITY: &str = "activity";

#[derive(Clone)]
pub struct InMemoryActivityStore {
    table: RecordTable<Activity>,
}

impl InMemoryActivityStore {
    pub fn new(seed: Vec<Activity>) -> Self {
        Self { table: RecordTable::new(seed) }
    }

    pub async fn get_all(&self) -> Vec<Activity> {
        self.table.list().await
    }

    pub async fn get_by_lead_id(&self, lead_id: i64) -> Vec<Activity> {
        self.table.filter(|a| a.lead_id == lead_id).await
    }

    #[instrument(skip(self, input), fields(lead_id = input.lead_id))]
    pub async fn create(&self, input: NewActivity) -> Activity {
        let now = Utc::now();
        let activity = self.table.insert_with(move |id| Activity::create(id, now, input)).await;
        info!(activity_id = activity.id, kind = %activity.kind, "activity_logged");
        activity
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: ActivityPatch) -> Result<Activity, ServiceError> {
        self.table
            .update(id, move |a| a.apply(patch))
            .await
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<Activity, ServiceError> {
        self.table.remove(id).await.ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }
}

#[async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn get_all(&self) -> Vec<Activity> { self.get_all().await }
    async fn get_by_lead_id(&self, lead_id: i64) -> Vec<Activity> { self.get_by_lead_id(lead_id).await }
    async fn create(&self, input: NewActivity) -> Activity { self.create(input).await }
    async fn update(&self, id: i64, patch: ActivityPatch) -> Result<Activity, ServiceError> { self.update(id, patch).await }
    async fn delete(&self, id: i64) -> Result<Activity, ServiceError> { self.delete(id).await }
}
