//! Store wiring for binaries and tests.
//!
//! [`Services`] is the one handle the HTTP layer holds: trait objects for
//! each record store, already wrapped in the configured latency profile.

use std::sync::Arc;

use tracing::info;

use models::{Activity, Deal, Lead};

use crate::errors::ServiceError;
use crate::latency::{Delayed, Latency};
use crate::memory::{InMemoryActivityStore, InMemoryDealStore, InMemoryLeadStore};
use crate::storage::seed::{self, DEMO_ACTIVITIES, DEMO_DEALS, DEMO_LEADS};
use crate::stores::{ActivityStore, DealStore, LeadStore};

#[derive(Clone)]
pub struct Services {
    pub leads: Arc<dyn LeadStore>,
    pub deals: Arc<dyn DealStore>,
    pub activities: Arc<dyn ActivityStore>,
}

impl Services {
    /// Load seeds (configured files or the built-in demo set) and apply latency.
    pub async fn from_config(cfg: &configs::StoreConfig) -> Result<Self, ServiceError> {
        let leads: Vec<Lead> = seed::load_records("leads", cfg.leads_seed.as_deref(), DEMO_LEADS).await?;
        let deals: Vec<Deal> = seed::load_records("deals", cfg.deals_seed.as_deref(), DEMO_DEALS).await?;
        let activities: Vec<Activity> =
            seed::load_records("activities", cfg.activities_seed.as_deref(), DEMO_ACTIVITIES).await?;
        let latency = Latency::from_config(&cfg.latency);
        info!(latency = ?latency, "stores_ready");
        Ok(Self::in_memory(leads, deals, activities, latency))
    }

    /// Demo seed data with the given latency.
    pub fn demo(latency: Latency) -> Result<Self, ServiceError> {
        Ok(Self::in_memory(
            seed::parse_records("leads", DEMO_LEADS.as_bytes())?,
            seed::parse_records("deals", DEMO_DEALS.as_bytes())?,
            seed::parse_records("activities", DEMO_ACTIVITIES.as_bytes())?,
            latency,
        ))
    }

    pub fn in_memory(leads: Vec<Lead>, deals: Vec<Deal>, activities: Vec<Activity>, latency: Latency) -> Self {
        let leads = InMemoryLeadStore::new(leads);
        let deals = InMemoryDealStore::new(deals);
        let activities = InMemoryActivityStore::new(activities);
        if latency.is_none() {
            return Self { leads: Arc::new(leads), deals: Arc::new(deals), activities: Arc::new(activities) };
        }
        Self {
            leads: Arc::new(Delayed::new(leads, latency.clone())),
            deals: Arc::new(Delayed::new(deals, latency.clone())),
            activities: Arc::new(Delayed::new(activities, latency)),
        }
    }
}
