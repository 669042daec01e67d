use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::lenient;
use crate::vocab::Stage;

/// A sales opportunity with an expected close date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<i64>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default)]
    pub value: f64,
    pub stage: Stage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Creation input; `Id` and `createdAt` come from the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDeal {
    #[serde(default)]
    pub lead_id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_amount")]
    pub value: Option<f64>,
    #[serde(default)]
    pub stage: Option<Stage>,
    #[serde(default)]
    pub probability: Option<u8>,
    #[serde(default)]
    pub close_date: Option<NaiveDate>,
    #[serde(default)]
    pub assigned_to: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DealPatch {
    pub lead_id: Option<i64>,
    pub title: Option<String>,
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient::opt_amount")]
    pub value: Option<f64>,
    pub stage: Option<Stage>,
    pub probability: Option<u8>,
    pub close_date: Option<NaiveDate>,
    pub assigned_to: Option<String>,
}

impl Deal {
    pub fn create(id: i64, now: DateTime<Utc>, input: NewDeal) -> Self {
        Deal {
            id,
            lead_id: input.lead_id,
            title: input.title,
            company: input.company,
            value: input.value.unwrap_or(0.0),
            stage: input.stage.unwrap_or(Stage::Lead),
            probability: input.probability.map(|p| p.min(100)),
            close_date: input.close_date,
            assigned_to: input.assigned_to,
            created_at: now,
        }
    }

    pub fn apply(&mut self, patch: DealPatch) {
        if let Some(v) = patch.lead_id {
            self.lead_id = Some(v);
        }
        if let Some(v) = patch.title {
            self.title = v;
        }
        if let Some(v) = patch.company {
            self.company = Some(v);
        }
        if let Some(v) = patch.value {
            self.value = v;
        }
        if let Some(v) = patch.stage {
            self.stage = v;
        }
        if let Some(v) = patch.probability {
            self.probability = Some(v.min(100));
        }
        if let Some(v) = patch.close_date {
            self.close_date = Some(v);
        }
        if let Some(v) = patch.assigned_to {
            self.assigned_to = Some(v);
        }
    }

    pub fn is_active(&self) -> bool {
        !self.stage.is_closed()
    }
}
