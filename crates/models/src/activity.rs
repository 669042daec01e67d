use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A logged touchpoint against a lead (call, email, meeting, note).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "Id")]
    pub id: i64,
    pub lead_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
    pub date: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    pub lead_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub outcome: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityPatch {
    pub lead_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    pub outcome: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl Activity {
    pub fn create(id: i64, now: DateTime<Utc>, input: NewActivity) -> Self {
        Activity {
            id,
            lead_id: input.lead_id,
            kind: input.kind,
            description: input.description,
            outcome: input.outcome,
            date: now,
        }
    }

    pub fn apply(&mut self, patch: ActivityPatch) {
        if let Some(v) = patch.lead_id {
            self.lead_id = v;
        }
        if let Some(v) = patch.kind {
            self.kind = v;
        }
        if let Some(v) = patch.description {
            self.description = Some(v);
        }
        if let Some(v) = patch.outcome {
            self.outcome = Some(v);
        }
        if let Some(v) = patch.date {
            self.date = v;
        }
    }
}
