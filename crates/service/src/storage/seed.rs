use std::collections::HashSet;

use serde::de::DeserializeOwned;
use tokio::fs;
use tracing::info;

use crate::errors::ServiceError;
use crate::storage::record_table::Keyed;

/// Demo records loaded when no seed file is configured.
pub const DEMO_LEADS: &str = include_str!("../../seed/leads.json");
pub const DEMO_DEALS: &str = include_str!("../../seed/deals.json");
pub const DEMO_ACTIVITIES: &str = include_str!("../../seed/activities.json");

/// Parse a JSON array of records and reject duplicate identifiers.
pub fn parse_records<T>(label: &str, bytes: &[u8]) -> Result<Vec<T>, ServiceError>
where
    T: DeserializeOwned + Keyed,
{
    let rows: Vec<T> = serde_json::from_slice(bytes)
        .map_err(|e| ServiceError::Seed(format!("{label}: {e}")))?;
    let mut seen = HashSet::with_capacity(rows.len());
    for row in &rows {
        if !seen.insert(row.key()) {
            return Err(ServiceError::Seed(format!("{label}: duplicate Id {}", row.key())));
        }
    }
    Ok(rows)
}

/// Load seed records from `path`, or from `builtin` when no path is configured.
pub async fn load_records<T>(label: &str, path: Option<&str>, builtin: &str) -> Result<Vec<T>, ServiceError>
where
    T: DeserializeOwned + Keyed,
{
    let rows = match path {
        Some(path) => {
            let bytes = fs::read(path)
                .await
                .map_err(|e| ServiceError::Seed(format!("{label}: cannot read {path}: {e}")))?;
            parse_records(label, &bytes)?
        }
        None => parse_records(label, builtin.as_bytes())?,
    };
    info!(seed = label, source = path.unwrap_or("builtin"), count = rows.len(), "seed_loaded");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{Activity, Deal, Lead};

    #[test]
    fn demo_seeds_parse() {
        let leads: Vec<Lead> = parse_records("leads", DEMO_LEADS.as_bytes()).unwrap();
        let deals: Vec<Deal> = parse_records("deals", DEMO_DEALS.as_bytes()).unwrap();
        let activities: Vec<Activity> = parse_records("activities", DEMO_ACTIVITIES.as_bytes()).unwrap();
        assert!(!leads.is_empty());
        assert!(!deals.is_empty());
        assert!(!activities.is_empty());
        assert!(leads.iter().any(|l| l.is_hotlist));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let raw = br#"[
            {"Id": 1, "leadId": 1, "type": "Call", "date": "2024-01-01T00:00:00Z"},
            {"Id": 1, "leadId": 2, "type": "Email", "date": "2024-01-02T00:00:00Z"}
        ]"#;
        let err = parse_records::<Activity>("activities", raw).unwrap_err();
        assert!(matches!(err, ServiceError::Seed(msg) if msg.contains("duplicate Id 1")));
    }

    #[test]
    fn malformed_seed_is_a_seed_error() {
        let err = parse_records::<Lead>("leads", b"{not json").unwrap_err();
        assert!(matches!(err, ServiceError::Seed(_)));
    }

    #[tokio::test]
    async fn missing_seed_file_is_reported() {
        let path = std::env::temp_dir().join(format!("crm_seed_{}.json", uuid::Uuid::new_v4()));
        let res = load_records::<Deal>("deals", path.to_str(), DEMO_DEALS).await;
        assert!(matches!(res, Err(ServiceError::Seed(_))));
    }

    #[tokio::test]
    async fn seed_file_overrides_builtin() -> Result<(), anyhow::Error> {
        let path = std::env::temp_dir().join(format!("crm_seed_{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, br#"[{"Id": 40, "title": "Only deal", "stage": "Proposal", "createdAt": "2024-01-01T00:00:00Z"}]"#).await?;
        let deals = load_records::<Deal>("deals", path.to_str(), DEMO_DEALS).await?;
        assert_eq!(deals.len(), 1);
        assert_eq!(deals[0].id, 40);
        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }
}
