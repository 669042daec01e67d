use serde::Serialize;

use models::Lead;

use super::{percent, rounded_mean, sum_values};

/// Bucket for leads that carry no status.
pub const NO_STATUS: &str = "No Status";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_leads: usize,
    pub conversion_rate: u32,
    pub total_revenue: f64,
    pub avg_deal_size: f64,
    /// In order of first appearance.
    pub status_distribution: Vec<StatusCount>,
    pub won_count: usize,
    pub in_pipeline_count: usize,
    pub hotlist_count: usize,
}

pub fn status_distribution(leads: &[Lead]) -> Vec<StatusCount> {
    let mut buckets: Vec<StatusCount> = Vec::new();
    for lead in leads {
        let label = lead.status.as_ref().map_or(NO_STATUS, |s| s.as_str());
        match buckets.iter_mut().find(|b| b.status == label) {
            Some(bucket) => bucket.count += 1,
            None => buckets.push(StatusCount { status: label.to_string(), count: 1 }),
        }
    }
    buckets
}

pub fn analytics(leads: &[Lead]) -> AnalyticsSummary {
    let won: Vec<&Lead> = leads.iter().filter(|l| l.is_won()).collect();
    let total_revenue = sum_values(won.iter().copied());
    AnalyticsSummary {
        total_leads: leads.len(),
        conversion_rate: percent(won.len(), leads.len()),
        total_revenue,
        avg_deal_size: rounded_mean(total_revenue, won.len()),
        status_distribution: status_distribution(leads),
        won_count: won.len(),
        in_pipeline_count: leads
            .iter()
            .filter(|l| l.status.as_ref().is_some_and(|s| s.is_in_pipeline()))
            .count(),
        hotlist_count: leads.iter().filter(|l| l.is_hotlist).count(),
    }
}
