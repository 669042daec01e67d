use serde::Serialize;

use models::{Deal, Lead};

use super::{percent, sum_values};

const RECENT_LEADS: usize = 5;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_leads: usize,
    /// Percentage of leads with status `Closed Won`.
    pub conversion_rate: u32,
    pub revenue: f64,
    pub active_deals: usize,
    /// Newest first.
    pub recent_leads: Vec<Lead>,
}

pub fn dashboard(leads: &[Lead], deals: &[Deal]) -> DashboardMetrics {
    let won: Vec<&Lead> = leads.iter().filter(|l| l.is_won()).collect();

    let mut recent: Vec<Lead> = leads.to_vec();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.truncate(RECENT_LEADS);

    DashboardMetrics {
        total_leads: leads.len(),
        conversion_rate: percent(won.len(), leads.len()),
        revenue: sum_values(won.iter().copied()),
        active_deals: deals.iter().filter(|d| d.is_active()).count(),
        recent_leads: recent,
    }
}
