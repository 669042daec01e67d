use std::collections::HashMap;

use serde::Serialize;

use models::Lead;

use super::{percent, rounded_mean};

/// Bucket for leads with no owner.
pub const UNASSIGNED: &str = "Unassigned";

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepStanding {
    pub name: String,
    pub total_leads: usize,
    pub won_deals: usize,
    pub total_value: f64,
    pub won_value: f64,
    pub hotlist_leads: usize,
    pub conversion_rate: u32,
    pub avg_deal_size: f64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    /// Highest won value first.
    pub reps: Vec<RepStanding>,
    pub total_revenue: f64,
    pub total_deals: usize,
    pub top_performer: Option<String>,
}

pub fn leaderboard(leads: &[Lead]) -> Leaderboard {
    let mut by_rep: HashMap<&str, RepStanding> = HashMap::new();
    for lead in leads {
        let rep = lead.assigned_to.as_deref().unwrap_or(UNASSIGNED);
        let standing = by_rep
            .entry(rep)
            .or_insert_with(|| RepStanding { name: rep.to_string(), ..Default::default() });
        standing.total_leads += 1;
        standing.total_value += lead.value_or_zero();
        if lead.is_won() {
            standing.won_deals += 1;
            standing.won_value += lead.value_or_zero();
        }
        if lead.is_hotlist {
            standing.hotlist_leads += 1;
        }
    }

    let mut reps: Vec<RepStanding> = by_rep
        .into_values()
        .map(|mut r| {
            r.conversion_rate = percent(r.won_deals, r.total_leads);
            r.avg_deal_size = rounded_mean(r.won_value, r.won_deals);
            r
        })
        .collect();
    reps.sort_by(|a, b| b.won_value.total_cmp(&a.won_value).then_with(|| a.name.cmp(&b.name)));

    Leaderboard {
        total_revenue: reps.iter().map(|r| r.won_value).sum(),
        total_deals: reps.iter().map(|r| r.won_deals).sum(),
        top_performer: reps.first().map(|r| r.name.clone()),
        reps,
    }
}
