use serde::Deserialize;

use models::{Lead, LeadStatus};

/// Free-text and status filter over leads, as used by the Leads and Hotlist views.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LeadQuery {
    #[serde(default)]
    pub q: Option<String>,
    /// Exact status; `All` means no status filter.
    #[serde(default)]
    pub status: Option<LeadStatus>,
}

impl LeadQuery {
    fn status_filter(&self) -> Option<&LeadStatus> {
        self.status.as_ref().filter(|s| s.as_str() != "All")
    }
}

fn field_contains(field: &Option<String>, needle: &str) -> bool {
    field.as_deref().is_some_and(|v| v.to_lowercase().contains(needle))
}

/// Does `lead` match the free-text term (case-insensitive over name, company and email)?
pub fn matches_term(lead: &Lead, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    field_contains(&lead.name, &needle)
        || field_contains(&lead.company, &needle)
        || field_contains(&lead.email, &needle)
}

pub fn search_leads(leads: &[Lead], query: &LeadQuery) -> Vec<Lead> {
    let term = query.q.as_deref().unwrap_or("");
    let status = query.status_filter();
    leads
        .iter()
        .filter(|l| matches_term(l, term))
        .filter(|l| status.map_or(true, |s| l.status.as_ref() == Some(s)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use models::LeadPatch;

    fn lead(id: i64, name: &str, company: Option<&str>, email: Option<&str>, status: LeadStatus) -> Lead {
        Lead::create(
            id,
            Utc::now(),
            &LeadPatch {
                name: Some(name.into()),
                company: company.map(Into::into),
                email: email.map(Into::into),
                status: Some(status),
                ..Default::default()
            },
        )
    }

    fn sample() -> Vec<Lead> {
        vec![
            lead(1, "Sarah Johnson", Some("TechCorp"), Some("sarah@techcorp.com"), LeadStatus::Qualified),
            lead(2, "David Rodriguez", Some("Global Manufacturing"), None, LeadStatus::Proposal),
            lead(3, "Emily Chen", None, Some("emily@startupxyz.com"), LeadStatus::Qualified),
        ]
    }

    fn text(term: &str) -> LeadQuery {
        LeadQuery { q: Some(term.to_string()), status: None }
    }

    fn ids(leads: Vec<Lead>) -> Vec<i64> {
        leads.into_iter().map(|l| l.id).collect()
    }

    #[test]
    fn term_matches_any_text_field_case_insensitively() {
        let leads = sample();
        assert_eq!(ids(search_leads(&leads, &text("TECHCORP"))), vec![1]);
        assert_eq!(ids(search_leads(&leads, &text("startupxyz"))), vec![3]);
        assert_eq!(ids(search_leads(&leads, &text("global"))), vec![2]);
        assert!(search_leads(&leads, &text("nobody")).is_empty());
    }

    #[test]
    fn empty_term_and_all_status_match_everything() {
        let leads = sample();
        let q = LeadQuery { q: Some("  ".into()), status: Some(LeadStatus::from("All")) };
        assert_eq!(ids(search_leads(&leads, &q)), vec![1, 2, 3]);
    }

    #[test]
    fn status_filter_combines_with_term() {
        let leads = sample();
        let q = LeadQuery { q: None, status: Some(LeadStatus::Qualified) };
        assert_eq!(ids(search_leads(&leads, &q)), vec![1, 3]);
        let q = LeadQuery { q: Some("emily".into()), status: Some(LeadStatus::Qualified) };
        assert_eq!(ids(search_leads(&leads, &q)), vec![3]);
    }
}
