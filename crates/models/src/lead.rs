//! Lead record.
//!
//! One record type carries both historical field sets: the contact-centric
//! `name/company/value/assignedTo/stage` shape and the product-centric
//! `productName/arr/salesRep/category/status` shape. [`Lead::apply`] is the
//! only write path and keeps the two in step.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::lenient;
use crate::vocab::{LeadStatus, Stage};

/// ARR is tracked in millions; `value` is raw currency.
pub const ARR_UNIT: f64 = 1_000_000.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LeadStatus>,
    #[serde(default)]
    pub is_hotlist: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_size: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_amount", skip_serializing_if = "Option::is_none")]
    pub arr: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_rep: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_reminder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_contact: DateTime<Utc>,
}

/// Partial lead used for both create and update. Absent fields are left alone.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient::opt_amount", skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LeadStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hotlist: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_size: Option<String>,
    #[serde(deserialize_with = "lenient::opt_amount", skip_serializing_if = "Option::is_none")]
    pub arr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_rep: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_reminder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LeadPatch {
    /// Patch that only moves a lead through the pipeline.
    pub fn status(status: LeadStatus, stage: Option<Stage>) -> Self {
        Self { status: Some(status), stage, ..Self::default() }
    }
}

fn set<T: Clone>(slot: &mut Option<T>, incoming: &Option<T>) {
    if let Some(v) = incoming {
        *slot = Some(v.clone());
    }
}

impl Lead {
    /// Build a fresh lead from creation input. `stage` falls back to `Lead`.
    pub fn create(id: i64, now: DateTime<Utc>, input: &LeadPatch) -> Self {
        let mut lead = Lead {
            id,
            name: None,
            company: None,
            email: None,
            phone: None,
            value: None,
            assigned_to: None,
            stage: None,
            status: None,
            is_hotlist: false,
            product_name: None,
            website_url: None,
            linkedin_url: None,
            team_size: None,
            arr: None,
            category: None,
            funding_type: None,
            edition: None,
            sales_rep: None,
            follow_up_reminder: None,
            notes: None,
            created_at: now,
            last_contact: now,
        };
        lead.apply(input);
        if lead.stage.is_none() {
            lead.stage = Some(Stage::Lead);
        }
        lead
    }

    /// Merge `patch` into the record, then re-derive aliased fields from whatever it touched.
    ///
    /// Never changes `id` or `created_at`; timestamps are the caller's job (see [`Lead::touch`]).
    pub fn apply(&mut self, patch: &LeadPatch) {
        set(&mut self.name, &patch.name);
        set(&mut self.company, &patch.company);
        set(&mut self.email, &patch.email);
        set(&mut self.phone, &patch.phone);
        set(&mut self.value, &patch.value);
        set(&mut self.assigned_to, &patch.assigned_to);
        set(&mut self.stage, &patch.stage);
        set(&mut self.status, &patch.status);
        if let Some(hot) = patch.is_hotlist {
            self.is_hotlist = hot;
        }
        set(&mut self.product_name, &patch.product_name);
        set(&mut self.website_url, &patch.website_url);
        set(&mut self.linkedin_url, &patch.linkedin_url);
        set(&mut self.team_size, &patch.team_size);
        set(&mut self.arr, &patch.arr);
        set(&mut self.category, &patch.category);
        set(&mut self.funding_type, &patch.funding_type);
        set(&mut self.edition, &patch.edition);
        set(&mut self.sales_rep, &patch.sales_rep);
        set(&mut self.follow_up_reminder, &patch.follow_up_reminder);
        set(&mut self.notes, &patch.notes);
        self.normalize(patch);
    }

    /// Derived-field rules. Source fields win over their mirrors when both are supplied.
    fn normalize(&mut self, touched: &LeadPatch) {
        if let Some(arr) = touched.arr {
            self.value = Some(arr * ARR_UNIT);
        }
        if let Some(product) = &touched.product_name {
            self.company = Some(product.clone());
        }
        if let Some(rep) = &touched.sales_rep {
            self.assigned_to = Some(rep.clone());
        }
        if matches!(touched.status, Some(LeadStatus::Hotlist)) {
            self.is_hotlist = true;
        }
    }

    /// Refresh `last_contact`. Always moves forward, even when the clock has not.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_contact = if now > self.last_contact {
            now
        } else {
            self.last_contact + Duration::microseconds(1)
        };
    }

    pub fn value_or_zero(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }

    pub fn is_won(&self) -> bool {
        self.status.as_ref().is_some_and(LeadStatus::is_won)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn t0() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-03-01T10:00:00Z").unwrap().with_timezone(&Utc)
    }

    #[test]
    fn product_shape_fills_contact_shape() {
        let input: LeadPatch = serde_json::from_value(json!({
            "productName": "Acme",
            "name": "Jo",
            "arr": "2.5",
            "salesRep": "Sam"
        }))
        .unwrap();
        let lead = Lead::create(7, t0(), &input);
        assert_eq!(lead.id, 7);
        assert_eq!(lead.value, Some(2_500_000.0));
        assert_eq!(lead.company.as_deref(), Some("Acme"));
        assert_eq!(lead.assigned_to.as_deref(), Some("Sam"));
        assert_eq!(lead.stage, Some(Stage::Lead));
        assert_eq!(lead.created_at, lead.last_contact);
    }

    #[test]
    fn arr_overrides_explicit_value() {
        let mut lead = Lead::create(1, t0(), &LeadPatch { value: Some(10.0), ..Default::default() });
        lead.apply(&LeadPatch { value: Some(99.0), arr: Some(1.5), ..Default::default() });
        assert_eq!(lead.value, Some(1_500_000.0));
    }

    #[test]
    fn arr_text_in_exponent_form() {
        let input: LeadPatch = serde_json::from_value(json!({"arr": "2.5e1"})).unwrap();
        let lead = Lead::create(1, t0(), &input);
        assert_eq!(lead.arr, Some(25.0));
        assert_eq!(lead.value, Some(25_000_000.0));
    }

    #[test]
    fn untouched_sources_keep_mirrors() {
        let mut lead = Lead::create(
            1,
            t0(),
            &LeadPatch { product_name: Some("Acme".into()), ..Default::default() },
        );
        lead.apply(&LeadPatch { company: Some("Acme Holdings".into()), ..Default::default() });
        assert_eq!(lead.company.as_deref(), Some("Acme Holdings"));
        assert_eq!(lead.product_name.as_deref(), Some("Acme"));
    }

    #[test]
    fn hotlist_status_forces_flag() {
        let mut lead = Lead::create(1, t0(), &LeadPatch::default());
        assert!(!lead.is_hotlist);
        lead.apply(&LeadPatch { status: Some(LeadStatus::Hotlist), is_hotlist: Some(false), ..Default::default() });
        assert!(lead.is_hotlist);

        lead.apply(&LeadPatch { is_hotlist: Some(false), ..Default::default() });
        assert!(!lead.is_hotlist, "flag is caller-controlled when status is not touched");
    }

    #[test]
    fn touch_is_strictly_monotonic() {
        let mut lead = Lead::create(1, t0(), &LeadPatch::default());
        lead.touch(t0());
        assert!(lead.last_contact > t0());
        let before = lead.last_contact;
        lead.touch(t0() - Duration::seconds(5));
        assert!(lead.last_contact > before);
        let later = t0() + Duration::hours(1);
        lead.touch(later);
        assert_eq!(lead.last_contact, later);
    }

    #[test]
    fn wire_shape_uses_capital_id_and_camel_case() {
        let lead = Lead::create(3, t0(), &LeadPatch { is_hotlist: Some(true), ..Default::default() });
        let v = serde_json::to_value(&lead).unwrap();
        assert_eq!(v["Id"], 3);
        assert_eq!(v["isHotlist"], true);
        assert_eq!(v["stage"], "Lead");
        assert!(v.get("productName").is_none());
    }
}
