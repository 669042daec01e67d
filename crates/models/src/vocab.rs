//! Pipeline vocabularies shared by leads and deals.
//!
//! `Stage` is the closed set of kanban columns. `LeadStatus` is the wider,
//! open-ended status vocabulary; labels outside the known set are kept
//! verbatim in [`LeadStatus::Other`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Coarse pipeline bucket.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    Lead,
    Qualified,
    Proposal,
    Negotiation,
    #[serde(rename = "Closed Won")]
    ClosedWon,
    #[serde(rename = "Closed Lost")]
    ClosedLost,
}

impl Stage {
    /// Board order, left to right.
    pub const ALL: [Stage; 6] = [
        Stage::Lead,
        Stage::Qualified,
        Stage::Proposal,
        Stage::Negotiation,
        Stage::ClosedWon,
        Stage::ClosedLost,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Stage::Lead => "Lead",
            Stage::Qualified => "Qualified",
            Stage::Proposal => "Proposal",
            Stage::Negotiation => "Negotiation",
            Stage::ClosedWon => "Closed Won",
            Stage::ClosedLost => "Closed Lost",
        }
    }

    pub fn is_closed(self) -> bool {
        matches!(self, Stage::ClosedWon | Stage::ClosedLost)
    }

    /// Status a lead takes when it is dropped into this column.
    pub fn entry_status(self) -> LeadStatus {
        match self {
            Stage::Lead => LeadStatus::New,
            Stage::Qualified => LeadStatus::Qualified,
            Stage::Proposal => LeadStatus::Proposal,
            Stage::Negotiation => LeadStatus::Negotiation,
            Stage::ClosedWon => LeadStatus::ClosedWon,
            Stage::ClosedLost => LeadStatus::ClosedLost,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Stage {
    type Err = ModelError;

    /// Accepts the display label, case-insensitively, with `_`/`-` standing in for spaces
    /// so path segments like `closed-won` resolve.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['_', '-'], " ");
        Stage::ALL
            .into_iter()
            .find(|st| st.label().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ModelError::Validation(format!("unknown stage: {s}")))
    }
}

/// Fine-grained lifecycle label.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LeadStatus {
    New,
    Connected,
    Locked,
    MeetingBooked,
    MeetingDone,
    FollowUp,
    Qualified,
    Proposal,
    ProposalSent,
    Negotiation,
    Closed,
    ClosedWon,
    ClosedLost,
    Lost,
    OnHold,
    Unresponsive,
    LaunchedOnAppSumo,
    LaunchedOnPrimeClub,
    KeepAnEye,
    Rejected,
    Unsubscribed,
    Outdated,
    Hotlist,
    OutOfLeague,
    Other(String),
}

impl LeadStatus {
    pub fn as_str(&self) -> &str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Connected => "Connected",
            LeadStatus::Locked => "Locked",
            LeadStatus::MeetingBooked => "Meeting Booked",
            LeadStatus::MeetingDone => "Meeting Done",
            LeadStatus::FollowUp => "Follow Up",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::Proposal => "Proposal",
            LeadStatus::ProposalSent => "Proposal Sent",
            LeadStatus::Negotiation => "Negotiation",
            LeadStatus::Closed => "Closed",
            LeadStatus::ClosedWon => "Closed Won",
            LeadStatus::ClosedLost => "Closed Lost",
            LeadStatus::Lost => "Lost",
            LeadStatus::OnHold => "On Hold",
            LeadStatus::Unresponsive => "Unresponsive",
            LeadStatus::LaunchedOnAppSumo => "Launched on AppSumo",
            LeadStatus::LaunchedOnPrimeClub => "Launched on Prime Club",
            LeadStatus::KeepAnEye => "Keep an Eye",
            LeadStatus::Rejected => "Rejected",
            LeadStatus::Unsubscribed => "Unsubscribed",
            LeadStatus::Outdated => "Outdated",
            LeadStatus::Hotlist => "Hotlist",
            LeadStatus::OutOfLeague => "Out of League",
            LeadStatus::Other(s) => s,
        }
    }

    pub fn is_won(&self) -> bool {
        matches!(self, LeadStatus::ClosedWon)
    }

    /// Statuses counted as "in pipeline" by the analytics view.
    pub fn is_in_pipeline(&self) -> bool {
        matches!(self, LeadStatus::Qualified | LeadStatus::Proposal | LeadStatus::Negotiation)
    }
}

impl From<&str> for LeadStatus {
    fn from(s: &str) -> Self {
        match s {
            "New" => LeadStatus::New,
            "Connected" => LeadStatus::Connected,
            "Locked" => LeadStatus::Locked,
            "Meeting Booked" => LeadStatus::MeetingBooked,
            "Meeting Done" => LeadStatus::MeetingDone,
            "Follow Up" => LeadStatus::FollowUp,
            "Qualified" => LeadStatus::Qualified,
            "Proposal" => LeadStatus::Proposal,
            "Proposal Sent" => LeadStatus::ProposalSent,
            "Negotiation" => LeadStatus::Negotiation,
            "Closed" => LeadStatus::Closed,
            "Closed Won" => LeadStatus::ClosedWon,
            "Closed Lost" => LeadStatus::ClosedLost,
            "Lost" => LeadStatus::Lost,
            "On Hold" => LeadStatus::OnHold,
            "Unresponsive" => LeadStatus::Unresponsive,
            "Launched on AppSumo" => LeadStatus::LaunchedOnAppSumo,
            "Launched on Prime Club" => LeadStatus::LaunchedOnPrimeClub,
            "Keep an Eye" => LeadStatus::KeepAnEye,
            "Rejected" => LeadStatus::Rejected,
            "Unsubscribed" => LeadStatus::Unsubscribed,
            "Outdated" => LeadStatus::Outdated,
            "Hotlist" => LeadStatus::Hotlist,
            "Out of League" => LeadStatus::OutOfLeague,
            other => LeadStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for LeadStatus {
    fn from(s: String) -> Self {
        LeadStatus::from(s.as_str())
    }
}

impl From<LeadStatus> for String {
    fn from(s: LeadStatus) -> Self {
        match s {
            LeadStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
