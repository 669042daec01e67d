//! Kanban-style pipeline board and stage moves.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use models::{Lead, Stage};

use super::{percent, sum_values};
use crate::errors::ServiceError;
use crate::stores::LeadStore;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineColumn {
    pub stage: Stage,
    pub label: &'static str,
    pub leads: Vec<Lead>,
    pub count: usize,
    pub total_value: f64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineBoard {
    /// One per stage, in pipeline order.
    pub columns: Vec<PipelineColumn>,
    pub total_value: f64,
    pub won_value: f64,
    /// Leads not in a closed stage, including leads with no stage.
    pub active_count: usize,
    pub win_rate: u32,
}

/// Body of a board move.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub lead_id: i64,
    pub stage: Stage,
}

pub fn pipeline_board(leads: &[Lead]) -> PipelineBoard {
    let columns: Vec<PipelineColumn> = Stage::ALL
        .iter()
        .map(|&stage| {
            let in_stage: Vec<Lead> = leads.iter().filter(|l| l.stage == Some(stage)).cloned().collect();
            PipelineColumn {
                stage,
                label: stage.label(),
                count: in_stage.len(),
                total_value: sum_values(&in_stage),
                leads: in_stage,
            }
        })
        .collect();

    let won_count = leads.iter().filter(|l| l.stage == Some(Stage::ClosedWon)).count();
    PipelineBoard {
        total_value: sum_values(leads),
        won_value: sum_values(leads.iter().filter(|l| l.stage == Some(Stage::ClosedWon))),
        active_count: leads.iter().filter(|l| !l.stage.is_some_and(Stage::is_closed)).count(),
        win_rate: percent(won_count, leads.len()),
        columns,
    }
}

/// Move a lead to `to`, setting the status that stage maps to.
/// Moving to the current stage returns the lead untouched.
#[instrument(skip(store))]
pub async fn move_lead(store: &dyn LeadStore, id: i64, to: Stage) -> Result<Lead, ServiceError> {
    let lead = store.move_stage(id, to).await?;
    debug!(lead_id = id, stage = %to, "pipeline_move");
    Ok(lead)
}
