use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Datelike, Utc};
use serde::Deserialize;

use models::Lead;
use service::reports::{
    analytics::{analytics, AnalyticsSummary},
    calendar::{month_view, CalendarMonth},
    dashboard::{dashboard, DashboardMetrics},
    leaderboard::{leaderboard, Leaderboard},
    pipeline::{move_lead, pipeline_board, MoveRequest, PipelineBoard},
};
use service::Services;

use crate::errors::JsonApiError;

/// Missing fields default to the current month.
#[derive(Debug, Default, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

pub async fn dashboard_metrics(State(services): State<Services>) -> Json<DashboardMetrics> {
    let (leads, deals) = tokio::join!(services.leads.get_all(), services.deals.get_all());
    Json(dashboard(&leads, &deals))
}

pub async fn analytics_summary(State(services): State<Services>) -> Json<AnalyticsSummary> {
    Json(analytics(&services.leads.get_all().await))
}

pub async fn rep_leaderboard(State(services): State<Services>) -> Json<Leaderboard> {
    Json(leaderboard(&services.leads.get_all().await))
}

pub async fn board(State(services): State<Services>) -> Json<PipelineBoard> {
    Json(pipeline_board(&services.leads.get_all().await))
}

pub async fn move_on_board(
    State(services): State<Services>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<Lead>, JsonApiError> {
    Ok(Json(move_lead(services.leads.as_ref(), req.lead_id, req.stage).await?))
}

pub async fn calendar(
    State(services): State<Services>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarMonth>, JsonApiError> {
    let today = Utc::now().date_naive();
    let year = query.year.unwrap_or(today.year());
    let month = query.month.unwrap_or(today.month());
    let deals = services.deals.get_all().await;
    Ok(Json(month_view(&deals, year, month)?))
}
