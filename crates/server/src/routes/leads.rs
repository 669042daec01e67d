use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use models::{Lead, LeadPatch, LeadStatus, Stage};
use service::reports::search::{search_leads, LeadQuery};
use service::Services;

use crate::errors::JsonApiError;

#[derive(Debug, Deserialize)]
pub struct BulkDeleteRequest {
    pub ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct StatusChange {
    pub status: LeadStatus,
    #[serde(default)]
    pub stage: Option<Stage>,
}

/// List all leads in store order
pub async fn list_leads(State(services): State<Services>) -> Json<Vec<Lead>> {
    Json(services.leads.get_all().await)
}

pub async fn create_lead(
    State(services): State<Services>,
    Json(data): Json<LeadPatch>,
) -> (StatusCode, Json<Lead>) {
    (StatusCode::CREATED, Json(services.leads.create(data).await))
}

pub async fn hotlist(State(services): State<Services>) -> Json<Vec<Lead>> {
    Json(services.leads.get_hotlist().await)
}

/// Case-insensitive text search with an optional exact status filter
pub async fn search(State(services): State<Services>, Query(query): Query<LeadQuery>) -> Json<Vec<Lead>> {
    let leads = services.leads.get_all().await;
    Json(search_leads(&leads, &query))
}

/// Remove every listed lead that exists; returns the removed records
pub async fn bulk_delete(
    State(services): State<Services>,
    Json(req): Json<BulkDeleteRequest>,
) -> Json<Vec<Lead>> {
    Json(services.leads.bulk_delete(&req.ids).await)
}

pub async fn get_lead(State(services): State<Services>, Path(id): Path<i64>) -> Result<Json<Lead>, JsonApiError> {
    Ok(Json(services.leads.get_by_id(id).await?))
}

pub async fn update_lead(
    State(services): State<Services>,
    Path(id): Path<i64>,
    Json(patch): Json<LeadPatch>,
) -> Result<Json<Lead>, JsonApiError> {
    Ok(Json(services.leads.update(id, patch).await?))
}

pub async fn delete_lead(State(services): State<Services>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    services.leads.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn update_status(
    State(services): State<Services>,
    Path(id): Path<i64>,
    Json(change): Json<StatusChange>,
) -> Result<Json<Lead>, JsonApiError> {
    Ok(Json(services.leads.update_status(id, change.status, change.stage).await?))
}

pub async fn toggle_hotlist(State(services): State<Services>, Path(id): Path<i64>) -> Result<Json<Lead>, JsonApiError> {
    Ok(Json(services.leads.toggle_hotlist(id).await?))
}
