use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use models::{Deal, DealPatch, NewDeal, Stage};
use service::Services;

use crate::errors::JsonApiError;

pub async fn list_deals(State(services): State<Services>) -> Json<Vec<Deal>> {
    Json(services.deals.get_all().await)
}

pub async fn create_deal(
    State(services): State<Services>,
    Json(input): Json<NewDeal>,
) -> Result<(StatusCode, Json<Deal>), JsonApiError> {
    if input.title.trim().is_empty() {
        return Err(JsonApiError::bad_request("title must not be empty"));
    }
    Ok((StatusCode::CREATED, Json(services.deals.create(input).await)))
}

/// Stage in the path accepts `Closed Won`, `closed-won` or `closed_won`
pub async fn deals_by_stage(
    State(services): State<Services>,
    Path(stage): Path<String>,
) -> Result<Json<Vec<Deal>>, JsonApiError> {
    let stage: Stage = stage.parse().map_err(service::errors::ServiceError::from)?;
    Ok(Json(services.deals.get_by_stage(stage).await))
}

pub async fn get_deal(State(services): State<Services>, Path(id): Path<i64>) -> Result<Json<Deal>, JsonApiError> {
    Ok(Json(services.deals.get_by_id(id).await?))
}

pub async fn update_deal(
    State(services): State<Services>,
    Path(id): Path<i64>,
    Json(patch): Json<DealPatch>,
) -> Result<Json<Deal>, JsonApiError> {
    Ok(Json(services.deals.update(id, patch).await?))
}

pub async fn delete_deal(State(services): State<Services>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    services.deals.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
