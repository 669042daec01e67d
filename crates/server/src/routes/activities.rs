use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use models::{Activity, ActivityPatch, NewActivity};
use service::Services;

use crate::errors::JsonApiError;

pub async fn list_activities(State(services): State<Services>) -> Json<Vec<Activity>> {
    Json(services.activities.get_all().await)
}

pub async fn create_activity(
    State(services): State<Services>,
    Json(input): Json<NewActivity>,
) -> (StatusCode, Json<Activity>) {
    (StatusCode::CREATED, Json(services.activities.create(input).await))
}

pub async fn activities_for_lead(State(services): State<Services>, Path(lead_id): Path<i64>) -> Json<Vec<Activity>> {
    Json(services.activities.get_by_lead_id(lead_id).await)
}

pub async fn update_activity(
    State(services): State<Services>,
    Path(id): Path<i64>,
    Json(patch): Json<ActivityPatch>,
) -> Result<Json<Activity>, JsonApiError> {
    Ok(Json(services.activities.update(id, patch).await?))
}

pub async fn delete_activity(State(services): State<Services>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    services.activities.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
