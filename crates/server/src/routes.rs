use axum::{
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::Services;

pub mod activities;
pub mod deals;
pub mod leads;
pub mod reports;

pub async fn health() -> Json<Health> {
    Json(Health::ok(env!("CARGO_PKG_VERSION")))
}

/// Build the full application router over the given store bundle
pub fn build_router(services: Services, cors: CorsLayer) -> Router {
    // Static segments (`hotlist`, `search`, `bulk-delete`) win over `:id`
    let leads = Router::new()
        .route("/api/leads", get(leads::list_leads).post(leads::create_lead))
        .route("/api/leads/hotlist", get(leads::hotlist))
        .route("/api/leads/search", get(leads::search))
        .route("/api/leads/bulk-delete", post(leads::bulk_delete))
        .route(
            "/api/leads/:id",
            get(leads::get_lead).put(leads::update_lead).delete(leads::delete_lead),
        )
        .route("/api/leads/:id/status", put(leads::update_status))
        .route("/api/leads/:id/hotlist", post(leads::toggle_hotlist));

    let deals = Router::new()
        .route("/api/deals", get(deals::list_deals).post(deals::create_deal))
        .route("/api/deals/stage/:stage", get(deals::deals_by_stage))
        .route(
            "/api/deals/:id",
            get(deals::get_deal).put(deals::update_deal).delete(deals::delete_deal),
        );

    let activities = Router::new()
        .route(
            "/api/activities",
            get(activities::list_activities).post(activities::create_activity),
        )
        .route("/api/activities/lead/:lead_id", get(activities::activities_for_lead))
        .route(
            "/api/activities/:id",
            put(activities::update_activity).delete(activities::delete_activity),
        );

    let reports = Router::new()
        .route("/api/reports/dashboard", get(reports::dashboard_metrics))
        .route("/api/reports/analytics", get(reports::analytics_summary))
        .route("/api/reports/leaderboard", get(reports::rep_leaderboard))
        .route("/api/reports/pipeline", get(reports::board))
        .route("/api/reports/pipeline/move", post(reports::move_on_board))
        .route("/api/reports/calendar", get(reports::calendar));

    Router::new()
        .route("/health", get(health))
        .merge(leads)
        .merge(deals)
        .merge(activities)
        .merge(reports)
        .with_state(services)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
