use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use service::latency::Latency;
use service::Services;
use tower::ServiceExt;

use server::routes;

fn app() -> anyhow::Result<Router> {
    let services = Services::demo(Latency::none())?;
    Ok(routes::build_router(services, tower_http::cors::CorsLayer::very_permissive()))
}

async fn body_json(res: axum::response::Response) -> anyhow::Result<serde_json::Value> {
    let bytes = to_bytes(res.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[tokio::test]
async fn unknown_lead_is_json_404() -> anyhow::Result<()> {
    let res = app()?
        .oneshot(Request::builder().uri("/api/leads/4040").body(Body::empty())?)
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = body_json(res).await?;
    assert_eq!(body["detail"], "lead 4040 not found");
    Ok(())
}

#[tokio::test]
async fn malformed_body_is_rejected() -> anyhow::Result<()> {
    let req = Request::builder()
        .method("POST")
        .uri("/api/leads/bulk-delete")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"ids": "all"}"#))?;
    let res = app()?.oneshot(req).await?;
    assert!(res.status().is_client_error());
    Ok(())
}

#[tokio::test]
async fn static_lead_routes_take_priority_over_ids() -> anyhow::Result<()> {
    let res = app()?
        .oneshot(Request::builder().uri("/api/leads/hotlist").body(Body::empty())?)
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res).await?;
    assert_eq!(body.as_array().map(Vec::len), Some(3));
    Ok(())
}
