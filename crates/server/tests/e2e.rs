use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use service::latency::Latency;
use service::Services;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes;

fn cors() -> CorsLayer { CorsLayer::very_permissive() }

struct TestApp {
    base_url: String,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Demo seed data, no artificial latency, ephemeral port
async fn start_server() -> anyhow::Result<TestApp> {
    let services = Services::demo(Latency::none())?;
    let app = routes::build_router(services, cors());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(app.url("/health")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_lead_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .post(app.url("/api/leads"))
        .json(&json!({"productName": "Acme", "name": "Jo", "arr": "2.5", "salesRep": "Ana"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created: Value = res.json().await?;
    let id = created["Id"].as_i64().expect("Id");
    assert_eq!(id, 9);
    assert_eq!(created["company"], "Acme");
    assert_eq!(created["assignedTo"], "Ana");
    assert_eq!(created["value"].as_f64(), Some(2_500_000.0));
    assert_eq!(created["stage"], "Lead");

    let res = c.put(app.url(&format!("/api/leads/{id}"))).json(&json!({"notes": "call back"})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated: Value = res.json().await?;
    assert_eq!(updated["notes"], "call back");
    assert_eq!(updated["company"], "Acme");

    let res = c
        .put(app.url(&format!("/api/leads/{id}/status")))
        .json(&json!({"status": "Hotlist"}))
        .send()
        .await?;
    let hot: Value = res.json().await?;
    assert_eq!(hot["isHotlist"], true);

    let listed: Vec<Value> = c.get(app.url("/api/leads/hotlist")).send().await?.json().await?;
    assert!(listed.iter().any(|l| l["Id"] == id));

    let toggled: Value = c.post(app.url(&format!("/api/leads/{id}/hotlist"))).send().await?.json().await?;
    assert_eq!(toggled["isHotlist"], false);

    let res = c.delete(app.url(&format!("/api/leads/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    let res = c.get(app.url(&format!("/api/leads/{id}"))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let err: Value = res.json().await?;
    assert_eq!(err["error"], "Not Found");
    Ok(())
}

#[tokio::test]
async fn e2e_search_and_bulk_delete() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let found: Vec<Value> = c.get(app.url("/api/leads/search?q=TECHCORP")).send().await?.json().await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["Id"], 1);

    let won: Vec<Value> = c
        .get(app.url("/api/leads/search?status=Closed%20Won"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(won.len(), 2);

    let all: Vec<Value> = c.get(app.url("/api/leads/search?status=All")).send().await?.json().await?;
    assert_eq!(all.len(), 8);

    let removed: Vec<Value> = c
        .post(app.url("/api/leads/bulk-delete"))
        .json(&json!({"ids": [1, 2, 999]}))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(removed.len(), 2);
    let remaining: Vec<Value> = c.get(app.url("/api/leads")).send().await?.json().await?;
    assert_eq!(remaining.len(), 6);
    Ok(())
}

#[tokio::test]
async fn e2e_deals_and_activities() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let proposals: Vec<Value> = c.get(app.url("/api/deals/stage/proposal")).send().await?.json().await?;
    assert_eq!(proposals.len(), 1);
    let won: Vec<Value> = c.get(app.url("/api/deals/stage/closed-won")).send().await?.json().await?;
    assert_eq!(won[0]["Id"], 3);
    let res = c.get(app.url("/api/deals/stage/someday")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c
        .post(app.url("/api/deals"))
        .json(&json!({"title": "Renewal", "value": "1500", "closeDate": "2024-02-20"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let deal: Value = res.json().await?;
    assert_eq!(deal["Id"], 6);
    assert_eq!(deal["stage"], "Lead");
    assert_eq!(deal["value"].as_f64(), Some(1500.0));

    let res = c.post(app.url("/api/deals")).json(&json!({"title": "  "})).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    let res = c
        .post(app.url("/api/activities"))
        .json(&json!({"leadId": 1, "type": "Meeting", "description": "Demo"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let for_lead: Vec<Value> = c.get(app.url("/api/activities/lead/1")).send().await?.json().await?;
    assert_eq!(for_lead.last().map(|a| a["type"].clone()), Some(json!("Meeting")));

    let res = c.delete(app.url("/api/activities/404")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_reports() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let dash: Value = c.get(app.url("/api/reports/dashboard")).send().await?.json().await?;
    assert_eq!(dash["totalLeads"], 8);
    assert_eq!(dash["conversionRate"], 25);
    assert_eq!(dash["activeDeals"], 3);

    let summary: Value = c.get(app.url("/api/reports/analytics")).send().await?.json().await?;
    assert_eq!(summary["hotlistCount"], 3);

    let board: Value = c.get(app.url("/api/reports/leaderboard")).send().await?.json().await?;
    assert_eq!(board["topPerformer"], "John Davis");

    let moved: Value = c
        .post(app.url("/api/reports/pipeline/move"))
        .json(&json!({"leadId": 8, "stage": "Qualified"}))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(moved["stage"], "Qualified");
    assert_eq!(moved["status"], "Qualified");

    let pipeline: Value = c.get(app.url("/api/reports/pipeline")).send().await?.json().await?;
    assert_eq!(pipeline["columns"][0]["count"], 1);
    assert_eq!(pipeline["columns"][1]["count"], 2);

    let feb: Value = c.get(app.url("/api/reports/calendar?year=2024&month=2")).send().await?.json().await?;
    assert_eq!(feb["dealCount"], 3);
    assert_eq!(feb["days"].as_array().map(Vec::len), Some(29));

    let res = c.get(app.url("/api/reports/calendar?year=2024&month=13")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn e2e_graceful_shutdown_stops_serving() -> anyhow::Result<()> {
    let services = Services::demo(Latency::none())?;
    let app = routes::build_router(services, cors());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr = listener.local_addr()?;
    let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
    let handle = tokio::spawn(server::serve(listener, app, async move {
        let _ = stop_rx.await;
    }));

    let res = client().get(format!("http://{addr}/health")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    stop_tx.send(()).map_err(|_| anyhow::anyhow!("server already gone"))?;
    tokio::time::timeout(std::time::Duration::from_secs(5), handle).await???;
    Ok(())
}
