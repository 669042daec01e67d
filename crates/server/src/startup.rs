use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use service::Services;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))
}

/// Seeded stores and the router for an already-validated config
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    let services = Services::from_config(&cfg.store).await?;
    Ok(routes::build_router(services, build_cors()))
}

/// Serve `app` until `shutdown` resolves, then drain in-flight requests
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // no signal handler: run until the process is killed
        warn!(error = %e, "ctrl_c_unavailable");
        std::future::pending::<()>().await;
    }
    info!("shutdown_signal");
}

/// Bind the configured address and serve until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;
    let addr = bind_addr(&cfg)?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    serve(listener, app, ctrl_c()).await?;
    Ok(())
}
