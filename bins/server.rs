use std::process::ExitCode;

use configs::{AppConfig, ServerConfig};
use dotenvy::dotenv;
use tracing::{error, info};

fn runtime(server: &ServerConfig) -> std::io::Result<tokio::runtime::Runtime> {
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(threads) = server.worker_threads {
        builder.worker_threads(threads);
    }
    builder.build()
}

fn main() -> ExitCode {
    // .env before anything reads RUST_LOG, LOG_FORMAT or CONFIG_PATH
    dotenv().ok();
    let log_format = common::utils::logging::init_logging_from_env();

    let cfg = match AppConfig::load_or_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = ?e, config = %configs::config_path(), "config_invalid");
            return ExitCode::FAILURE;
        }
    };

    let rt = match runtime(&cfg.server) {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "runtime_build_failed");
            return ExitCode::FAILURE;
        }
    };

    info!(
        version = env!("CARGO_PKG_VERSION"),
        pid = std::process::id(),
        host = %cfg.server.host,
        port = cfg.server.port,
        threads = cfg.server.worker_threads.unwrap_or_default(),
        latency_scale = cfg.store.latency.scale_percent,
        ?log_format,
        "crm_starting"
    );

    match rt.block_on(server::run(cfg)) {
        Ok(()) => {
            info!("crm_stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = ?e, "crm_failed");
            ExitCode::FAILURE
        }
    }
}
