use std::io;

use anyhow::anyhow;
use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8081, worker_threads: Some(4) }
    }
}

/// Where seed records come from and how slow the stores pretend to be.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StoreConfig {
    /// JSON array of leads; the built-in demo set is used when unset.
    #[serde(default)]
    pub leads_seed: Option<String>,
    #[serde(default)]
    pub deals_seed: Option<String>,
    #[serde(default)]
    pub activities_seed: Option<String>,
    #[serde(default)]
    pub latency: LatencyConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LatencyConfig {
    #[serde(default = "default_latency_enabled")]
    pub enabled: bool,
    /// Percentage applied to each operation's base delay (100 = as-is).
    #[serde(default = "default_scale_percent")]
    pub scale_percent: u32,
    /// Extra uniformly random delay, in milliseconds, added per call.
    #[serde(default)]
    pub jitter_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self { enabled: default_latency_enabled(), scale_percent: default_scale_percent(), jitter_ms: 0 }
    }
}

fn default_latency_enabled() -> bool { true }
fn default_scale_percent() -> u32 { 100 }

pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// File config if present, otherwise defaults; env overrides applied either way.
    pub fn load_or_default() -> Result<Self> {
        Self::load_or_default_from(&config_path())
    }

    /// Only a missing file falls back to defaults; unreadable or malformed files are errors.
    pub fn load_or_default_from(path: &str) -> Result<Self> {
        let mut cfg = match std::fs::read_to_string(path) {
            Ok(content) => parse(&content).with_context(|| format!("invalid config file {path}"))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => AppConfig::default(),
            Err(e) => return Err(anyhow!("cannot read config file {path}: {e}")),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize_from_env();
        self.server.normalize()?;
        self.store.normalize_from_env();
        self.store.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize_from_env(&mut self) {
        if let Ok(host) = std::env::var("SERVER_HOST") {
            if !host.trim().is_empty() {
                self.host = host;
            }
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            self.port = port;
        }
    }

    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl StoreConfig {
    pub fn normalize_from_env(&mut self) {
        self.apply_env(|key| std::env::var(key).ok());
    }

    /// Env values win over the file, same as `SERVER_HOST`/`SERVER_PORT`.
    fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        for (key, slot) in [
            ("CRM_LEADS_SEED", &mut self.leads_seed),
            ("CRM_DEALS_SEED", &mut self.deals_seed),
            ("CRM_ACTIVITIES_SEED", &mut self.activities_seed),
        ] {
            if let Some(path) = var(key) {
                *slot = Some(path);
            }
        }
        // CRM_LATENCY_MS_SCALE=0 is the quick way to run without artificial delay
        if let Some(scale) = var("CRM_LATENCY_MS_SCALE").and_then(|v| v.parse::<u32>().ok()) {
            self.latency.scale_percent = scale;
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (key, path) in [
            ("store.leads_seed", &self.leads_seed),
            ("store.deals_seed", &self.deals_seed),
            ("store.activities_seed", &self.activities_seed),
        ] {
            if path.as_deref().is_some_and(|p| p.trim().is_empty()) {
                return Err(anyhow!("{key} is set but empty"));
            }
        }
        if self.latency.scale_percent > 1000 {
            return Err(anyhow!("store.latency.scale_percent must be <= 1000"));
        }
        if self.latency.jitter_ms > 10_000 {
            return Err(anyhow!("store.latency.jitter_ms must be <= 10000"));
        }
        Ok(())
    }
}
