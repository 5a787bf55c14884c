//! Configuration types for the uptime dashboard

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Resolved from the environment by [`Config::resolve_secrets`]
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_seconds: u64,
    #[serde(default = "default_logs_limit")]
    pub logs_limit: u32,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            api_key_env: default_api_key_env(),
            cache_ttl_seconds: default_cache_ttl(),
            logs_limit: default_logs_limit(),
            dashboard: DashboardConfig::default(),
        }
    }
}

impl Config {
    /// Fill in the API key from the process environment.
    ///
    /// A missing or empty key is fatal: nothing may be fetched without it.
    pub fn resolve_secrets(&mut self) -> crate::Result<()> {
        self.resolve_secrets_with(|name| std::env::var(name).ok())
    }

    /// Same as [`Config::resolve_secrets`] with an injectable variable lookup
    pub fn resolve_secrets_with<F>(&mut self, lookup: F) -> crate::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let configured = self.api_key.take().filter(|k| !k.trim().is_empty());
        let key = match configured {
            Some(key) => Some(key),
            None => lookup(&self.api_key_env).filter(|k| !k.trim().is_empty()),
        };

        match key {
            Some(key) => {
                tracing::debug!("API key resolved ({} characters)", key.len());
                self.api_key = Some(key);
                Ok(())
            }
            None => Err(crate::DashboardError::Config(format!(
                "API Key not found. Please check your {} environment variable.",
                self.api_key_env
            ))),
        }
    }

    /// The resolved API key, or a configuration error if it was never resolved
    pub fn api_key(&self) -> crate::Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            crate::DashboardError::Config(format!(
                "API Key not found. Please check your {} environment variable.",
                self.api_key_env
            ))
        })
    }
}

/// Dashboard (HTTP presentation) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_dashboard_port")]
    pub port: u16,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_dashboard_port(),
        }
    }
}

fn default_api_url() -> String {
    "https://api.uptimerobot.com/v2/getMonitors".to_string()
}

fn default_api_key_env() -> String {
    "UPTIMEROBOT_API_KEY".to_string()
}

fn default_cache_ttl() -> u64 {
    300
}

fn default_logs_limit() -> u32 {
    50
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_dashboard_port() -> u16 {
    8501
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::DashboardError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
