//! UptimeRobot `getMonitors` fetcher with a per-key TTL cache

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::cache::TtlCache;
use crate::config::Config;
use crate::error::FetchError;
use crate::io::HttpClient;
use crate::model::{GetMonitorsResponse, MonitorRecord};

/// Monitors from one fetch, or why there are none
pub type FetchResult = std::result::Result<Arc<Vec<MonitorRecord>>, FetchError>;

/// Fetches the monitor list and memoizes each outcome for the cache TTL
pub struct Fetcher {
    api_url: String,
    logs_limit: String,
    http: Arc<dyn HttpClient>,
    cache: Mutex<TtlCache<String, FetchResult>>,
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher")
            .field("api_url", &self.api_url)
            .field("logs_limit", &self.logs_limit)
            .finish()
    }
}

impl Fetcher {
    pub fn new(api_url: &str, logs_limit: u32, ttl: Duration, http: Arc<dyn HttpClient>) -> Self {
        tracing::debug!(
            "Created Fetcher for {} (logs_limit={}, ttl={:?})",
            api_url,
            logs_limit,
            ttl
        );

        Self {
            api_url: api_url.to_string(),
            logs_limit: logs_limit.to_string(),
            http,
            cache: Mutex::new(TtlCache::new(ttl)),
        }
    }

    pub fn from_config(config: &Config, http: Arc<dyn HttpClient>) -> Self {
        Self::new(
            &config.api_url,
            config.logs_limit,
            Duration::from_secs(config.cache_ttl_seconds),
            http,
        )
    }

    /// Fetch monitors for `api_key`, served from cache while the last outcome is fresh
    pub async fn fetch(&self, api_key: &str) -> FetchResult {
        self.fetch_at(api_key, Instant::now()).await
    }

    /// [`Fetcher::fetch`] evaluated at an explicit point in time
    pub async fn fetch_at(&self, api_key: &str, now: Instant) -> FetchResult {
        if api_key.is_empty() {
            return Err(FetchError::Config("API key is empty".to_string()));
        }

        // Held across the request so one cache window issues at most one call.
        let mut cache = self.cache.lock().await;
        let key = api_key.to_string();
        if let Some(cached) = cache.get(&key, now) {
            tracing::debug!("Serving monitors from cache");
            return cached;
        }

        tracing::debug!("Cache miss, requesting monitors from {}", self.api_url);
        let result = self.request(api_key).await;
        match &result {
            Ok(monitors) => tracing::info!("Fetched {} monitors", monitors.len()),
            Err(e) => tracing::error!("{}", e),
        }

        cache.insert(key, result.clone(), now);
        result
    }

    async fn request(&self, api_key: &str) -> FetchResult {
        let params = [
            ("api_key", api_key),
            ("format", "json"),
            ("response_times", "1"),
            ("custom_uptime_ratios", "1"),
            ("logs", "1"),
            ("logs_limit", self.logs_limit.as_str()),
        ];

        let response = self
            .http
            .post_form(&self.api_url, &params)
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.is_success() {
            return Err(FetchError::Transport(format!(
                "{} returned status {}",
                self.api_url, response.status
            )));
        }

        let parsed: GetMonitorsResponse = serde_json::from_str(&response.body)
            .map_err(|e| FetchError::Transport(format!("Invalid response body: {}", e)))?;

        if parsed.is_ok() {
            Ok(Arc::new(parsed.monitors))
        } else {
            Err(FetchError::Api(parsed.error_message()))
        }
    }
}
