//! BDD test world for the uptime dashboard

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use cucumber::World;
use uptime_dashboard::fetcher::{FetchResult, Fetcher};
use uptime_dashboard::io::{HttpClient, HttpResponse};
use uptime_dashboard::model::MonitorRecord;
use uptime_dashboard::normalize::{LogRow, MonitorIndex, UptimeRatios};
use uptime_dashboard::status::StatusLabel;
use uptime_dashboard::DashboardError;

/// HTTP client that answers every POST with a canned response and counts calls
#[derive(Debug)]
pub struct CannedClient {
    response: Result<HttpResponse, String>,
    calls: Arc<AtomicUsize>,
}

impl CannedClient {
    pub fn new(response: Result<HttpResponse, String>, calls: Arc<AtomicUsize>) -> Self {
        Self { response, calls }
    }
}

#[async_trait]
impl HttpClient for CannedClient {
    async fn post_form(
        &self,
        _url: &str,
        _params: &[(&str, &str)],
    ) -> uptime_dashboard::Result<HttpResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            Ok(r) => Ok(r.clone()),
            Err(msg) => Err(DashboardError::Http(msg.clone())),
        }
    }
}

#[derive(Debug, Default, World)]
pub struct DashboardWorld {
    // Fetch testing
    pub fetcher: Option<Arc<Fetcher>>,
    pub calls: Arc<AtomicUsize>,
    pub started_at: Option<Instant>,
    pub fetch_result: Option<FetchResult>,

    // Normalizer testing
    pub records: Vec<MonitorRecord>,
    pub index: Option<MonitorIndex>,
    pub status: Option<StatusLabel>,
    pub uptime: Option<UptimeRatios>,
    pub log_rows: Vec<LogRow>,

    // Dashboard testing
    pub response_status: Option<u16>,
    pub response_body: Option<String>,
}
