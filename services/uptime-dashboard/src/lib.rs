//! Uptime Dashboard - read-only view of UptimeRobot monitors
//!
//! Fetches the monitor list from the UptimeRobot API, caches it for a fixed
//! window, and serves per-monitor status, uptime, response times and events.

pub mod cache;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod fetcher;
pub mod io;
pub mod model;
pub mod normalize;
pub mod status;
pub mod view;

pub use config::{load_config, Config};
pub use error::{DashboardError, FetchError, Result};

use std::net::SocketAddr;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::fetcher::Fetcher;
use crate::io::ReqwestHttpClient;

/// Run the dashboard with the given configuration until Ctrl-C
pub async fn run(config: Config) -> Result<()> {
    let api_key = config.api_key()?.to_string();
    let http: Arc<dyn io::HttpClient> = Arc::new(ReqwestHttpClient::new());
    let fetcher = Arc::new(Fetcher::from_config(&config, http));
    let cancel = CancellationToken::new();

    // Setup shutdown handler
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            return;
        }
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    let addr: SocketAddr = format!("{}:{}", config.dashboard.bind_address, config.dashboard.port)
        .parse()
        .map_err(|e| {
            DashboardError::Config(format!(
                "Invalid dashboard address {}:{}: {}",
                config.dashboard.bind_address, config.dashboard.port, e
            ))
        })?;

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        DashboardError::Dashboard(format!("Failed to bind dashboard to {}: {}", addr, e))
    })?;
    tracing::info!("Dashboard listening on http://{}", addr);

    let router = dashboard::build_router(fetcher, &api_key);
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await
        .map_err(|e| DashboardError::Dashboard(format!("Server error: {}", e)))?;

    tracing::info!("Dashboard stopped");
    Ok(())
}
