//! Uptime Dashboard CLI
//!
//! Command-line interface for the UptimeRobot monitor dashboard.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;
use uptime_dashboard::{load_config, Config};

#[derive(Parser)]
#[command(name = "uptime-dashboard")]
#[command(about = "Read-only dashboard for UptimeRobot monitors")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dashboard port (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, port={:?}, log_level={:?}",
        args.config,
        args.port,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Err(e) = config.resolve_secrets() {
        tracing::error!("{}", e);
        return Err(e.into());
    }

    if let Some(port) = args.port {
        config.dashboard.port = port;
    }

    tracing::info!("Starting uptime dashboard");
    tracing::debug!(
        "API: {}, cache TTL: {}s, logs limit: {}",
        config.api_url,
        config.cache_ttl_seconds,
        config.logs_limit
    );

    uptime_dashboard::run(config).await?;

    Ok(())
}
