//! falcon-server entry point.
//!
//! Initializes tracing, loads configuration, builds the router and serves it
//! until SIGTERM or Ctrl+C.

use axum_server::Handle;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use falcon_server::config::{AppConfig, DEFAULT_LOG_FILTER};
use falcon_server::http::{setup_shutdown_handler, start_server};
use falcon_server::routes::create_router;

/// falcon-server: monitoring endpoint for the Millennium Falcon
#[derive(Parser, Debug)]
#[command(name = "falcon-server", version, about)]
struct Args {
    /// Path to configuration file (defaults to config/default.toml if present)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "falcon_server=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = AppConfig::resolve(args.config.as_deref())?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        shutdown_grace_seconds = config.http.shutdown_grace_seconds,
        log_format = %config.logging.format,
        "Loaded configuration"
    );

    let app = create_router();

    let handle = Handle::new();
    setup_shutdown_handler(handle.clone(), config.http.shutdown_grace());

    start_server(app, &config, handle).await?;

    Ok(())
}
