//! hello-service entry point.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hello_service::api::create_router;
use hello_service::config::{BuildInfo, Config};
use hello_service::metrics;
use hello_service::utils::shutdown_signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::load()?;

    init_tracing(&config);

    config.validate()?;

    // Initialize metrics
    if let Some(addr) = config.metrics_addr()? {
        metrics::install_exporter(addr)?;
        info!("Prometheus exporter listening on {}", addr);
    }
    metrics::init_metrics();

    let build = BuildInfo::from_env();
    info!(
        "Starting hello-service (version {}, built {})",
        build.app_version, build.build_timestamp
    );

    // Start HTTP server
    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, create_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = if config.verbose {
        EnvFilter::new("hello_service=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log))
    };

    let registry = tracing_subscriber::registry().with(filter);
    if config.log_json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
