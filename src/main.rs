use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mikrotik_kid_control_exporter::{
    AppState, Collector, Config, KidControlClient, MetricsRegistry, Result, create_router,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    setup_tracing();

    let config = Config::from_env().map_err(|e| {
        tracing::error!("{}", e);
        e
    })?;

    tracing::info!(
        "Monitoring router at {} as '{}' (timeout {}s)",
        config.router.base_url(),
        config.router.login(),
        config.router.request_timeout().as_secs()
    );
    if !config.router.verify_ssl() {
        tracing::warn!("TLS certificate verification for the router is disabled");
    }

    // Registry lives for the whole process and is shared with the collector
    let metrics = MetricsRegistry::new();
    let client = KidControlClient::new(config.router.clone()).map_err(|e| {
        tracing::error!("Failed to build router HTTP client: {}", e);
        e
    })?;
    let collector = Collector::new(client, metrics);

    let state = Arc::new(AppState {
        config: config.clone(),
        collector,
    });

    // Graceful shutdown channel
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            let _ = shutdown_tx.send(true);
        }
    });

    let app = create_router(state);

    let addr: SocketAddr = config.server_addr.parse().map_err(|e| {
        tracing::error!("Invalid server address: {}", e);
        e
    })?;

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    tracing::info!(
        "Starting Mikrotik-Bandwidth-Monitor-Exporter on http://{}",
        addr
    );
    tracing::info!("Endpoints:");
    tracing::info!("  - GET /        - Welcome page");
    tracing::info!("  - GET /health  - Health check");
    tracing::info!("  - GET /metrics - Prometheus metrics");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    Ok(())
}

fn setup_tracing() {
    // RUST_LOG wins; fall back to "info"
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
