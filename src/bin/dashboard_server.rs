// Dashboard Server Binary Entry Point
//
// Purpose: Serve the interactive DealCast dashboard with Axum + htmx
// Usage: cargo run --bin dashboard_server

use dealcast::{create_router, AppState, DashboardConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "dealcast=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting dashboard server...");

    // Configuration from environment variables
    // Default: ./data with the two bundled scenarios
    let config = DashboardConfig::from_env()?;

    tracing::info!("Configuration:");
    tracing::info!("  DATA_DIR: {}", config.data_dir.display());
    tracing::info!("  SCENARIOS: {}", config.scenarios.len());
    tracing::info!("  PORT: {}", config.port);

    // Load prospects, snippets and scenarios once; the store is read-only afterwards
    let state = AppState::new(&config)?;
    tracing::info!("Application state initialized successfully");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await?;

    Ok(())
}
