// Web server entry point
//
// Usage: cargo run --bin server

use anyhow::Context;
use spirio::{create_router, AppState, Catalog};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // Default log level: info for our crate, warn for others
                "spirio=info,tower_http=debug,axum=debug,warn".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Spirio...");

    // Configuration from environment variables
    let catalog_path = std::env::var("CATALOG_PATH").ok();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    tracing::info!("Configuration:");
    tracing::info!(
        "  CATALOG_PATH: {}",
        catalog_path.as_deref().unwrap_or("(embedded seed)")
    );
    tracing::info!("  PORT: {}", port);

    // Load and validate the catalog
    let catalog = match &catalog_path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("failed to load catalog from {}", path))?,
        None => Catalog::load_embedded().context("embedded seed catalog is invalid")?,
    };
    tracing::info!("Catalog loaded: {} plants", catalog.len());

    // Create router with all endpoints and middleware
    let state = AppState::new(catalog);
    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
