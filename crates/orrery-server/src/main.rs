//! orrery-server binary — REST API over the exoplanet catalog.

mod config;
mod routes;

use anyhow::{Context, Result};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use config::ServerConfig;
use orrery_core::PlanetTable;
use routes::{api_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ServerConfig::from_env()?;
    info!("Starting orrery-server on port {}", config.port);

    // One-time load; any failure here aborts startup.
    let table = PlanetTable::load(&config.dataset_path)
        .with_context(|| format!("failed to load catalog '{}'", config.dataset_path))?;
    info!("Catalog ready ({} planets)", table.len());

    let state = Arc::new(AppState { table });
    let app = api_router(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
