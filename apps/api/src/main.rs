mod config;
mod errors;
mod jobs;
mod models;
mod review;
mod routes;
mod state;
mod timestamp;

use anyhow::{Context, Result};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::jobs::JobCatalog;
use crate::review::reviewer::MockReviewer;
use crate::routes::{build_router, cors_layer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{crate_name}={level},tower_http={level}",
                crate_name = env!("CARGO_CRATE_NAME"),
                level = &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url = config.base_url();
    println!("🚀 Starting OpenHire Mock Backend...");
    println!("📍 URL: {base_url}");
    println!("📚 Docs: {base_url}/docs");
    println!("❤️ Health: {base_url}/health");

    let jobs = JobCatalog::seeded();
    info!(
        "Starting OpenHire Mock API v{} with {} seeded jobs",
        env!("CARGO_PKG_VERSION"),
        jobs.all().len()
    );

    let state = AppState {
        jobs: Arc::new(jobs),
        reviewer: Arc::new(MockReviewer),
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&config.cors_origins)),
    );

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
