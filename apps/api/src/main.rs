mod config;
mod errors;
mod matching;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::matching::catalog::load_catalog;
use crate::matching::scoring::WeightedMatchScorer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Load job catalog (empty when JOBS_FILE is unset)
    let catalog = match &config.jobs_file {
        Some(path) => load_catalog(path)?,
        None => {
            info!("JOBS_FILE not set; starting with an empty job catalog");
            Vec::new()
        }
    };

    // Initialize scorer (WeightedMatchScorer by default)
    let scorer = Arc::new(WeightedMatchScorer::new(config.matching.clone()));
    info!(
        "Match weights: skills={} location={} salary={} job_type={} (skill match: {:?})",
        config.matching.weights.skills,
        config.matching.weights.location,
        config.matching.weights.salary,
        config.matching.weights.job_type,
        config.matching.skill_match,
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        scorer,
        catalog: Arc::new(catalog),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the SPA host once it is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
