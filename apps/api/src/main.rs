mod config;
mod errors;
mod guidance;
mod routes;
mod state;

use anyhow::Result;
use guidance_engine::{CareerRanker, RuleBasedRanker};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Guidance API v{}", env!("CARGO_PKG_VERSION"));

    // Load the engine catalog once; every request shares it read-only
    let engine = Arc::new(config.load_engine_config()?);
    let source = config
        .config_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "embedded".to_string());
    info!(
        version = engine.catalog_version(),
        %source,
        careers = engine.careers().len(),
        tracks = engine.tracks().len(),
        "Engine catalog loaded"
    );

    let ranker = Arc::new(RuleBasedRanker);
    info!("Career ranker: {}", ranker.backend());

    let state = AppState {
        config: config.clone(),
        engine,
        ranker,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
