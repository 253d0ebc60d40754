mod config;
mod errors;
mod matching;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::matching::calculator::MatchEngine;
use crate::matching::equivalence::{
    BuiltinEquivalenceSource, EquivalenceSource, FileEquivalenceSource,
};
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

    info!("Starting Match API v{}", env!("CARGO_PKG_VERSION"));

    // Load the equivalence table once; it is read-only from here on.
    let source: Box<dyn EquivalenceSource> = match &config.equivalence_table_path {
        Some(path) => Box::new(FileEquivalenceSource::new(path)),
        None => Box::new(BuiltinEquivalenceSource),
    };
    let table = source
        .load()
        .await
        .with_context(|| format!("Failed to load equivalence table ({})", source.describe()))?;
    if table.is_empty() {
        warn!("Equivalence table is empty; only verbatim skill matches will count");
    }
    info!(
        "Equivalence table ready: {} rows from {}",
        table.len(),
        source.describe()
    );

    let state = AppState {
        config: config.clone(),
        scorer: Arc::new(MatchEngine::new(Arc::new(table))),
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
