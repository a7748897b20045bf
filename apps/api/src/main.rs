mod analysis;
mod config;
mod errors;
mod models;
mod render;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::AtsAnalyzer;
use crate::config::{Config, StorageBackend};
use crate::render::RenderOptions;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{FileStoragePort, MemoryStoragePort, ResumeStore, StoragePort};

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

    info!("Starting Funda API v{}", env!("CARGO_PKG_VERSION"));

    let port: Arc<dyn StoragePort> = match config.storage_backend {
        StorageBackend::File => Arc::new(FileStoragePort::new(&config.data_dir)),
        StorageBackend::Memory => Arc::new(MemoryStoragePort::new()),
    };
    let store = ResumeStore::load(port, &config.storage_key).await;
    info!(
        "Resume store ready (backend: {}, key: {})",
        store.backend(),
        store.key()
    );

    let analyzer = AtsAnalyzer::new(config.match_policy);
    info!("Keyword match policy: {:?}", analyzer.policy());

    let render_options = RenderOptions {
        condensed_reference_limit: config.condensed_reference_limit,
    };

    let state = AppState {
        store: Arc::new(store),
        analyzer,
        render_options,
        config: config.clone(),
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
