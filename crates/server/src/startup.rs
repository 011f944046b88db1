use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use common::env::ensure_data_dir;
use service::{assets::HttpAssetService, users::FileUserStore};

use crate::{routes, state::AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Build the default collaborators: JSON-file user store and HTTP asset client.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<AppState> {
    ensure_data_dir(&cfg.storage.data_path).await?;
    let store = Arc::new(FileUserStore::open(&cfg.storage.data_path).await?);
    let assets = HttpAssetService::new(&cfg.assets.base_url, Duration::from_secs(cfg.assets.timeout_secs))?;
    info!(data_path = %cfg.storage.data_path, assets_base_url = %cfg.assets.base_url, "collaborators ready");
    Ok(AppState::new(store.clone(), store, Arc::new(assets)))
}

pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: build the app and serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app = build_app(state);

    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
