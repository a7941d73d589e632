//! HTTP surface: the search proxy plus the frontend assets.

pub mod proxy;

use std::path::Path;

use axum::{routing::post, Router};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::client::JiraClient;
use crate::config::{RunMode, ServerConfig};
use crate::constants::PROXY_SEARCH_ROUTE;
use crate::error::DashboardResult;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub client: JiraClient,
}

/// Routes that do not touch the filesystem.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route(
            PROXY_SEARCH_ROUTE,
            post(proxy::search).fallback(proxy::method_not_allowed),
        )
        .with_state(state)
}

/// Full application: API routes, then the asset directory with an
/// `index.html` fallback for client-side routes.
pub fn app(state: AppState, assets: &Path, mode: RunMode) -> Router {
    let assets_service = ServeDir::new(assets).fallback(ServeFile::new(assets.join("index.html")));
    let router = api_router(state)
        .fallback_service(assets_service)
        .layer(TraceLayer::new_for_http());

    match mode {
        RunMode::Development => router.layer(CorsLayer::permissive()),
        RunMode::Production => router,
    }
}

/// Binds the configured address and serves until the process stops.
pub async fn start_server(config: &ServerConfig) -> DashboardResult<()> {
    let addr = config.socket_addr()?;
    let assets = config.assets_dir();
    let state = AppState {
        client: JiraClient::new()?,
    };

    if !assets.is_dir() {
        tracing::warn!("Asset directory {} does not exist", assets.display());
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "Serving {} in {:?} mode on http://{}",
        assets.display(),
        config.mode,
        addr
    );

    axum::serve(listener, app(state, &assets, config.mode)).await?;
    Ok(())
}
