//! Router assembly and top-level server wiring.
//!
//! This module:
//! - builds the axum router for the `/api` surface,
//! - binds the configured address,
//! - serves until the process is stopped.
//!
//! Browser clients load from a different origin than the API, hence
//! the permissive CORS layer.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::config::Config;
use crate::gateway::TradingGateway;
use crate::routes;
use crate::sim::SimGateway;

/// Shared handler state: the gateway behind the REST surface.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn TradingGateway>,
}

/// Build the `/api` router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/account", get(routes::account))
        .route("/api/orders", get(routes::orders))
        .route("/api/history", get(routes::history))
        .route("/api/statistics", get(routes::statistics))
        .route("/api/orders/:id/close", post(routes::close_order))
        .route("/api/health", get(routes::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run the server with the given configuration, backed by the
/// simulated gateway.
pub async fn run(config: Config) -> Result<()> {
    let state = AppState {
        gateway: Arc::new(SimGateway::seeded()),
    };
    let app = router(state);

    let addr = config.socket_addr_string();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on http://{addr}/api");

    axum::serve(listener, app)
        .await
        .context("server terminated")?;
    Ok(())
}
