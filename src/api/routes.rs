//! Router assembly and server loop.

use super::{handlers, state::AppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Builds the activity provider router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/tasktrack/config", get(handlers::config_page))
        .route("/tasktrack/json-params", get(handlers::json_params))
        .route("/tasktrack/deploy", post(handlers::deploy_task))
        .route("/tasktrack/tasks", get(handlers::list_tasks))
        .route("/tasktrack/sort-strategies", get(handlers::sort_strategies))
        .route("/tasktrack/analytics-list", get(handlers::analytics_list))
        .route("/tasktrack/analytics", post(handlers::analytics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the router on `addr` until Ctrl-C is received.
///
/// # Errors
///
/// Returns an I/O error when the listener cannot bind or the server fails.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}
