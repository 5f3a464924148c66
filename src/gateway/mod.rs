//! HTTP gateway: the web-facing interaction shell.
//!
//! Serves the tool catalog, runs tools, and exposes the last cached result
//! per tool so clients can re-render without re-executing. Routes are
//! unauthenticated; the gateway binds to localhost by default.

pub mod api;

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tracing::info;

use crate::catalog::ToolCatalog;
use crate::engine::Dispatcher;

const REQUEST_BODY_LIMIT_BYTES: usize = 64 * 1024;
const REQUEST_TIMEOUT_SECS: u64 = 75;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn ToolCatalog>,
    pub dispatcher: Arc<Dispatcher>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn ToolCatalog>, dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            catalog,
            dispatcher,
            started_at: Utc::now(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/status", get(api::handle_status))
        .route("/api/tools", get(api::handle_tools))
        .route("/api/tools/{id}/run", post(api::handle_run))
        .route("/api/tools/{id}/result", get(api::handle_result))
        .layer(
            ServiceBuilder::new()
                .layer(RequestBodyLimitLayer::new(REQUEST_BODY_LIMIT_BYTES))
                .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_TIMEOUT_SECS))),
        )
        .with_state(state)
}

pub async fn serve(state: AppState, host: &str, port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "gateway listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
