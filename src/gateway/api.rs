//! REST API handlers for the tool shell.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use chrono::Utc;
use tracing::warn;

use super::AppState;
use crate::catalog::ToolDescriptor;
use crate::category::forms;
use crate::engine::ExecutionInput;

/// GET /api/status — shell overview
pub async fn handle_status(State(state): State<AppState>) -> impl IntoResponse {
    let uptime = (Utc::now() - state.started_at).num_seconds().max(0);
    Json(serde_json::json!({
        "catalog_backend": state.catalog.name(),
        "categories": state.dispatcher.registry().len(),
        "cached_results": state.dispatcher.cache().len(),
        "uptime_seconds": uptime,
        "started_at": state.started_at,
    }))
}

/// GET /api/tools — active descriptors, ordered by name.
///
/// A catalog failure is not fatal: it logs and reads as "no tools available".
pub async fn handle_tools(State(state): State<AppState>) -> impl IntoResponse {
    let tools = match state.catalog.fetch_active().await {
        Ok(descriptors) => descriptors,
        Err(err) => {
            warn!(error = %err, "catalog fetch failed");
            Vec::new()
        }
    };
    Json(serde_json::json!({ "tools": tools }))
}

async fn find_tool(
    state: &AppState,
    id: &str,
) -> Result<ToolDescriptor, (StatusCode, Json<serde_json::Value>)> {
    let descriptors = state.catalog.fetch_active().await.map_err(|err| {
        warn!(error = %err, "catalog fetch failed");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({"error": "catalogue indisponible"})),
        )
    })?;

    descriptors
        .into_iter()
        .find(|descriptor| descriptor.id == id)
        .ok_or((
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": format!("outil inconnu : {id}")})),
        ))
}

/// POST /api/tools/{id}/run — validate, dispatch, return the envelope.
pub async fn handle_run(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut input): Json<ExecutionInput>,
) -> impl IntoResponse {
    let tool = match find_tool(&state, &id).await {
        Ok(tool) => tool,
        Err(response) => return response.into_response(),
    };

    let contract = state.dispatcher.registry().form_contract(&tool.category);
    forms::apply_defaults(contract, &mut input);
    if let Err(err) = forms::validate(contract, &input) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({"error": err.to_string()})),
        )
            .into_response();
    }

    let envelope = state.dispatcher.execute(&tool, &input).await;
    Json(envelope).into_response()
}

/// GET /api/tools/{id}/result — last cached envelope, if any.
pub async fn handle_result(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.dispatcher.cache().get(&id) {
        Some(envelope) => Json(envelope).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": format!("aucun résultat pour : {id}")})),
        )
            .into_response(),
    }
}
