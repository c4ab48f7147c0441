//! HTTP route handlers.
//!
//! Thin translation layer: extract, delegate to the query service or
//! demo pipeline, map `TraceError` to a status code. No business logic.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use xray_core::{ExecutionId, TraceError};

use super::state::AppState;
use super::json_error;
use crate::demo;

/// Map a trace error to its API-facing status code.
fn error_response(err: TraceError) -> Response {
    let status = match &err {
        TraceError::NotFound(_) => StatusCode::NOT_FOUND,
        TraceError::InvalidState(_) => StatusCode::CONFLICT,
        TraceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    json_error(status, &err.to_string()).into_response()
}

/// Fallback handler for unmatched routes.
pub(crate) async fn handle_not_found() -> impl IntoResponse {
    json_error(StatusCode::NOT_FOUND, "not found")
}

/// GET /health
pub(crate) async fn handle_health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// GET /api/executions
pub(crate) async fn handle_list_executions(State(state): State<Arc<AppState>>) -> Response {
    match state.query.list_summaries() {
        Ok(summaries) => {
            tracing::info!(count = summaries.len(), "retrieved executions");
            (StatusCode::OK, Json(summaries)).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// GET /api/executions/{execution_id}
pub(crate) async fn handle_get_execution(
    State(state): State<Arc<AppState>>,
    Path(execution_id): Path<String>,
) -> Response {
    let id = ExecutionId::from(execution_id);
    match state.query.get_detail(&id) {
        Ok(detail) => {
            tracing::info!(execution_id = %id, steps = detail.execution.steps.len(), "retrieved execution");
            (StatusCode::OK, Json(detail)).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// DELETE /api/executions/{execution_id}
pub(crate) async fn handle_delete_execution(
    State(state): State<Arc<AppState>>,
    Path(execution_id): Path<String>,
) -> Response {
    let id = ExecutionId::from(execution_id);
    match state.query.delete(&id) {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({"success": true}))).into_response(),
        Err(err) => error_response(err),
    }
}

/// DELETE /api/executions
pub(crate) async fn handle_delete_all(State(state): State<Arc<AppState>>) -> Response {
    match state.query.delete_all() {
        Ok(()) => (StatusCode::OK, Json(serde_json::json!({"success": true}))).into_response(),
        Err(err) => error_response(err),
    }
}

/// POST /api/demo/run-competitor-selection
pub(crate) async fn handle_run_demo(State(state): State<Arc<AppState>>) -> Response {
    tracing::info!("running competitor selection demo");
    match demo::run_competitor_selection(&state.recorder) {
        Ok(execution_id) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "executionId": execution_id,
                "message": "Competitor selection completed successfully",
                "success": true,
            })),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "demo execution failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "executionId": null,
                    "message": format!("Demo failed: {err}"),
                    "success": false,
                })),
            )
                .into_response()
        }
    }
}
