//! HTTP JSON API server for the trace recorder.
//!
//! Exposes the recorder/query stack as an async HTTP service using
//! `axum` + `tokio`. CORS is permissive since the UI is served from a
//! separate origin during development.
//!
//! Endpoints:
//! - GET    /health                              - Liveness probe
//! - GET    /api/executions                      - Execution summaries, start-time descending
//! - GET    /api/executions/{execution_id}       - Full execution detail
//! - DELETE /api/executions/{execution_id}       - Delete one execution
//! - DELETE /api/executions                      - Clear all executions
//! - POST   /api/demo/run-competitor-selection   - Run the instrumented demo pipeline
//!
//! All responses use Content-Type: application/json.

mod handlers;
mod state;

pub use state::AppState;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};

use self::handlers::{
    handle_delete_all, handle_delete_execution, handle_get_execution, handle_health,
    handle_list_executions, handle_not_found, handle_run_demo,
};

/// Construct a JSON error response with the given status code and message.
fn json_error(status: StatusCode, message: &str) -> impl IntoResponse {
    (status, Json(serde_json::json!({"error": message})))
}

/// Build the application router over shared state.
///
/// Split out from [`start_server`] so tests can drive the router
/// directly without binding a socket.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route(
            "/api/executions",
            get(handle_list_executions).delete(handle_delete_all),
        )
        .route(
            "/api/executions/{execution_id}",
            get(handle_get_execution).delete(handle_delete_execution),
        )
        .route(
            "/api/demo/run-competitor-selection",
            post(handle_run_demo),
        )
        .fallback(handle_not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Start the HTTP server on the given port.
pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState::new());
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "trace server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
