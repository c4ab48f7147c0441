//! Shared server state.

use std::sync::Arc;

use xray_api::{ExecutionRecorder, QueryService};
use xray_store::TraceStore;

/// State shared across request handlers.
///
/// One store owns all trace data; recorder and query service are the
/// only paths to it. Constructed once at startup and torn down at
/// shutdown, never ambient.
pub struct AppState {
    /// Write path, used by the demo pipeline adapter.
    pub recorder: ExecutionRecorder,
    /// Read path, used by the execution endpoints.
    pub query: QueryService,
}

impl AppState {
    /// Build state over a fresh store.
    pub fn new() -> Self {
        let store = Arc::new(TraceStore::new());
        Self {
            recorder: ExecutionRecorder::new(Arc::clone(&store)),
            query: QueryService::new(store),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
