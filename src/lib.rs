//! # X-Ray
//!
//! Execution trace recorder for multi-stage decision pipelines.
//!
//! X-Ray records what a pipeline did and why: each execution is an
//! ordered sequence of steps, and every step carries its inputs,
//! outputs, and a mandatory reasoning string explaining the decision
//! made at that stage. Traces are queryable while the execution is
//! still running.
//!
//! ## Quick Start
//!
//! ```
//! use xraytrace::prelude::*;
//!
//! let xray = XRay::new();
//!
//! // Record an execution
//! let handle = xray.recorder.begin(Value::object([
//!     ("pipeline", Value::from("demo")),
//! ]))?;
//! xray.recorder.record(
//!     &handle,
//!     "apply_filters",
//!     Value::object([("candidates", Value::from(50))]),
//!     Value::object([("passed", Value::from(12))]),
//!     "Filtered 50 candidates down to 12 by price and rating",
//!     None,
//! )?;
//! xray.recorder.finish(&handle, TerminalStatus::Completed)?;
//!
//! // Query it back
//! let detail = xray.query.get_detail(handle.id())?;
//! assert_eq!(detail.execution.steps.len(), 1);
//! # Ok::<(), xraytrace::TraceError>(())
//! ```
//!
//! ## Layers
//!
//! - [`xray_core`] - trace model: ids, statuses, [`Execution`], [`Step`], [`Value`]
//! - [`xray_store`] - in-memory concurrent [`TraceStore`]
//! - [`xray_api`] - [`ExecutionRecorder`] (write path) and [`QueryService`] (read path)
//!
//! The HTTP server over this stack lives in the `xray-server` crate.

#![warn(missing_docs)]

pub mod prelude;

use std::sync::Arc;

pub use xray_api::{
    format_duration, ExecutionDetail, ExecutionHandle, ExecutionRecorder, ExecutionSummary,
    QueryService,
};
pub use xray_core::{
    Execution, ExecutionId, ExecutionStatus, Result, Step, StepDraft, StepId, TerminalStatus,
    Timestamp, TraceError, Value,
};
pub use xray_store::TraceStore;

/// Top-level handle bundling the write and read paths over one store.
pub struct XRay {
    store: Arc<TraceStore>,
    /// Write path: begin executions, record steps, finish or fail.
    pub recorder: ExecutionRecorder,
    /// Read path: summaries, details, deletion.
    pub query: QueryService,
}

impl XRay {
    /// Create a fresh in-memory trace recorder.
    pub fn new() -> Self {
        let store = Arc::new(TraceStore::new());
        Self {
            recorder: ExecutionRecorder::new(Arc::clone(&store)),
            query: QueryService::new(Arc::clone(&store)),
            store,
        }
    }

    /// The underlying store, for callers wiring their own facades.
    pub fn store(&self) -> &Arc<TraceStore> {
        &self.store
    }
}

impl Default for XRay {
    fn default() -> Self {
        Self::new()
    }
}
