//! Read-side shaping of stored executions.
//!
//! No business logic beyond projection and formatting; store errors are
//! forwarded verbatim, with no retries (single process, no transient
//! failures at this layer).

use std::sync::Arc;

use serde::Serialize;
use xray_core::{Execution, ExecutionId, ExecutionStatus, Result, Timestamp};
use xray_store::TraceStore;

/// Lightweight listing entry: everything the list view needs, without
/// the step bodies.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionSummary {
    /// Unique execution identifier.
    pub execution_id: ExecutionId,
    /// When the execution started.
    pub start_time: Timestamp,
    /// When it terminated, if it has.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<Timestamp>,
    /// Current status.
    pub status: ExecutionStatus,
    /// Number of recorded steps.
    pub step_count: usize,
    /// Storage timestamp.
    pub created_at: Timestamp,
    /// Display-ready elapsed time (see [`format_duration`]).
    pub duration: String,
}

/// Full execution detail plus the derived duration string.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionDetail {
    /// The execution, steps included, in recording order.
    #[serde(flatten)]
    pub execution: Execution,
    /// Display-ready elapsed time (see [`format_duration`]).
    pub duration: String,
}

/// Format an execution's elapsed time for display.
///
/// Clients rely on this exact shape:
/// - in flight (no end time) -> `"In progress"`
/// - under a second -> milliseconds, e.g. `"500ms"`
/// - otherwise -> seconds with two decimals, e.g. `"2.50s"`
pub fn format_duration(start: Timestamp, end: Option<Timestamp>) -> String {
    match end {
        None => "In progress".to_string(),
        Some(end) => {
            let ms = (end - start).num_milliseconds();
            if ms < 1000 {
                format!("{ms}ms")
            } else {
                format!("{:.2}s", ms as f64 / 1000.0)
            }
        }
    }
}

/// Read-side API over the trace store.
pub struct QueryService {
    store: Arc<TraceStore>,
}

impl QueryService {
    /// Create a query service over a shared store.
    pub fn new(store: Arc<TraceStore>) -> Self {
        Self { store }
    }

    /// All executions as summaries, most recent start time first.
    ///
    /// Ordering is inherited from the store's listing contract.
    pub fn list_summaries(&self) -> Result<Vec<ExecutionSummary>> {
        let executions = self.store.list_executions()?;
        Ok(executions
            .into_iter()
            .map(|execution| ExecutionSummary {
                duration: format_duration(execution.start_time, execution.end_time),
                execution_id: execution.execution_id,
                start_time: execution.start_time,
                end_time: execution.end_time,
                status: execution.status,
                step_count: execution.steps.len(),
                created_at: execution.created_at,
            })
            .collect())
    }

    /// Full detail for one execution, or `NotFound`.
    pub fn get_detail(&self, id: &ExecutionId) -> Result<ExecutionDetail> {
        let execution = self.store.get_execution(id)?;
        Ok(ExecutionDetail {
            duration: format_duration(execution.start_time, execution.end_time),
            execution,
        })
    }

    /// Remove one execution.
    pub fn delete(&self, id: &ExecutionId) -> Result<()> {
        self.store.delete_execution(id)
    }

    /// Clear all executions.
    pub fn delete_all(&self) -> Result<()> {
        self.store.delete_all()
    }
}
