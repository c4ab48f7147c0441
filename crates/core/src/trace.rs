//! Execution and step records.
//!
//! An [`Execution`] is one end-to-end run of the decision pipeline; it
//! exclusively owns an ordered sequence of [`Step`]s. Steps are never
//! created outside an execution, and the step order is the order they
//! were recorded in.
//!
//! Field names serialize in camelCase: the JSON shapes here are the
//! contract the UI consumes.

use crate::types::{ExecutionId, ExecutionStatus, StepId, Timestamp};
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// One recorded stage of an execution.
///
/// `reasoning` is the payload that matters: a human-readable causal
/// explanation of what the stage decided and why, supplied by the
/// pipeline itself. It is not a log message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Unique within the owning execution.
    pub step_id: StepId,
    /// Identifier of the pipeline stage (e.g. `"apply_filters"`).
    pub step_name: String,
    /// When the step was recorded.
    pub timestamp: Timestamp,
    /// Stage input, opaque to the core.
    pub input: Value,
    /// Stage output, opaque to the core.
    pub output: Value,
    /// Causal explanation of the stage's decision. Mandatory.
    pub reasoning: String,
    /// Stage-specific auxiliary data; its shape belongs to the pipeline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    /// Storage timestamp.
    pub created_at: Timestamp,
}

/// The caller-supplied part of a step, before the store assigns its
/// id and timestamps.
#[derive(Debug, Clone)]
pub struct StepDraft {
    /// Identifier of the pipeline stage.
    pub step_name: String,
    /// Stage input.
    pub input: Value,
    /// Stage output.
    pub output: Value,
    /// Causal explanation. Mandatory, never synthesized by the core.
    pub reasoning: String,
    /// Optional stage-specific auxiliary data.
    pub metadata: Option<Value>,
}

/// One end-to-end run of the decision pipeline.
///
/// Invariants:
/// - `end_time` is present iff `status` is terminal
/// - `steps` is append-only, in recording order, never reordered
/// - `context` is set at creation and immutable thereafter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    /// Unique identifier, assigned at creation.
    pub execution_id: ExecutionId,
    /// Set at creation.
    pub start_time: Timestamp,
    /// Set exactly once, when the execution terminates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<Timestamp>,
    /// Current lifecycle status.
    pub status: ExecutionStatus,
    /// Failure reason, present only for failed executions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Initiating parameters, opaque to the core.
    pub context: Value,
    /// Recorded steps in execution order.
    pub steps: Vec<Step>,
    /// Storage timestamp.
    pub created_at: Timestamp,
}

impl Execution {
    /// Elapsed milliseconds, once the execution has terminated.
    pub fn duration_ms(&self) -> Option<i64> {
        self.end_time
            .map(|end| (end - self.start_time).num_milliseconds())
    }

    /// Number of recorded steps.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}
