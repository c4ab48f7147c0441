//! Identifier, timestamp, and status types for the trace model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp used across the trace model. Serializes as ISO-8601.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Short hex prefix of a fresh v4 UUID, used by both id types.
fn short_uuid() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// Unique identifier of one pipeline execution.
///
/// Format: `exec_` followed by 8 hex characters (e.g. `exec_3fa85f64`).
/// Assigned at creation, immutable for the life of the execution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecutionId(String);

impl ExecutionId {
    /// Allocate a fresh execution id.
    pub fn generate() -> Self {
        Self(format!("exec_{}", short_uuid()))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ExecutionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ExecutionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for ExecutionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of one recorded step, unique within its execution.
///
/// Format: `step_` followed by 8 hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(String);

impl StepId {
    /// Allocate a fresh step id.
    pub fn generate() -> Self {
        Self(format!("step_{}", short_uuid()))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle status of an execution.
///
/// Starts `Running`, transitions to a terminal state exactly once.
/// Wire form is `"RUNNING" | "COMPLETED" | "FAILED"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionStatus {
    /// Execution is in flight; steps may still be appended.
    Running,
    /// Execution finished successfully. Terminal.
    Completed,
    /// Execution finished with an error. Terminal.
    Failed,
}

impl ExecutionStatus {
    /// Whether this status permits no further transitions or appends.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ExecutionStatus::Running)
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExecutionStatus::Running => "RUNNING",
            ExecutionStatus::Completed => "COMPLETED",
            ExecutionStatus::Failed => "FAILED",
        };
        f.write_str(s)
    }
}

/// The two states an execution may terminate in.
///
/// A separate type so callers of `complete`/`finish` cannot pass
/// `Running` and re-open an execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalStatus {
    /// Finished successfully.
    Completed,
    /// Finished with an error.
    Failed,
}

impl From<TerminalStatus> for ExecutionStatus {
    fn from(status: TerminalStatus) -> Self {
        match status {
            TerminalStatus::Completed => ExecutionStatus::Completed,
            TerminalStatus::Failed => ExecutionStatus::Failed,
        }
    }
}
