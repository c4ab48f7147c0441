//! In-memory trace store with per-execution locking.
//!
//! # Design
//!
//! - `DashMap<ExecutionId, Arc<RwLock<record>>>`: sharded map, one lock
//!   per execution record. Operations on a given execution are
//!   linearizable through its record lock; unrelated executions never
//!   contend.
//! - Barrier `RwLock<()>`: every normal operation holds it shared.
//!   `delete_all` holds it exclusively, so no reader or writer can
//!   observe a partially cleared store. This is the only operation
//!   that serializes the whole store.
//! - `AtomicU64` creation sequence: breaks `start_time` ties in the
//!   listing order, keeping it total and stable.
//!
//! Readers take a record's read lock and clone a snapshot, so an
//! append is atomic from a reader's perspective: pre- or post-state,
//! never a partial step list.

use chrono::Utc;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use xray_core::{
    Execution, ExecutionId, ExecutionStatus, Result, Step, StepDraft, StepId, TerminalStatus,
    TraceError, Value,
};

/// An execution plus its creation sequence number.
#[derive(Debug)]
struct ExecutionRecord {
    execution: Execution,
    seq: u64,
}

/// Keyed storage for executions and their steps.
///
/// Constructed once at process start and shared (via `Arc`) with the
/// recorder and query service. Supports concurrent access across
/// different executions without a global lock.
pub struct TraceStore {
    records: DashMap<ExecutionId, Arc<RwLock<ExecutionRecord>>>,
    /// Shared for all normal operations, exclusive for `delete_all`.
    barrier: RwLock<()>,
    create_seq: AtomicU64,
}

impl TraceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            barrier: RwLock::new(()),
            create_seq: AtomicU64::new(0),
        }
    }

    /// Persist a new execution with status `Running` and no steps.
    ///
    /// The context is set once here and never mutated afterwards.
    pub fn create_execution(&self, context: Value) -> Result<ExecutionId> {
        let _guard = self.barrier.read();

        let now = Utc::now();
        let id = ExecutionId::generate();
        let record = ExecutionRecord {
            execution: Execution {
                execution_id: id.clone(),
                start_time: now,
                end_time: None,
                status: ExecutionStatus::Running,
                error: None,
                context,
                steps: Vec::new(),
                created_at: now,
            },
            seq: self.create_seq.fetch_add(1, Ordering::SeqCst),
        };
        self.records
            .insert(id.clone(), Arc::new(RwLock::new(record)));

        tracing::info!(execution_id = %id, "started execution");
        Ok(id)
    }

    /// Append a step to a running execution.
    ///
    /// Assigns the step id and `timestamp = now`. Fails with
    /// `InvalidState` if the execution is already terminal; the step
    /// sequence is unchanged by a failed attempt.
    pub fn append_step(&self, id: &ExecutionId, draft: StepDraft) -> Result<StepId> {
        let _guard = self.barrier.read();

        let record = self.record(id)?;
        let mut record = record.write();
        if record.execution.status.is_terminal() {
            return Err(TraceError::InvalidState(format!(
                "cannot append step '{}': execution {} is already {}",
                draft.step_name, id, record.execution.status
            )));
        }

        let now = Utc::now();
        let step_id = StepId::generate();
        record.execution.steps.push(Step {
            step_id: step_id.clone(),
            step_name: draft.step_name.clone(),
            timestamp: now,
            input: draft.input,
            output: draft.output,
            reasoning: draft.reasoning,
            metadata: draft.metadata,
            created_at: now,
        });

        tracing::debug!(execution_id = %id, step = %draft.step_name, "recorded step");
        Ok(step_id)
    }

    /// Transition an execution to a terminal status, setting `end_time`.
    ///
    /// Exactly-once: a second completion fails with `InvalidState` and
    /// leaves the first completion's status and `end_time` intact.
    pub fn complete_execution(
        &self,
        id: &ExecutionId,
        status: TerminalStatus,
        error: Option<String>,
    ) -> Result<()> {
        let _guard = self.barrier.read();

        let record = self.record(id)?;
        let mut record = record.write();
        if record.execution.status.is_terminal() {
            return Err(TraceError::InvalidState(format!(
                "execution {} is already {}",
                id, record.execution.status
            )));
        }

        record.execution.status = status.into();
        record.execution.end_time = Some(Utc::now());
        record.execution.error = error;
        Ok(())
    }

    /// Full snapshot of one execution, steps in recording order.
    pub fn get_execution(&self, id: &ExecutionId) -> Result<Execution> {
        let _guard = self.barrier.read();

        let record = self.record(id)?;
        let record = record.read();
        Ok(record.execution.clone())
    }

    /// Snapshots of all executions, ordered by `start_time` descending.
    ///
    /// The ordering is contractual, not incidental. Equal start times
    /// are broken by creation sequence, newest first.
    pub fn list_executions(&self) -> Result<Vec<Execution>> {
        let _guard = self.barrier.read();

        let mut all: Vec<(u64, Execution)> = self
            .records
            .iter()
            .map(|entry| {
                let record = entry.value().read();
                (record.seq, record.execution.clone())
            })
            .collect();
        all.sort_by(|a, b| {
            b.1.start_time
                .cmp(&a.1.start_time)
                .then(b.0.cmp(&a.0))
        });
        Ok(all.into_iter().map(|(_, execution)| execution).collect())
    }

    /// Remove one execution and its steps.
    pub fn delete_execution(&self, id: &ExecutionId) -> Result<()> {
        let _guard = self.barrier.read();

        self.records
            .remove(id)
            .ok_or_else(|| TraceError::NotFound(id.to_string()))?;
        tracing::info!(execution_id = %id, "deleted execution");
        Ok(())
    }

    /// Clear all executions and steps.
    ///
    /// Takes the barrier exclusively: concurrent readers see either the
    /// full pre-clear store or an empty one, never an intermediate.
    pub fn delete_all(&self) -> Result<()> {
        let _guard = self.barrier.write();

        let count = self.records.len();
        self.records.clear();
        tracing::info!(count, "deleted all executions");
        Ok(())
    }

    /// Number of stored executions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store holds no executions.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fetch a record handle, dropping the map shard guard before the
    /// caller takes the record lock.
    fn record(&self, id: &ExecutionId) -> Result<Arc<RwLock<ExecutionRecord>>> {
        self.records
            .get(id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| TraceError::NotFound(id.to_string()))
    }
}

impl Default for TraceStore {
    fn default() -> Self {
        Self::new()
    }
}
