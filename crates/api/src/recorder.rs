//! Instrumentation facade for pipeline code.

use std::sync::Arc;

use xray_core::{ExecutionId, Result, StepDraft, StepId, TerminalStatus, Value};
use xray_store::TraceStore;

/// Handle bound to one execution, returned by [`ExecutionRecorder::begin`]
/// and passed to every subsequent `record`/`finish` call.
#[derive(Debug, Clone)]
pub struct ExecutionHandle {
    id: ExecutionId,
}

impl ExecutionHandle {
    /// The execution this handle is bound to.
    pub fn id(&self) -> &ExecutionId {
        &self.id
    }
}

/// The recording protocol the pipeline programs against.
///
/// State machine per execution: `Running --record--> Running`,
/// `Running --finish--> {Completed, Failed}`. Calling `record` or
/// `finish` on a terminal execution is a programming error and fails
/// with `InvalidState` immediately; a silently dropped step would make
/// the trace misleading.
pub struct ExecutionRecorder {
    store: Arc<TraceStore>,
}

impl ExecutionRecorder {
    /// Create a recorder over a shared store.
    pub fn new(store: Arc<TraceStore>) -> Self {
        Self { store }
    }

    /// Start a new execution with the given initiating context.
    pub fn begin(&self, context: Value) -> Result<ExecutionHandle> {
        let id = self.store.create_execution(context)?;
        Ok(ExecutionHandle { id })
    }

    /// Record one pipeline stage.
    ///
    /// `reasoning` is mandatory and caller-supplied for every step;
    /// the recorder never synthesizes it.
    pub fn record(
        &self,
        handle: &ExecutionHandle,
        step_name: impl Into<String>,
        input: Value,
        output: Value,
        reasoning: impl Into<String>,
        metadata: Option<Value>,
    ) -> Result<StepId> {
        self.store.append_step(
            &handle.id,
            StepDraft {
                step_name: step_name.into(),
                input,
                output,
                reasoning: reasoning.into(),
                metadata,
            },
        )
    }

    /// Terminate the execution with the given status.
    pub fn finish(&self, handle: &ExecutionHandle, status: TerminalStatus) -> Result<()> {
        self.store.complete_execution(&handle.id, status, None)?;
        tracing::info!(execution_id = %handle.id, ?status, "finished execution");
        Ok(())
    }

    /// Terminate the execution as `Failed`, recording the reason.
    pub fn fail(&self, handle: &ExecutionHandle, reason: impl Into<String>) -> Result<()> {
        let reason = reason.into();
        self.store
            .complete_execution(&handle.id, TerminalStatus::Failed, Some(reason.clone()))?;
        tracing::error!(execution_id = %handle.id, %reason, "failed execution");
        Ok(())
    }
}
