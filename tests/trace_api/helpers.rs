//! Shared helpers for the trace API suite.

use xraytrace::prelude::*;

/// Fresh in-memory recorder stack.
pub fn fresh() -> XRay {
    XRay::new()
}

/// Minimal initiating context naming the pipeline.
pub fn ctx(pipeline: &str) -> Value {
    Value::object([("pipeline", Value::from(pipeline))])
}

/// Record a step whose payloads do not matter to the test.
pub fn record_named(xray: &XRay, handle: &ExecutionHandle, name: &str) -> StepId {
    xray.recorder
        .record(
            handle,
            name,
            Value::Null,
            Value::Null,
            format!("recorded {name}"),
            None,
        )
        .unwrap()
}
