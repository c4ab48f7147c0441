//! Read-side projections: summaries, details, durations, wire shape.

use crate::helpers::{ctx, fresh, record_named};
use xraytrace::prelude::*;

#[test]
fn test_running_execution_reports_in_progress() {
    let xray = fresh();
    let handle = xray.recorder.begin(ctx("p")).unwrap();
    record_named(&xray, &handle, "s1");

    let summaries = xray.query.list_summaries().unwrap();
    assert_eq!(summaries[0].duration, "In progress");
    assert_eq!(summaries[0].status, ExecutionStatus::Running);
    assert_eq!(summaries[0].step_count, 1);
}

#[test]
fn test_detail_returns_full_steps() {
    let xray = fresh();
    let handle = xray.recorder.begin(ctx("p")).unwrap();
    record_named(&xray, &handle, "fetch");
    record_named(&xray, &handle, "filter");
    xray.recorder.finish(&handle, TerminalStatus::Completed).unwrap();

    let detail = xray.query.get_detail(handle.id()).unwrap();
    assert_eq!(detail.execution.steps.len(), 2);
    assert_eq!(detail.execution.status, ExecutionStatus::Completed);
    assert_ne!(detail.duration, "In progress");
}

#[test]
fn test_detail_wire_shape_uses_camel_case() {
    let xray = fresh();
    let handle = xray.recorder.begin(ctx("p")).unwrap();
    record_named(&xray, &handle, "s");
    xray.recorder.finish(&handle, TerminalStatus::Completed).unwrap();

    let detail = xray.query.get_detail(handle.id()).unwrap();
    let json = serde_json::to_value(&detail).unwrap();

    assert_eq!(json["executionId"], handle.id().as_str());
    assert_eq!(json["status"], "COMPLETED");
    assert!(json.get("startTime").is_some());
    assert!(json.get("endTime").is_some());
    assert!(json.get("createdAt").is_some());
    let step = &json["steps"][0];
    assert!(step.get("stepId").is_some());
    assert_eq!(step["stepName"], "s");
    assert!(step.get("reasoning").is_some());
    // Unset optionals are omitted, not null
    assert!(json.get("error").is_none());
    assert!(step.get("metadata").is_none());
}

#[test]
fn test_summary_wire_shape() {
    let xray = fresh();
    let handle = xray.recorder.begin(ctx("p")).unwrap();
    record_named(&xray, &handle, "s");

    let summaries = xray.query.list_summaries().unwrap();
    let json = serde_json::to_value(&summaries[0]).unwrap();
    assert_eq!(json["executionId"], handle.id().as_str());
    assert_eq!(json["stepCount"], 1);
    assert_eq!(json["status"], "RUNNING");
    assert_eq!(json["duration"], "In progress");
    assert!(json.get("endTime").is_none());
    assert!(json.get("steps").is_none());
}

#[test]
fn test_unknown_execution_is_not_found() {
    let xray = fresh();
    let err = xray
        .query
        .get_detail(&ExecutionId::from("exec_00000000"))
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("exec_00000000"));
}

#[test]
fn test_failed_execution_detail_carries_error() {
    let xray = fresh();
    let handle = xray.recorder.begin(ctx("p")).unwrap();
    xray.recorder.fail(&handle, "no qualified products found").unwrap();

    let detail = xray.query.get_detail(handle.id()).unwrap();
    let json = serde_json::to_value(&detail).unwrap();
    assert_eq!(json["status"], "FAILED");
    assert_eq!(json["error"], "no qualified products found");
}
