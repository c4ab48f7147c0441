//! Step ordering within an execution and listing order across
//! executions.

use crate::helpers::{ctx, fresh, record_named};
use xraytrace::prelude::*;

#[test]
fn test_steps_keep_recording_order() {
    let xray = fresh();
    let handle = xray.recorder.begin(ctx("p")).unwrap();

    let names: Vec<String> = (0..10).map(|i| format!("stage_{i}")).collect();
    for name in &names {
        record_named(&xray, &handle, name);
    }

    let exec = xray.store().get_execution(handle.id()).unwrap();
    let recorded: Vec<&str> = exec.steps.iter().map(|s| s.step_name.as_str()).collect();
    assert_eq!(recorded, names.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn test_step_timestamps_are_monotonic_in_order() {
    let xray = fresh();
    let handle = xray.recorder.begin(ctx("p")).unwrap();
    for i in 0..5 {
        record_named(&xray, &handle, &format!("s{i}"));
    }

    let exec = xray.store().get_execution(handle.id()).unwrap();
    for pair in exec.steps.windows(2) {
        assert!(pair[0].timestamp <= pair[1].timestamp);
    }
}

#[test]
fn test_list_returns_most_recent_first() {
    let xray = fresh();
    let first = xray.recorder.begin(ctx("first")).unwrap();
    let second = xray.recorder.begin(ctx("second")).unwrap();
    let third = xray.recorder.begin(ctx("third")).unwrap();

    let summaries = xray.query.list_summaries().unwrap();
    let ids: Vec<&str> = summaries.iter().map(|s| s.execution_id.as_str()).collect();
    assert_eq!(ids, vec![third.id().as_str(), second.id().as_str(), first.id().as_str()]);
}

#[test]
fn test_list_order_is_stable_for_same_start_time() {
    // Creations land within the same millisecond routinely; the tie
    // breaks toward the later creation.
    let xray = fresh();
    let handles: Vec<_> = (0..20)
        .map(|i| xray.recorder.begin(ctx(&format!("p{i}"))).unwrap())
        .collect();

    let summaries = xray.query.list_summaries().unwrap();
    assert_eq!(summaries.len(), handles.len());
    let expected: Vec<&str> = handles.iter().rev().map(|h| h.id().as_str()).collect();
    let actual: Vec<&str> = summaries.iter().map(|s| s.execution_id.as_str()).collect();
    assert_eq!(actual, expected);
}
