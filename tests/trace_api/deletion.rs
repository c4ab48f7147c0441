//! Deleting individual executions and clearing the store.

use crate::helpers::{ctx, fresh, record_named};
use xraytrace::prelude::*;

#[test]
fn test_delete_one_leaves_the_rest() {
    let xray = fresh();
    let keep = xray.recorder.begin(ctx("keep")).unwrap();
    let gone = xray.recorder.begin(ctx("gone")).unwrap();

    xray.query.delete(gone.id()).unwrap();

    assert!(xray.query.get_detail(gone.id()).unwrap_err().is_not_found());
    assert!(xray.query.get_detail(keep.id()).is_ok());
    assert_eq!(xray.query.list_summaries().unwrap().len(), 1);
}

#[test]
fn test_delete_unknown_is_not_found() {
    let xray = fresh();
    let err = xray.query.delete(&ExecutionId::from("exec_deadbeef")).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_delete_all_clears_running_and_terminal() {
    let xray = fresh();
    let running = xray.recorder.begin(ctx("running")).unwrap();
    record_named(&xray, &running, "s");
    let done = xray.recorder.begin(ctx("done")).unwrap();
    xray.recorder.finish(&done, TerminalStatus::Completed).unwrap();

    xray.query.delete_all().unwrap();

    assert!(xray.query.list_summaries().unwrap().is_empty());
    assert!(xray.query.get_detail(running.id()).unwrap_err().is_not_found());
    assert!(xray.query.get_detail(done.id()).unwrap_err().is_not_found());
}

#[test]
fn test_store_is_usable_after_delete_all() {
    let xray = fresh();
    xray.recorder.begin(ctx("old")).unwrap();
    xray.query.delete_all().unwrap();

    let fresh_handle = xray.recorder.begin(ctx("new")).unwrap();
    record_named(&xray, &fresh_handle, "s");
    let summaries = xray.query.list_summaries().unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].execution_id, *fresh_handle.id());
}

#[test]
fn test_recording_into_deleted_execution_is_not_found() {
    let xray = fresh();
    let handle = xray.recorder.begin(ctx("p")).unwrap();
    xray.query.delete(handle.id()).unwrap();

    let err = xray
        .recorder
        .record(&handle, "late", Value::Null, Value::Null, "r", None)
        .unwrap_err();
    assert!(err.is_not_found());
}
