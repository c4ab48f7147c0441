//! Concurrent access through the facade: parallel recorders over one
//! execution, parallel executions, and clearing under load.

use std::sync::Arc;
use std::thread;

use crate::helpers::{ctx, fresh};
use xraytrace::prelude::*;

#[test]
fn test_parallel_appends_to_one_execution_all_land() {
    let xray = Arc::new(fresh());
    let handle = xray.recorder.begin(ctx("shared")).unwrap();

    let threads = 8;
    let steps_per_thread = 25;
    let mut joins = Vec::new();
    for t in 0..threads {
        let xray = Arc::clone(&xray);
        let handle = handle.clone();
        joins.push(thread::spawn(move || {
            for i in 0..steps_per_thread {
                xray.recorder
                    .record(
                        &handle,
                        format!("t{t}_s{i}"),
                        Value::Null,
                        Value::Null,
                        "parallel append",
                        None,
                    )
                    .unwrap();
            }
        }));
    }
    for join in joins {
        join.join().unwrap();
    }

    let exec = xray.store().get_execution(handle.id()).unwrap();
    assert_eq!(exec.steps.len(), threads * steps_per_thread);

    // Per-thread subsequences keep their recording order
    for t in 0..threads {
        let seen: Vec<&str> = exec
            .steps
            .iter()
            .map(|s| s.step_name.as_str())
            .filter(|name| name.starts_with(&format!("t{t}_")))
            .collect();
        let expected: Vec<String> = (0..steps_per_thread).map(|i| format!("t{t}_s{i}")).collect();
        assert_eq!(seen, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }
}

#[test]
fn test_parallel_executions_do_not_interfere() {
    let xray = Arc::new(fresh());

    let mut joins = Vec::new();
    for t in 0..8 {
        let xray = Arc::clone(&xray);
        joins.push(thread::spawn(move || {
            let handle = xray.recorder.begin(ctx(&format!("p{t}"))).unwrap();
            for i in 0..10 {
                xray.recorder
                    .record(
                        &handle,
                        format!("s{i}"),
                        Value::Null,
                        Value::Null,
                        "isolated append",
                        None,
                    )
                    .unwrap();
            }
            xray.recorder.finish(&handle, TerminalStatus::Completed).unwrap();
            handle
        }));
    }

    let handles: Vec<ExecutionHandle> = joins.into_iter().map(|j| j.join().unwrap()).collect();
    assert_eq!(xray.query.list_summaries().unwrap().len(), 8);
    for handle in &handles {
        let exec = xray.store().get_execution(handle.id()).unwrap();
        assert_eq!(exec.steps.len(), 10);
        assert_eq!(exec.status, ExecutionStatus::Completed);
    }
}

#[test]
fn test_delete_all_races_with_writers() {
    let xray = Arc::new(fresh());

    let mut joins = Vec::new();
    for t in 0..4 {
        let xray = Arc::clone(&xray);
        joins.push(thread::spawn(move || {
            for i in 0..20 {
                let handle = match xray.recorder.begin(ctx(&format!("w{t}_{i}"))) {
                    Ok(h) => h,
                    Err(_) => continue,
                };
                // The execution may vanish under us; both outcomes are valid
                let _ = xray.recorder.record(
                    &handle,
                    "s",
                    Value::Null,
                    Value::Null,
                    "racing append",
                    None,
                );
            }
        }));
    }
    {
        let xray = Arc::clone(&xray);
        joins.push(thread::spawn(move || {
            for _ in 0..10 {
                xray.query.delete_all().unwrap();
            }
        }));
    }
    for join in joins {
        join.join().unwrap();
    }

    // Every surviving execution is fully readable
    for summary in xray.query.list_summaries().unwrap() {
        let detail = xray.query.get_detail(&summary.execution_id).unwrap();
        assert!(detail.execution.steps.len() <= 1);
    }
}
