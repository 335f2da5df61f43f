//! End-to-end trigger scenarios.

use std::sync::Arc;

use hookline_core::ErrorKind;
use hookline_core::config::hooks::AfterPhaseSource;
use hookline_hooks::{SharedHook, hook_fn, work_fn};

use crate::helpers::{Payload, Record, TestApp, failing_step, noop_work, step};

/// Hook that yields to the runtime between recording start and end.
fn slow_step(name: &'static str) -> SharedHook<Record, Payload> {
    hook_fn(name, move |_, data: &mut Payload| {
        Box::pin(async move {
            data.steps.push(format!("{name}:start"));
            tokio::task::yield_now().await;
            data.steps.push(format!("{name}:end"));
            Ok(())
        })
    })
}

#[tokio::test]
async fn test_empty_pipeline_succeeds() {
    let app = TestApp::new(AfterPhaseSource::After);
    let record = Record::shared("empty");

    let mut data = Payload::default();
    let returned = app
        .trigger
        .trigger(record.clone(), "save", Some(noop_work()), &mut data)
        .await
        .unwrap();

    assert!(Arc::ptr_eq(&returned, &record));
    assert!(data.steps.is_empty());
}

#[tokio::test]
async fn test_hooks_complete_one_at_a_time() {
    let app = TestApp::new(AfterPhaseSource::After);
    for name in ["a", "b", "c"] {
        app.registry.register_before("save", slow_step(name)).await;
    }

    let mut data = Payload::default();
    app.trigger
        .trigger(Record::shared("r"), "save", Some(noop_work()), &mut data)
        .await
        .unwrap();

    assert_eq!(
        data.steps,
        vec!["a:start", "a:end", "b:start", "b:end", "c:start", "c:end"]
    );
}

#[tokio::test]
async fn test_failing_hook_stops_chain_and_work() {
    let app = TestApp::new(AfterPhaseSource::After);
    app.registry.register_before("save", step("a")).await;
    app.registry
        .register_before("save", failing_step("b", "rejected by b"))
        .await;
    app.registry.register_before("save", step("c")).await;
    app.registry.register_after("save", step("after")).await;

    let work = work_fn(|_: &Record, data: &mut Payload| {
        Box::pin(async move {
            data.steps.push("work".to_string());
            Ok(())
        })
    });

    let mut data = Payload::default();
    let err = app
        .trigger
        .trigger(Record::shared("r"), "save", Some(work), &mut data)
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Hook);
    assert_eq!(err.message, "rejected by b");
    assert_eq!(data.steps, vec!["a", "b"]);
}

#[tokio::test]
async fn test_before_hook_result_visible_to_work() {
    let app = TestApp::new(AfterPhaseSource::After);
    app.registry
        .register_before(
            "save",
            hook_fn("mark_seen", |_, data: &mut Payload| {
                Box::pin(async move {
                    data.seen = true;
                    Ok(())
                })
            }),
        )
        .await;

    let work = work_fn(|_: &Record, data: &mut Payload| {
        Box::pin(async move {
            assert!(data.seen);
            data.steps.push("work".to_string());
            Ok(())
        })
    });

    let record = Record::shared("r");
    let mut data = Payload::default();
    let returned = app
        .trigger
        .trigger(record.clone(), "save", Some(work), &mut data)
        .await
        .unwrap();

    assert!(Arc::ptr_eq(&returned, &record));
    assert_eq!(data.steps, vec!["work"]);
}

#[tokio::test]
async fn test_failing_after_hook_surfaces_error() {
    let app = TestApp::new(AfterPhaseSource::After);
    app.registry
        .register_after("save", failing_step("explode", "boom"))
        .await;

    let mut data = Payload::default();
    let err = app
        .trigger
        .trigger(Record::shared("r"), "save", Some(noop_work()), &mut data)
        .await
        .unwrap_err();

    assert_eq!(err.message, "boom");
    assert_eq!(data.steps, vec!["explode"]);
}

#[tokio::test]
async fn test_mirror_before_ignores_after_list() {
    let app = TestApp::new(AfterPhaseSource::MirrorBefore);
    app.registry
        .register_after("save", failing_step("explode", "boom"))
        .await;
    app.registry.register_before("save", step("before")).await;

    let mut data = Payload::default();
    app.trigger
        .trigger(Record::shared("r"), "save", Some(noop_work()), &mut data)
        .await
        .unwrap();

    assert_eq!(data.steps, vec!["before", "before"]);
}

#[tokio::test]
async fn test_validate_uses_entity_capability() {
    let app = TestApp::new(AfterPhaseSource::After);
    app.registry
        .register_before("validate", failing_step("unused", "never runs"))
        .await;
    app.registry
        .register_after("validate", failing_step("unused", "never runs"))
        .await;

    let mut data = Payload::default();
    app.trigger
        .trigger(Record::shared("r"), "validate", Some(noop_work()), &mut data)
        .await
        .unwrap();

    assert_eq!(data.steps, vec!["before_validation", "after_validation"]);
}
