//! Registration behavior through the public API.

use hookline_core::config::hooks::AfterPhaseSource;
use hookline_hooks::Phase;

use crate::helpers::{Payload, Record, TestApp, noop_work, step};

#[tokio::test]
async fn test_register_is_idempotent() {
    let app = TestApp::new(AfterPhaseSource::After);
    let a = step("a");
    let b = step("b");

    assert!(app.registry.register_before("save", a.clone()).await);
    assert!(!app.registry.register_before("save", a).await);
    assert!(app.registry.register_before("save", b).await);
    assert_eq!(app.registry.hook_count("save", Phase::Before).await, 2);
}

#[tokio::test]
async fn test_unregister_round_trip() {
    let app = TestApp::new(AfterPhaseSource::After);
    let a = step("a");

    assert!(!app.registry.unregister_after("save", &a).await);
    assert!(app.registry.register_after("save", a.clone()).await);
    assert!(app.registry.unregister_after("save", &a).await);
    assert!(!app.registry.unregister_after("save", &a).await);
}

#[tokio::test]
async fn test_unregistered_hook_no_longer_runs() {
    let app = TestApp::new(AfterPhaseSource::After);
    let a = step("a");
    let b = step("b");
    app.registry.register_before("save", a.clone()).await;
    app.registry.register_before("save", b).await;
    app.registry.unregister_before("save", &a).await;

    let mut data = Payload::default();
    app.trigger
        .trigger(
            Record::shared("r"),
            "save",
            Some(noop_work()),
            &mut data,
        )
        .await
        .unwrap();

    assert_eq!(data.steps, vec!["b"]);
}
