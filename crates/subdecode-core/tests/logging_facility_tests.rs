#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{FailingAcquirer, MemoryStore, StaticAcquirer};
use subdecode_core::core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ADDED, FIELD_DURATION_MS, FIELD_ERR_CODE,
    FIELD_ERR_KIND, FIELD_REMOVED, FIELD_UNCHANGED,
};
use subdecode_core::errors::{AcquireError, SyncError};
use subdecode_core::logging_facility::test_capture::init_test_capture;
use subdecode_core::{log_op_end, log_op_error, log_op_start, NoopNotifier, Pipeline, Source};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
    let matching = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START)
    });
    assert_eq!(matching, 1, "Should have exactly one start event");
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events();
    let end_events: Vec<_> = events
        .iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = SyncError::from(AcquireError::Connection {
        source_id: "https://unreachable.invalid".to_string(),
        reason: "refused".to_string(),
    });
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events();
    let error_event = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("Should have error event");

    assert_eq!(error_event.field(FIELD_ERR_CODE), Some("ERR_CONNECTION"));
    assert_eq!(error_event.field(FIELD_ERR_KIND), Some("Connection"));
}

#[test]
fn test_run_logs_single_start_and_end() {
    let capture = init_test_capture();
    let source_id = "https://example.com/logging-unique-run";
    let store = MemoryStore::default();
    let acquirer = StaticAcquirer::text("vmess://one\nvmess://two\n");

    Pipeline::new(&acquirer, &store, &NoopNotifier)
        .run(&Source::remote(source_id))
        .unwrap();

    let events = capture.events_for_source(source_id);
    let starts = events
        .iter()
        .filter(|e| e.op.as_deref() == Some("sync_run") && e.event.as_deref() == Some(EVENT_START))
        .count();
    let ends: Vec<_> = events
        .iter()
        .filter(|e| e.op.as_deref() == Some("sync_run") && e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(starts, 1);
    assert_eq!(ends.len(), 1);
    assert_eq!(ends[0].field(FIELD_ADDED), Some("2"));
    assert_eq!(ends[0].field(FIELD_UNCHANGED), Some("0"));
    assert_eq!(ends[0].field(FIELD_REMOVED), Some("0"));
    assert_eq!(ends[0].field("updated"), Some("true"));
}

#[test]
fn test_failed_run_logs_end_error() {
    let capture = init_test_capture();
    let source_id = "https://example.com/logging-unique-failure";
    let store = MemoryStore::default();
    let acquirer = FailingAcquirer(AcquireError::HttpStatus {
        source_id: source_id.to_string(),
        status: 503,
        reason: "503 Service Unavailable".to_string(),
    });

    let result = Pipeline::new(&acquirer, &store, &NoopNotifier).run(&Source::remote(source_id));
    assert!(result.is_err());

    let events = capture.events_for_source(source_id);
    let error_event = events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("Should have error event");
    assert_eq!(error_event.field(FIELD_ERR_CODE), Some("ERR_HTTP_STATUS"));
    assert!(!events
        .iter()
        .any(|e| e.event.as_deref() == Some(EVENT_END)));
}
