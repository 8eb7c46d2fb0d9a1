#![allow(clippy::unwrap_used, clippy::expect_used)]

use workforce_core::errors::WorkforceError;
use workforce_core::logging_facility::test_capture::init_test_capture;
use workforce_core::{log_op_end, log_op_error, log_op_start};
use workforce_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, review_id = 4);

    let starts: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .collect();

    assert_eq!(starts.len(), 1);
    assert_eq!(starts[0].review_id, Some(4));
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let ends: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(ends.len(), 1);
    assert_eq!(ends[0].duration_ms, Some(42));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = WorkforceError::ReviewNotFound { review_id: 9 };
    log_op_error!(op_name, err, duration_ms = 10);

    let errors: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].fields.get("err.code"),
        Some(&"ERR_NOT_FOUND".to_string())
    );
    assert_eq!(errors[0].level, tracing::Level::ERROR);
}

#[test]
fn test_component_is_module_path() {
    let capture = init_test_capture();
    let op_name = "test_component_unique_4";

    log_op_start!(op_name);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].component.as_deref(),
        Some("logging_facility_tests")
    );
}

#[test]
fn test_log_op_error_keeps_trailing_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_5";

    let err = WorkforceError::EmployeeNotFound { employee_id: 21 };
    log_op_error!(op_name, err, duration_ms = 2, employee_id = 21);

    assert_eq!(capture.error_codes(op_name), vec!["ERR_NOT_FOUND".to_string()]);
    let events = capture.events_for_op(op_name);
    assert_eq!(events[0].employee_id, Some(21));
}
