// Boundary logging emitted by repository writes

mod common;

use common::{seed_employees, setup_test_db};
use workforce_core::logging_facility::test_capture::init_test_capture;
use workforce_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use workforce_store::{EmployeeRepository, ReviewRepository, SqliteEmployeeLookup};

#[test]
fn test_review_writes_emit_start_and_end() {
    let capture = init_test_capture();
    let conn = setup_test_db();
    let mut employees = EmployeeRepository::new();
    let ids = seed_employees(&conn, &mut employees);
    let lookup = SqliteEmployeeLookup::new(&conn);

    let mut reviews = ReviewRepository::new();
    let review_id = reviews
        .create(&conn, 2023, "Logged", ids[0], &lookup)
        .unwrap()
        .id()
        .unwrap();
    reviews.update(&conn, review_id).unwrap();
    reviews.delete(&conn, review_id).unwrap();

    for op in ["review_save", "review_update", "review_delete"] {
        capture.assert_event_exists(op, EVENT_START);
        capture.assert_event_exists(op, EVENT_END);
    }
}

#[test]
fn test_failed_delete_emits_error_event() {
    let capture = init_test_capture();
    let conn = setup_test_db();
    let mut reviews = ReviewRepository::new();

    reviews.delete(&conn, 4242).unwrap_err();

    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("review_delete")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.fields.get("err.code").map(String::as_str) == Some("ERR_NOT_FOUND")
    });
    assert!(errors >= 1);
}

#[test]
fn test_uncached_delete_reports_not_found_for_that_review() {
    let capture = init_test_capture();
    let conn = setup_test_db();
    let mut employees = EmployeeRepository::new();
    let ids = seed_employees(&conn, &mut employees);
    let lookup = SqliteEmployeeLookup::new(&conn);

    let mut writer = ReviewRepository::new();
    let review_id = writer
        .create(&conn, 2022, "Not mine to delete", ids[1], &lookup)
        .unwrap()
        .id()
        .unwrap();

    ReviewRepository::new().delete(&conn, review_id).unwrap_err();

    assert!(capture
        .error_codes("review_delete")
        .iter()
        .any(|code| code == "ERR_NOT_FOUND"));
    assert!(capture.events_for_review(review_id).iter().any(|e| {
        e.is_error_of("review_delete") && e.duration_ms.is_some()
    }));
}

#[test]
fn test_get_all_reports_reconciled_row_count() {
    let capture = init_test_capture();
    let conn = setup_test_db();
    let mut employees = EmployeeRepository::new();
    let ids = seed_employees(&conn, &mut employees);
    let lookup = SqliteEmployeeLookup::new(&conn);

    let mut reviews = ReviewRepository::new();
    for summary in ["one", "two", "three", "four", "five", "six", "seven"] {
        reviews.create(&conn, 2021, summary, ids[2], &lookup).unwrap();
    }
    reviews.get_all(&conn).unwrap();

    assert!(capture.count_events(|e| e.row_count == Some(7)) >= 1);
}
