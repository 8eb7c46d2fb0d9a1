// Integration tests for the employee repository

mod common;

use common::{row_count, seed_employees, setup_test_db};
use workforce_core::{EmployeeLookup, ExErrorKind};
use workforce_store::{EmployeeRepository, ReviewRepository, SqliteEmployeeLookup};

#[test]
fn test_employee_crud_round() {
    let conn = setup_test_db();
    let mut employees = EmployeeRepository::new();

    let id = employees
        .create(&conn, "Lee", "Manager")
        .unwrap()
        .id()
        .unwrap();

    employees.get_mut(id).unwrap().set_job_title("Director").unwrap();
    employees.update(&conn, id).unwrap();

    let mut fresh = EmployeeRepository::new();
    let reloaded = fresh.find_by_id(&conn, id).unwrap().unwrap();
    assert_eq!(reloaded.job_title(), "Director");

    let deleted = employees.delete(&conn, id).unwrap();
    assert_eq!(deleted.id(), None);
    assert!(employees.find_by_id(&conn, id).unwrap().is_none());
}

#[test]
fn test_find_by_name() {
    let conn = setup_test_db();
    let mut employees = EmployeeRepository::new();
    let ids = seed_employees(&conn, &mut employees);

    let sasha = employees.find_by_name(&conn, "Sasha").unwrap().unwrap();
    assert_eq!(sasha.id(), Some(ids[1]));
    assert!(employees.find_by_name(&conn, "Nobody").unwrap().is_none());
}

#[test]
fn test_lookup_sees_saved_employees() {
    let conn = setup_test_db();
    let mut employees = EmployeeRepository::new();
    let ids = seed_employees(&conn, &mut employees);

    let lookup = SqliteEmployeeLookup::new(&conn);
    for id in &ids {
        assert_eq!(lookup.employee_exists(*id), Ok(true));
    }
    assert_eq!(lookup.employee_exists(1000), Ok(false));
}

#[test]
fn test_reviews_for_employee() {
    let conn = setup_test_db();
    let mut employees = EmployeeRepository::new();
    let ids = seed_employees(&conn, &mut employees);
    let lookup = SqliteEmployeeLookup::new(&conn);

    let mut reviews = ReviewRepository::new();
    reviews.create(&conn, 2022, "Good", ids[2], &lookup).unwrap();
    reviews.create(&conn, 2023, "Better", ids[2], &lookup).unwrap();

    let written = employees.reviews(&conn, ids[2], &mut reviews).unwrap();
    assert_eq!(written.len(), 2);

    let err = employees.reviews(&conn, 999, &mut reviews).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
}

#[test]
fn test_get_all_reconciles_once_per_id() {
    let conn = setup_test_db();
    let mut employees = EmployeeRepository::new();
    seed_employees(&conn, &mut employees);

    let first_len = employees.get_all(&conn).unwrap().len();
    let second_len = employees.get_all(&conn).unwrap().len();
    assert_eq!(first_len, 3);
    assert_eq!(second_len, 3);
    assert_eq!(employees.identity_map().len(), 3);
}

#[test]
fn test_delete_of_uncached_employee_keeps_employee_and_reviews() {
    let conn = setup_test_db();
    let mut employees = EmployeeRepository::new();
    let ids = seed_employees(&conn, &mut employees);
    let lookup = SqliteEmployeeLookup::new(&conn);
    let mut reviews = ReviewRepository::new();
    reviews.create(&conn, 2024, "Still here", ids[0], &lookup).unwrap();

    let mut other = EmployeeRepository::new();
    let err = other.delete(&conn, ids[0]).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(row_count(&conn, "employees"), 3);
    assert_eq!(row_count(&conn, "reviews"), 1);
}
