// File-backed store: configuration, reopen, and per-repository identity maps

use tempfile::TempDir;
use workforce_core::Review;
use workforce_store::{EmployeeRepository, ReviewRepository, SqliteEmployeeLookup, StoreConfig};

#[test]
fn test_open_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("company.db");

    let config = StoreConfig::new(&path);
    let _conn = config.open().unwrap();

    assert!(path.exists());
}

#[test]
fn test_rows_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let config = StoreConfig::new(temp_dir.path().join("company.db"));

    let review_id = {
        let conn = config.open().unwrap();
        EmployeeRepository::create_table(&conn).unwrap();
        ReviewRepository::create_table(&conn).unwrap();

        let mut employees = EmployeeRepository::new();
        let employee_id = employees
            .create(&conn, "Lee", "Manager")
            .unwrap()
            .id()
            .unwrap();

        let lookup = SqliteEmployeeLookup::new(&conn);
        let mut reviews = ReviewRepository::new();
        reviews
            .create(&conn, 2023, "Great work", employee_id, &lookup)
            .unwrap()
            .id()
            .unwrap()
    };

    let conn = config.open().unwrap();
    let mut reviews = ReviewRepository::new();
    let review = reviews.find_by_id(&conn, review_id).unwrap().unwrap();
    assert_eq!(review.summary(), "Great work");
    assert_eq!(review.year(), 2023);
}

#[test]
fn test_separate_repositories_hold_separate_records() {
    let temp_dir = TempDir::new().unwrap();
    let config = StoreConfig::new(temp_dir.path().join("company.db"));
    let conn = config.open().unwrap();
    EmployeeRepository::create_table(&conn).unwrap();
    ReviewRepository::create_table(&conn).unwrap();

    let mut employees = EmployeeRepository::new();
    let employee_id = employees
        .create(&conn, "Kai", "Designer")
        .unwrap()
        .id()
        .unwrap();
    let lookup = SqliteEmployeeLookup::new(&conn);

    let mut first = ReviewRepository::new();
    let review_id = first
        .create(&conn, 2022, "Shared row", employee_id, &lookup)
        .unwrap()
        .id()
        .unwrap();

    let mut second = ReviewRepository::new();
    let a: *const Review = first.find_by_id(&conn, review_id).unwrap().unwrap();
    let b: *const Review = second.find_by_id(&conn, review_id).unwrap().unwrap();

    assert!(!std::ptr::eq(a, b));
    assert_eq!(first.identity_map().len(), 1);
    assert_eq!(second.identity_map().len(), 1);
}
