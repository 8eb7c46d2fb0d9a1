use rusqlite::Connection;
use workforce_store::{db, EmployeeRepository, ReviewRepository};

/// In-memory store with both tables created
#[allow(dead_code)]
pub fn setup_test_db() -> Connection {
    let conn = db::open_in_memory().expect("Failed to create in-memory database");
    EmployeeRepository::create_table(&conn).unwrap();
    ReviewRepository::create_table(&conn).unwrap();
    conn
}

/// Insert employees and return their ids in insertion order
#[allow(dead_code)]
pub fn seed_employees(conn: &Connection, employees: &mut EmployeeRepository) -> Vec<i64> {
    [("Lee", "Manager"), ("Sasha", "Engineer"), ("Kai", "Designer")]
        .into_iter()
        .map(|(name, title)| employees.create(conn, name, title).unwrap().id().unwrap())
        .collect()
}

#[allow(dead_code)]
pub fn row_count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
        row.get(0)
    })
    .unwrap()
}
