//! Seed command
//!
//! Usage: workforce seed

use rusqlite::Connection;
use workforce_store::{EmployeeRepository, ReviewRepository, SqliteEmployeeLookup};

use super::tables::recreate_tables;

const EMPLOYEES: &[(&str, &str)] = &[
    ("Amir", "Accountant"),
    ("Bola", "Manager"),
    ("Charlie", "Manager"),
    ("Dani", "Benefits Coordinator"),
    ("Hao", "New Hires Coordinator"),
];

// (employee index, year, summary)
const REVIEWS: &[(usize, i64, &str)] = &[
    (1, 2023, "Efficient leader"),
    (1, 2024, "Strong communicator"),
    (3, 2024, "Handles open enrollment with care"),
    (4, 2023, "Onboarding is smoother each quarter"),
];

/// Reset the tables and insert the sample data set
pub fn execute(conn: &Connection) -> Result<(), Box<dyn std::error::Error>> {
    recreate_tables(conn)?;

    let mut employees = EmployeeRepository::new();
    let mut employee_ids = Vec::with_capacity(EMPLOYEES.len());
    for (name, job_title) in EMPLOYEES {
        let employee = employees.create(conn, *name, *job_title)?;
        employee_ids.push(employee.id().ok_or("employee saved without an id")?);
    }

    let lookup = SqliteEmployeeLookup::new(conn);
    let mut reviews = ReviewRepository::new();
    for (employee, year, summary) in REVIEWS {
        reviews.create(conn, *year, *summary, employee_ids[*employee], &lookup)?;
    }

    println!(
        "✓ Seeded {} employees and {} reviews",
        EMPLOYEES.len(),
        REVIEWS.len()
    );
    Ok(())
}
