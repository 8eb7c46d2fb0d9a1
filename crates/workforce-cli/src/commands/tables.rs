//! Table management commands
//!
//! Usage: workforce init | workforce reset

use rusqlite::Connection;
use workforce_store::{EmployeeRepository, ReviewRepository};

/// Create both tables if they do not exist
pub fn init(conn: &Connection) -> Result<(), Box<dyn std::error::Error>> {
    EmployeeRepository::create_table(conn)?;
    ReviewRepository::create_table(conn)?;
    println!("✓ Tables ready");
    Ok(())
}

/// Drop and recreate both tables
///
/// Reviews are dropped first so the foreign key never dangles.
pub fn reset(conn: &Connection) -> Result<(), Box<dyn std::error::Error>> {
    recreate_tables(conn)?;
    println!("✓ Tables reset");
    Ok(())
}

pub(crate) fn recreate_tables(conn: &Connection) -> Result<(), Box<dyn std::error::Error>> {
    ReviewRepository::drop_table(conn)?;
    EmployeeRepository::drop_table(conn)?;
    EmployeeRepository::create_table(conn)?;
    ReviewRepository::create_table(conn)?;
    Ok(())
}
