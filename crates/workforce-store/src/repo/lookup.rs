//! Store-backed employee existence check

use rusqlite::{Connection, OptionalExtension};
use workforce_core::errors::WorkforceError;
use workforce_core::EmployeeLookup;

/// `EmployeeLookup` that queries the `employees` table directly
///
/// Reads go straight to storage and bypass any identity map, so an employee
/// inserted by another repository instance is still seen.
pub struct SqliteEmployeeLookup<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteEmployeeLookup<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl EmployeeLookup for SqliteEmployeeLookup<'_> {
    fn employee_exists(&self, employee_id: i64) -> workforce_core::Result<bool> {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM employees WHERE id = ?1",
                [employee_id],
                |_| Ok(()),
            )
            .optional();

        match found {
            Ok(found) => Ok(found.is_some()),
            // No employees table means no employees
            Err(rusqlite::Error::SqliteFailure(_, Some(msg)))
                if msg.starts_with("no such table") =>
            {
                Ok(false)
            }
            Err(e) => Err(WorkforceError::LookupFailed {
                message: e.to_string(),
            }),
        }
    }
}
