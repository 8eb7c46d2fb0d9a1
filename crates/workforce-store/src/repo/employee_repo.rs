//! SQLite repository for Employees

#![allow(clippy::result_large_err)]

use std::time::Instant;

use crate::errors::{from_rusqlite, statement_error, Result};
use crate::repo::ReviewRepository;
use rusqlite::{Connection, OptionalExtension, Params, Row};
use workforce_core::errors::WorkforceError;
use workforce_core::{log_op_end, log_op_error, log_op_start};
use workforce_core::{Employee, Identified, IdentityMap, Review};

const CREATE_TABLE_SQL: &str = "
    CREATE TABLE IF NOT EXISTS employees (
        id INTEGER PRIMARY KEY,
        name TEXT,
        job_title TEXT
    )";

const SELECT_COLUMNS: &str = "SELECT id, name, job_title FROM employees";

/// A raw `employees` row, before reconciliation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow {
    pub id: i64,
    pub name: String,
    pub job_title: String,
}

impl EmployeeRow {
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            job_title: row.get(2)?,
        })
    }
}

/// Repository for employees, owning the employee identity map
#[derive(Debug, Default)]
pub struct EmployeeRepository {
    employees: IdentityMap<Employee>,
}

impl EmployeeRepository {
    pub fn new() -> Self {
        Self {
            employees: IdentityMap::new(),
        }
    }

    pub fn identity_map(&self) -> &IdentityMap<Employee> {
        &self.employees
    }

    pub fn get(&self, employee_id: i64) -> Option<&Employee> {
        self.employees.get(employee_id)
    }

    pub fn get_mut(&mut self, employee_id: i64) -> Option<&mut Employee> {
        self.employees.get_mut(employee_id)
    }

    /// Create the `employees` table if it does not exist
    pub fn create_table(conn: &Connection) -> Result<()> {
        conn.execute(CREATE_TABLE_SQL, [])
            .map_err(|e| statement_error("employee_create_table", e))?;
        Ok(())
    }

    /// Drop the `employees` table if it exists
    pub fn drop_table(conn: &Connection) -> Result<()> {
        conn.execute("DROP TABLE IF EXISTS employees", [])
            .map_err(|e| statement_error("employee_drop_table", e))?;
        Ok(())
    }

    /// Insert a transient employee and register it in the identity map
    ///
    /// # Errors
    /// * `ConstraintViolation` - If the employee already has an id
    /// * `Persistence` - If the insert fails
    pub fn save(&mut self, conn: &Connection, employee: Employee) -> Result<&Employee> {
        log_op_start!("employee_save");
        let start = Instant::now();

        let employee_id = self.save_impl(conn, employee).map_err(|e| {
            log_op_error!(
                "employee_save",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "employee_save",
            duration_ms = start.elapsed().as_millis() as u64,
            employee_id = employee_id
        );

        self.cached(employee_id)
    }

    fn save_impl(&mut self, conn: &Connection, mut employee: Employee) -> Result<i64> {
        if let Some(id) = employee.id() {
            return Err(WorkforceError::AlreadyPersisted {
                entity: Employee::ENTITY.to_string(),
                id,
            }
            .into());
        }

        conn.execute(
            "INSERT INTO employees (name, job_title) VALUES (?1, ?2)",
            rusqlite::params![employee.name(), employee.job_title()],
        )
        .map_err(|e| statement_error("employee_insert", e))?;

        let employee_id = conn.last_insert_rowid();
        employee.set_id(Some(employee_id));
        self.employees.insert(employee)?;

        Ok(employee_id)
    }

    /// Write the cached record's current values to its row
    ///
    /// # Errors
    /// * `NotFound` - If no employee with this id is cached
    /// * `Persistence` - If the update fails
    pub fn update(&self, conn: &Connection, employee_id: i64) -> Result<()> {
        log_op_start!("employee_update", employee_id = employee_id);
        let start = Instant::now();

        let result = self.cached(employee_id).and_then(|employee| {
            conn.execute(
                "UPDATE employees SET name = ?1, job_title = ?2 WHERE id = ?3",
                rusqlite::params![employee.name(), employee.job_title(), employee_id],
            )
            .map_err(|e| statement_error("employee_update", e))
        });

        match result {
            Ok(changed) => {
                log_op_end!(
                    "employee_update",
                    duration_ms = start.elapsed().as_millis() as u64,
                    changed = changed
                );
                Ok(())
            }
            Err(e) => {
                log_op_error!(
                    "employee_update",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                Err(e)
            }
        }
    }

    /// Delete an employee's row and evict it from the identity map
    ///
    /// An id that is not cached here fails before any statement runs. With
    /// foreign keys enforced, SQLite also deletes the employee's review rows.
    /// Review records already cached elsewhere are not touched.
    ///
    /// # Errors
    /// * `NotFound` - If no employee with this id is cached
    /// * `Persistence` - If the delete fails
    pub fn delete(&mut self, conn: &Connection, employee_id: i64) -> Result<Employee> {
        log_op_start!("employee_delete", employee_id = employee_id);
        let start = Instant::now();

        let employee = self.delete_impl(conn, employee_id).map_err(|e| {
            log_op_error!(
                "employee_delete",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                employee_id = employee_id
            );
            e
        })?;

        log_op_end!(
            "employee_delete",
            duration_ms = start.elapsed().as_millis() as u64,
            employee_id = employee_id
        );

        Ok(employee)
    }

    fn delete_impl(&mut self, conn: &Connection, employee_id: i64) -> Result<Employee> {
        if !self.employees.contains(employee_id) {
            return Err(WorkforceError::EmployeeNotFound { employee_id }.into());
        }

        conn.execute("DELETE FROM employees WHERE id = ?1", [employee_id])
            .map_err(|e| statement_error("employee_delete", e))?;

        let mut employee = self
            .employees
            .remove(employee_id)
            .ok_or(WorkforceError::EmployeeNotFound { employee_id })?;
        employee.set_id(None);

        Ok(employee)
    }

    /// Validate, insert and cache a new employee in one call
    ///
    /// # Errors
    /// * `InvalidInput` - If a field fails validation
    /// * `Persistence` - If the insert fails
    pub fn create(
        &mut self,
        conn: &Connection,
        name: impl Into<String>,
        job_title: impl Into<String>,
    ) -> Result<&Employee> {
        let employee = Employee::new(name, job_title)?;
        self.save(conn, employee)
    }

    /// Reconcile a stored row with the identity map
    ///
    /// # Errors
    /// * `InvalidInput` - If the stored values fail validation
    pub fn instance_from_row(&mut self, row: EmployeeRow) -> Result<&Employee> {
        let employee_id = row.id;

        if let Some(existing) = self.employees.get_mut(employee_id) {
            existing.refresh(row.name, row.job_title)?;
        } else {
            let employee = Employee::with_id(employee_id, row.name, row.job_title)?;
            self.employees.insert(employee)?;
        }

        self.cached(employee_id)
    }

    /// All stored employees, in storage order
    ///
    /// # Errors
    /// * `Persistence` - If the query fails
    pub fn get_all(&mut self, conn: &Connection) -> Result<Vec<&Employee>> {
        let rows = query_rows(conn, SELECT_COLUMNS, [])?;
        self.reconcile_all(rows)
    }

    /// The employee stored under `employee_id`, or `None`
    ///
    /// # Errors
    /// * `Persistence` - If the query fails
    pub fn find_by_id(&mut self, conn: &Connection, employee_id: i64) -> Result<Option<&Employee>> {
        let row = conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                [employee_id],
                EmployeeRow::from_row,
            )
            .optional()
            .map_err(from_rusqlite)?;

        match row {
            Some(row) => self.instance_from_row(row).map(Some),
            None => Ok(None),
        }
    }

    /// The first stored employee with exactly this name, or `None`
    ///
    /// # Errors
    /// * `Persistence` - If the query fails
    pub fn find_by_name(&mut self, conn: &Connection, name: &str) -> Result<Option<&Employee>> {
        let row = conn
            .query_row(
                &format!("{} WHERE name = ?1", SELECT_COLUMNS),
                [name],
                EmployeeRow::from_row,
            )
            .optional()
            .map_err(from_rusqlite)?;

        match row {
            Some(row) => self.instance_from_row(row).map(Some),
            None => Ok(None),
        }
    }

    /// Reviews written for a cached employee
    ///
    /// # Errors
    /// * `NotFound` - If the employee is not cached in this repository
    /// * `Persistence` - If the query fails
    pub fn reviews<'r>(
        &self,
        conn: &Connection,
        employee_id: i64,
        reviews: &'r mut ReviewRepository,
    ) -> Result<Vec<&'r Review>> {
        self.cached(employee_id)?;
        reviews.find_by_employee_id(conn, employee_id)
    }

    fn reconcile_all(&mut self, rows: Vec<EmployeeRow>) -> Result<Vec<&Employee>> {
        let mut ids = Vec::with_capacity(rows.len());
        for row in rows {
            ids.push(row.id);
            self.instance_from_row(row)?;
        }

        let this: &Self = self;
        ids.into_iter().map(|id| this.cached(id)).collect()
    }

    fn cached(&self, employee_id: i64) -> Result<&Employee> {
        self.employees
            .get(employee_id)
            .ok_or_else(|| WorkforceError::EmployeeNotFound { employee_id }.into())
    }
}

fn query_rows<P: Params>(conn: &Connection, sql: &str, params: P) -> Result<Vec<EmployeeRow>> {
    let mut stmt = conn.prepare(sql).map_err(from_rusqlite)?;
    let rows = stmt
        .query_map(params, EmployeeRow::from_row)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}
