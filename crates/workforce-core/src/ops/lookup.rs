use std::collections::{BTreeSet, HashSet};

use crate::errors::Result;

/// Capability to check whether an employee exists
///
/// Injected into `Review` construction and mutation so the foreign key check
/// does not depend on any particular store. The SQLite-backed
/// implementation lives in `workforce-store`; the set implementations here
/// serve in-memory callers and tests.
pub trait EmployeeLookup {
    /// Returns `true` if an employee with this id exists
    ///
    /// # Errors
    /// * `LookupFailed` - If the backing store cannot be queried
    fn employee_exists(&self, employee_id: i64) -> Result<bool>;
}

impl EmployeeLookup for BTreeSet<i64> {
    fn employee_exists(&self, employee_id: i64) -> Result<bool> {
        Ok(self.contains(&employee_id))
    }
}

impl EmployeeLookup for HashSet<i64> {
    fn employee_exists(&self, employee_id: i64) -> Result<bool> {
        Ok(self.contains(&employee_id))
    }
}

impl<L: EmployeeLookup + ?Sized> EmployeeLookup for &L {
    fn employee_exists(&self, employee_id: i64) -> Result<bool> {
        (**self).employee_exists(employee_id)
    }
}
