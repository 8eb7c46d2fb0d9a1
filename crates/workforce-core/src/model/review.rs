use serde::Serialize;

use crate::errors::Result;
use crate::ops::{EmployeeLookup, Identified};
use crate::rules::{validate_employee_id, validate_summary, validate_year};

/// Review - a yearly performance summary for one employee
///
/// Fields are only reachable through validated setters, so a `Review`
/// value always satisfies the year range, non-empty summary and existing
/// employee rules as of the moment each field was assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    id: Option<i64>,
    year: i64,
    summary: String,
    employee_id: i64,
}

impl Review {
    /// Create a transient Review (no id yet)
    ///
    /// # Errors
    /// * `InvalidYear` - If year is outside 2000..=2100
    /// * `InvalidSummary` - If summary is empty
    /// * `UnknownEmployee` - If the lookup has no such employee
    pub fn new<L>(
        year: i64,
        summary: impl Into<String>,
        employee_id: i64,
        employees: &L,
    ) -> Result<Self>
    where
        L: EmployeeLookup + ?Sized,
    {
        Self::build(None, year, summary.into(), employee_id, employees)
    }

    /// Create a Review carrying an existing primary key
    ///
    /// Used when rehydrating rows; validation is identical to `new`.
    ///
    /// # Errors
    /// Same as [`Review::new`].
    pub fn with_id<L>(
        id: i64,
        year: i64,
        summary: impl Into<String>,
        employee_id: i64,
        employees: &L,
    ) -> Result<Self>
    where
        L: EmployeeLookup + ?Sized,
    {
        Self::build(Some(id), year, summary.into(), employee_id, employees)
    }

    fn build<L>(
        id: Option<i64>,
        year: i64,
        summary: String,
        employee_id: i64,
        employees: &L,
    ) -> Result<Self>
    where
        L: EmployeeLookup + ?Sized,
    {
        Ok(Self {
            id,
            year: validate_year(year)?,
            summary: validate_summary(summary)?,
            employee_id: validate_employee_id(employee_id, employees)?,
        })
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn employee_id(&self) -> i64 {
        self.employee_id
    }

    /// Whether the record has been saved and not deleted since
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Set the year
    ///
    /// # Errors
    /// * `InvalidYear` - If year is outside 2000..=2100; the old value is kept
    pub fn set_year(&mut self, year: i64) -> Result<()> {
        self.year = validate_year(year)?;
        Ok(())
    }

    /// Set the summary
    ///
    /// # Errors
    /// * `InvalidSummary` - If summary is empty; the old value is kept
    pub fn set_summary(&mut self, summary: impl Into<String>) -> Result<()> {
        self.summary = validate_summary(summary.into())?;
        Ok(())
    }

    /// Point the review at another employee
    ///
    /// # Errors
    /// * `UnknownEmployee` - If the lookup has no such employee; the old value is kept
    pub fn set_employee_id<L>(&mut self, employee_id: i64, employees: &L) -> Result<()>
    where
        L: EmployeeLookup + ?Sized,
    {
        self.employee_id = validate_employee_id(employee_id, employees)?;
        Ok(())
    }

    /// Overwrite all stored fields from a freshly read row
    ///
    /// Every value is validated before any field changes, so a failing row
    /// leaves the record untouched.
    ///
    /// # Errors
    /// Same as [`Review::new`].
    pub fn refresh<L>(
        &mut self,
        year: i64,
        summary: String,
        employee_id: i64,
        employees: &L,
    ) -> Result<()>
    where
        L: EmployeeLookup + ?Sized,
    {
        let year = validate_year(year)?;
        let summary = validate_summary(summary)?;
        let employee_id = validate_employee_id(employee_id, employees)?;

        self.year = year;
        self.summary = summary;
        self.employee_id = employee_id;
        Ok(())
    }
}

impl Identified for Review {
    const ENTITY: &'static str = "Review";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }
}

impl std::fmt::Display for Review {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Review {}: ", id)?,
            None => write!(f, "<Review None: ")?,
        }
        write!(
            f,
            "Year {}, Summary: {}, Employee ID: {}>",
            self.year, self.summary, self.employee_id
        )
    }
}
