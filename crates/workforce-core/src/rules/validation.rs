use crate::errors::{Result, WorkforceError};
use crate::ops::EmployeeLookup;

/// Earliest accepted review year
pub const YEAR_MIN: i64 = 2000;

/// Latest accepted review year
pub const YEAR_MAX: i64 = 2100;

/// Validate a review year (inclusive range `YEAR_MIN..=YEAR_MAX`)
///
/// # Errors
/// * `InvalidYear` - If the year is outside the range
pub fn validate_year(year: i64) -> Result<i64> {
    if (YEAR_MIN..=YEAR_MAX).contains(&year) {
        Ok(year)
    } else {
        Err(WorkforceError::InvalidYear { year })
    }
}

/// Validate a review summary
///
/// Any non-empty string is accepted, whitespace included.
///
/// # Errors
/// * `InvalidSummary` - If the summary is empty
pub fn validate_summary(summary: String) -> Result<String> {
    if summary.is_empty() {
        return Err(WorkforceError::InvalidSummary);
    }
    Ok(summary)
}

/// Validate that a foreign key points at an existing employee
///
/// # Errors
/// * `UnknownEmployee` - If the lookup reports no such employee
/// * `LookupFailed` - If the lookup itself fails
pub fn validate_employee_id<L>(employee_id: i64, lookup: &L) -> Result<i64>
where
    L: EmployeeLookup + ?Sized,
{
    if lookup.employee_exists(employee_id)? {
        Ok(employee_id)
    } else {
        Err(WorkforceError::UnknownEmployee { employee_id })
    }
}

/// Validate an employee name
///
/// # Errors
/// * `InvalidName` - If the name is empty
pub fn validate_name(name: String) -> Result<String> {
    if name.is_empty() {
        return Err(WorkforceError::InvalidName);
    }
    Ok(name)
}

/// Validate an employee job title
///
/// # Errors
/// * `InvalidJobTitle` - If the job title is empty
pub fn validate_job_title(job_title: String) -> Result<String> {
    if job_title.is_empty() {
        return Err(WorkforceError::InvalidJobTitle);
    }
    Ok(job_title)
}
