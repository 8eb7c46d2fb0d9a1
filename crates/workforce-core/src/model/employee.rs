use serde::Serialize;

use crate::errors::Result;
use crate::ops::Identified;
use crate::rules::{validate_job_title, validate_name};

/// Employee - the record reviews point at through `employee_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    id: Option<i64>,
    name: String,
    job_title: String,
}

impl Employee {
    /// Create a transient Employee
    ///
    /// # Errors
    /// * `InvalidName` - If name is empty
    /// * `InvalidJobTitle` - If job title is empty
    pub fn new(name: impl Into<String>, job_title: impl Into<String>) -> Result<Self> {
        Ok(Self {
            id: None,
            name: validate_name(name.into())?,
            job_title: validate_job_title(job_title.into())?,
        })
    }

    /// Create an Employee carrying an existing primary key
    ///
    /// # Errors
    /// Same as [`Employee::new`].
    pub fn with_id(id: i64, name: impl Into<String>, job_title: impl Into<String>) -> Result<Self> {
        let mut employee = Self::new(name, job_title)?;
        employee.id = Some(id);
        Ok(employee)
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// # Errors
    /// * `InvalidName` - If name is empty; the old value is kept
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.name = validate_name(name.into())?;
        Ok(())
    }

    /// # Errors
    /// * `InvalidJobTitle` - If job title is empty; the old value is kept
    pub fn set_job_title(&mut self, job_title: impl Into<String>) -> Result<()> {
        self.job_title = validate_job_title(job_title.into())?;
        Ok(())
    }

    /// Overwrite stored fields from a freshly read row, validating first
    ///
    /// # Errors
    /// Same as [`Employee::new`].
    pub fn refresh(&mut self, name: String, job_title: String) -> Result<()> {
        let name = validate_name(name)?;
        let job_title = validate_job_title(job_title)?;
        self.name = name;
        self.job_title = job_title;
        Ok(())
    }
}

impl Identified for Employee {
    const ENTITY: &'static str = "Employee";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }
}

impl std::fmt::Display for Employee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Employee {}: {}, {}>", id, self.name, self.job_title),
            None => write!(f, "<Employee None: {}, {}>", self.name, self.job_title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::WorkforceError;

    #[test]
    fn test_new_employee() {
        let employee = Employee::new("Lee", "Manager").unwrap();
        assert_eq!(employee.id(), None);
        assert_eq!(employee.name(), "Lee");
        assert_eq!(employee.job_title(), "Manager");
        assert_eq!(employee.to_string(), "<Employee None: Lee, Manager>");
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert_eq!(
            Employee::new("", "Manager").unwrap_err(),
            WorkforceError::InvalidName
        );
        assert_eq!(
            Employee::new("Lee", "").unwrap_err(),
            WorkforceError::InvalidJobTitle
        );
    }

    #[test]
    fn test_refresh_validates_before_assigning() {
        let mut employee = Employee::with_id(1, "Lee", "Manager").unwrap();
        assert!(employee
            .refresh("Sasha".to_string(), String::new())
            .is_err());
        assert_eq!(employee.name(), "Lee");

        employee
            .refresh("Sasha".to_string(), "Director".to_string())
            .unwrap();
        assert_eq!(employee.to_string(), "<Employee 1: Sasha, Director>");
    }
}
