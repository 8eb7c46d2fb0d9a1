use thiserror::Error;

/// Result type alias using WorkforceError
pub type Result<T> = std::result::Result<T, WorkforceError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers, tests and log
/// consumers can match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,
    NotPersisted,
    ConstraintViolation,

    // Integration/IO
    Io,
    Persistence,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::NotPersisted => "ERR_NOT_PERSISTED",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus the
/// operation and entity context needed to debug a failed statement.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    field: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            field: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add the name of the attribute that failed validation
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the failing attribute, if any
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors for Review and Employee records
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkforceError {
    // ===== Validation Errors =====
    /// Year outside the accepted range
    #[error("Year must be an integer between 2000 and 2100 (got {year})")]
    InvalidYear { year: i64 },

    /// Summary is empty
    #[error("Summary must be a non-empty string")]
    InvalidSummary,

    /// Foreign key does not resolve to an employee
    #[error("employee_id must reference an existing employee (got {employee_id})")]
    UnknownEmployee { employee_id: i64 },

    /// Employee name is empty
    #[error("Name must be a non-empty string")]
    InvalidName,

    /// Employee job title is empty
    #[error("Job title must be a non-empty string")]
    InvalidJobTitle,

    // ===== Lifecycle Errors =====
    /// No cached review with this id
    #[error("Review not found: {review_id}")]
    ReviewNotFound { review_id: i64 },

    /// No cached employee with this id
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound { employee_id: i64 },

    /// Record has no id yet (never saved, or already deleted)
    #[error("{entity} has not been saved")]
    NotPersisted { entity: String },

    /// Record already has an id and cannot be inserted again
    #[error("{entity} {id} is already saved")]
    AlreadyPersisted { entity: String, id: i64 },

    // ===== Capability Errors =====
    /// The employee lookup capability failed
    #[error("Employee lookup failed: {message}")]
    LookupFailed { message: String },
}

/// Conversion from WorkforceError to ExError
impl From<WorkforceError> for ExError {
    fn from(err: WorkforceError) -> Self {
        match err {
            WorkforceError::InvalidYear { year } => ExError::new(ExErrorKind::InvalidInput)
                .with_field("year")
                .with_message(format!(
                    "Year must be an integer between 2000 and 2100 (got {})",
                    year
                )),

            WorkforceError::InvalidSummary => ExError::new(ExErrorKind::InvalidInput)
                .with_field("summary")
                .with_message("Summary must be a non-empty string"),

            WorkforceError::UnknownEmployee { employee_id } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_field("employee_id")
                    .with_entity_id(employee_id.to_string())
                    .with_message("employee_id must reference an existing employee")
            }

            WorkforceError::InvalidName => ExError::new(ExErrorKind::InvalidInput)
                .with_field("name")
                .with_message("Name must be a non-empty string"),

            WorkforceError::InvalidJobTitle => ExError::new(ExErrorKind::InvalidInput)
                .with_field("job_title")
                .with_message("Job title must be a non-empty string"),

            WorkforceError::ReviewNotFound { review_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(review_id.to_string())
                .with_message("Review not found"),

            WorkforceError::EmployeeNotFound { employee_id } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_entity_id(employee_id.to_string())
                    .with_message("Employee not found")
            }

            WorkforceError::NotPersisted { entity } => ExError::new(ExErrorKind::NotPersisted)
                .with_message(format!("{} has not been saved", entity)),

            WorkforceError::AlreadyPersisted { entity, id } => {
                ExError::new(ExErrorKind::ConstraintViolation)
                    .with_entity_id(id.to_string())
                    .with_message(format!("{} is already saved", entity))
            }

            WorkforceError::LookupFailed { message } => ExError::new(ExErrorKind::Persistence)
                .with_op("employee_lookup")
                .with_message(message),
        }
    }
}
