//! Workforce Core - domain records, validation and in-memory bookkeeping
//!
//! This crate provides:
//! - `Review` and `Employee` records with validated construction and setters
//! - The `EmployeeLookup` capability used for the review foreign key check
//! - `IdentityMap`, the per-repository cache of live records
//! - The canonical error facility (`ExError`) and domain errors
//! - The structured logging facility and its macros
//!
//! Persistence lives in `workforce-store`.

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod rules;

// Re-export commonly used types
pub use workforce_core_types::schema;
pub use errors::{ExError, ExErrorKind, Result, WorkforceError};
pub use model::{Employee, Review};
pub use ops::{EmployeeLookup, Identified, IdentityMap};
