//! Repository layer for persisting domain records to SQLite
//!
//! Each repository owns the identity map for its entity and borrows the
//! caller's connection per call.

pub mod employee_repo;
pub mod lookup;
pub mod review_repo;

pub use employee_repo::{EmployeeRepository, EmployeeRow};
pub use lookup::SqliteEmployeeLookup;
pub use review_repo::{ReviewRepository, ReviewRow};
