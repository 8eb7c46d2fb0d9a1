//! Workforce Store - SQLite persistence for reviews and employees
//!
//! Provides:
//! - Connection opening and configuration (`db`)
//! - `ReviewRepository` and `EmployeeRepository`, each owning an identity map
//! - `SqliteEmployeeLookup`, the store-backed employee existence check
//!
//! Every repository call takes the caller's `&Connection` and issues one
//! statement per write. SQLite autocommits each statement.

pub mod db;
pub mod errors;
pub mod repo;

// Re-export key types
pub use db::StoreConfig;
pub use errors::Result;
pub use repo::{EmployeeRepository, ReviewRepository, SqliteEmployeeLookup};
