//! Database connection management
//!
//! Opens and configures the SQLite connection that every repository call
//! borrows. The connection's lifetime belongs to the caller.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, io_error, Result};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Default database location, relative to the working directory
pub const DEFAULT_DB_PATH: &str = ".workforce/company.db";

/// Connection settings for a file-backed store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Database file path
    pub path: PathBuf,
    /// Enforce foreign keys (needed for `ON DELETE CASCADE`)
    pub foreign_keys: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}

impl StoreConfig {
    /// Config for the given path with foreign keys enforced
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            foreign_keys: true,
        }
    }

    /// Open the database, creating parent directories first
    pub fn open(&self) -> Result<Connection> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| io_error("create_db_dir", e))?;
            }
        }

        let conn = open(&self.path)?;
        if self.foreign_keys {
            configure(&conn)?;
        }
        tracing::debug!(path = %self.path.display(), "opened store");
        Ok(conn)
    }
}

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database with foreign keys enforced (for testing)
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

/// Configure a connection
///
/// Foreign key enforcement is off by default in SQLite and must be enabled
/// per connection.
pub fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(from_rusqlite)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_enforces_foreign_keys() {
        let conn = open_in_memory().unwrap();
        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.path, PathBuf::from(DEFAULT_DB_PATH));
        assert!(config.foreign_keys);
    }
}
