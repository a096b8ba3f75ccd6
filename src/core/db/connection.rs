/// Connection Management Module
///
/// This module opens the single SQLite session used by the application and
/// owns it for the lifetime of the process. Accessors borrow the connection
/// for each call; nothing here is global.

use crate::config::DatabaseConfig;
use crate::core::db::crud::Crud;
use crate::core::{CrudError, Result};
use rusqlite::{Connection, OpenFlags};
use std::time::Duration;
use tracing::{error, info};

const MEMORY_PATH: &str = ":memory:";

/// Owner of the database connection
#[derive(Debug)]
pub struct Database {
    connection: Connection,
    /// Path to the database file (None for in-memory databases)
    path: Option<String>,
}

impl Database {
    /// Opens a connection using the given configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Database path and session settings
    ///
    /// # Returns
    ///
    /// The connected `Database`, or `CrudError::Connection` when the session
    /// cannot be established (unwritable path, missing file with
    /// `create_if_missing = false`, failed pragma). No retry is attempted.
    pub fn connect(config: &DatabaseConfig) -> Result<Self> {
        let mut flags = OpenFlags::default();
        if !config.create_if_missing.unwrap_or(true) {
            flags.remove(OpenFlags::SQLITE_OPEN_CREATE);
        }

        let connection = Connection::open_with_flags(&config.path, flags).map_err(|e| {
            error!(path = %config.path, error = %e, "failed to open database");
            CrudError::Connection(format!("{}: {}", config.path, e))
        })?;

        if config.foreign_keys.unwrap_or(true) {
            connection
                .execute_batch("PRAGMA foreign_keys = ON;")
                .map_err(|e| CrudError::Connection(format!("Failed to enable foreign keys: {}", e)))?;
        }

        if let Some(ms) = config.busy_timeout_ms {
            connection
                .busy_timeout(Duration::from_millis(ms))
                .map_err(|e| CrudError::Connection(format!("Failed to set busy timeout: {}", e)))?;
        }

        info!(path = %config.path, "connected to database");

        Ok(Database {
            connection,
            path: if config.path != MEMORY_PATH {
                Some(config.path.clone())
            } else {
                None
            },
        })
    }

    /// Opens a fresh in-memory database with default settings
    pub fn open_in_memory() -> Result<Self> {
        Database::connect(&DatabaseConfig {
            path: MEMORY_PATH.to_string(),
            ..DatabaseConfig::default()
        })
    }

    /// The shared connection handle
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Path of the database file, `None` for in-memory databases
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Returns a CRUD accessor for `table` bound to this connection.
    ///
    /// `table` is interpolated into SQL text and must come from trusted code.
    pub fn table(&self, table: &str) -> Crud<'_> {
        Crud::new(&self.connection, table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_in_memory() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.path(), None);

        let fk: i64 = db
            .connection()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk, 1);
    }

    #[test]
    fn test_connection_error_handling() {
        let config = DatabaseConfig {
            path: "/nonexistent/path/database.db".to_string(),
            ..DatabaseConfig::default()
        };

        match Database::connect(&config) {
            Err(CrudError::Connection(msg)) => assert!(msg.contains("/nonexistent/path")),
            other => panic!("Expected Connection error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_database_without_create() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.db");
        let config = DatabaseConfig {
            path: path.to_string_lossy().to_string(),
            create_if_missing: Some(false),
            ..DatabaseConfig::default()
        };

        assert!(matches!(Database::connect(&config), Err(CrudError::Connection(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_file_database_path_tracking() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.db");
        let config = DatabaseConfig {
            path: path.to_string_lossy().to_string(),
            busy_timeout_ms: Some(100),
            ..DatabaseConfig::default()
        };

        let db = Database::connect(&config).unwrap();
        assert_eq!(db.path(), Some(config.path.as_str()));
        assert!(path.exists());
    }
}
