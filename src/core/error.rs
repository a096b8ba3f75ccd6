/// Error Module
///
/// This module defines the error types shared by the connection provider,
/// the CRUD accessor, and the configuration layer.
use thiserror::Error;

/// Error type for every fallible operation in tablecrud.
///
/// The variants follow the life of a statement:
/// - the session cannot be opened (`Connection`)
/// - the caller's input is rejected before any SQL is built (`Preparation`)
/// - the database refuses or fails a well-formed statement (`Query`)
#[derive(Error, Debug)]
pub enum CrudError {
    /// The database session could not be established
    #[error("Connection error: {0}")]
    Connection(String),

    /// Structurally invalid input, rejected before reaching the database
    #[error("Preparation error: {0}")]
    Preparation(String),

    /// The database failed to execute a well-formed statement
    #[error("Query error: {0}")]
    Query(String),

    /// Any other error surfaced by the SQLite driver
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Configuration loading and validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system and I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for Result to use CrudError as the error type.
pub type Result<T> = std::result::Result<T, CrudError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let db_err = CrudError::Database(rusqlite::Error::ExecuteReturnedResults);
        assert!(db_err.to_string().contains("Database error"));

        let query_err = CrudError::Query("no such table: players".to_string());
        assert!(query_err.to_string().contains("Query error"));

        let prep_err = CrudError::Preparation("empty data".to_string());
        assert!(prep_err.to_string().starts_with("Preparation error"));

        let conn_err = CrudError::Connection("unable to open database file".to_string());
        assert!(conn_err.to_string().contains("Connection error"));
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let crud_err: CrudError = io_err.into();
        match crud_err {
            CrudError::Io(_) => {}
            _ => panic!("Expected IO error"),
        }

        let sqlite_err = rusqlite::Error::QueryReturnedNoRows;
        let crud_err: CrudError = sqlite_err.into();
        match crud_err {
            CrudError::Database(_) => {}
            _ => panic!("Expected Database error"),
        }
    }
}
