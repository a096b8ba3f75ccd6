/// Core Module for tablecrud
///
/// This module contains the connection provider, the record model, and
/// the generic CRUD accessor, together with the shared error type.

pub mod db;
pub mod error;

// Re-export commonly used types for convenience
pub use error::{CrudError, Result};
