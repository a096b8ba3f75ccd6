/// Database Module
///
/// This module provides the data-access layer of tablecrud, organized into
/// focused submodules.
///
/// ## Architecture
///
/// - **Connection Management** (`connection.rs`): opens and owns the SQLite session
/// - **Records** (`record.rs`): column-name to value mappings passed in and out
/// - **CRUD Accessor** (`crud.rs`): builds and executes parameterized statements
///   against one table
///
/// ## Usage
///
/// ```no_run
/// use tablecrud::config::DatabaseConfig;
/// use tablecrud::core::db::{Database, Record};
///
/// let db = Database::connect(&DatabaseConfig::default())?;
/// let players = db.table("players");
/// players.create(&Record::from([("name", "ilyass")]))?;
/// # Ok::<(), tablecrud::core::CrudError>(())
/// ```
pub mod connection;
pub mod crud;
pub mod record;

pub use connection::*;
pub use crud::*;
pub use record::*;
