/// CRUD Accessor Module
///
/// Builds parameterized INSERT / SELECT / UPDATE / DELETE statements for an
/// arbitrary table and executes them on a borrowed connection.
///
/// ## Failure policy
///
/// - Input that cannot form a valid statement (empty data, empty conditions
///   on update/delete) is rejected with `CrudError::Preparation` before any
///   SQL is built.
/// - `create`, `update` and `delete` report execution failures as `Ok(false)`.
///   The driver error is logged but not returned.
/// - `read` and `count` have no boolean fallback and return
///   `CrudError::Query` on execution failure.

use crate::core::db::record::{Record, Value};
use crate::core::{CrudError, Result};
use rusqlite::{params_from_iter, Connection};
use tracing::{debug, warn};

/// A statement ready to prepare: SQL text plus values in placeholder order
#[derive(Debug, Clone, PartialEq)]
pub struct SqlStatement {
    pub sql: String,
    pub params: Vec<Value>,
}

/// Quotes a column name as an SQL identifier, doubling embedded backticks.
///
/// Backticks never fall back to a string literal, so an unknown column is
/// an error rather than a constant.
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Renders `conditions` as AND-combined equality predicates.
///
/// NULL values render as `IS NULL` and bind nothing. Returns the clause
/// (without the WHERE keyword) and appends bound values to `params`.
fn where_clause(conditions: &Record, params: &mut Vec<Value>) -> String {
    conditions
        .iter()
        .map(|(column, value)| {
            if value.is_null() {
                format!("{} IS NULL", quote_identifier(column))
            } else {
                params.push(value.clone());
                format!("{} = ?", quote_identifier(column))
            }
        })
        .collect::<Vec<_>>()
        .join(" AND ")
}

fn require_non_empty(record: &Record, what: &str, operation: &str) -> Result<()> {
    if record.is_empty() {
        return Err(CrudError::Preparation(format!(
            "{} requires non-empty {}",
            operation, what
        )));
    }
    Ok(())
}

/// Builds `INSERT INTO table (cols) VALUES (?, ...)`
pub fn insert_statement(table: &str, data: &Record) -> Result<SqlStatement> {
    require_non_empty(data, "data", "create")?;

    let mut columns = Vec::with_capacity(data.len());
    let mut params = Vec::with_capacity(data.len());
    for (column, value) in data.iter() {
        columns.push(quote_identifier(column));
        params.push(value.clone());
    }
    let placeholders = vec!["?"; params.len()].join(", ");

    Ok(SqlStatement {
        sql: format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table,
            columns.join(", "),
            placeholders
        ),
        params,
    })
}

/// Builds `SELECT * FROM table [WHERE ...]`; empty conditions select every row
pub fn select_statement(table: &str, conditions: &Record) -> SqlStatement {
    let mut params = Vec::new();
    let mut sql = format!("SELECT * FROM {}", table);
    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&where_clause(conditions, &mut params));
    }
    SqlStatement { sql, params }
}

/// Builds `SELECT COUNT(*) FROM table [WHERE ...]`
pub fn count_statement(table: &str, conditions: &Record) -> SqlStatement {
    let mut params = Vec::new();
    let mut sql = format!("SELECT COUNT(*) FROM {}", table);
    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&where_clause(conditions, &mut params));
    }
    SqlStatement { sql, params }
}

/// Builds `UPDATE table SET ... [WHERE ...]`.
///
/// SET values are bound before WHERE values, matching clause order.
/// `conditions = None` means every row; `Some(empty)` is rejected.
pub fn update_statement(table: &str, data: &Record, conditions: Option<&Record>) -> Result<SqlStatement> {
    require_non_empty(data, "data", "update")?;

    let mut params = Vec::with_capacity(data.len());
    let assignments = data
        .iter()
        .map(|(column, value)| {
            params.push(value.clone());
            format!("{} = ?", quote_identifier(column))
        })
        .collect::<Vec<_>>()
        .join(", ");

    let mut sql = format!("UPDATE {} SET {}", table, assignments);
    if let Some(conditions) = conditions {
        require_non_empty(conditions, "conditions", "update")?;
        sql.push_str(" WHERE ");
        sql.push_str(&where_clause(conditions, &mut params));
    }

    Ok(SqlStatement { sql, params })
}

/// Builds `DELETE FROM table [WHERE ...]`.
///
/// `conditions = None` means every row; `Some(empty)` is rejected.
pub fn delete_statement(table: &str, conditions: Option<&Record>) -> Result<SqlStatement> {
    let mut params = Vec::new();
    let mut sql = format!("DELETE FROM {}", table);
    if let Some(conditions) = conditions {
        require_non_empty(conditions, "conditions", "delete")?;
        sql.push_str(" WHERE ");
        sql.push_str(&where_clause(conditions, &mut params));
    }
    Ok(SqlStatement { sql, params })
}

/// Generic CRUD accessor bound to one connection and one table.
///
/// The table name is spliced into SQL text (identifiers cannot be bound as
/// parameters) and must never come from untrusted input. Column names and
/// values come from the records passed to each call; values are always
/// bound through placeholders.
///
/// The accessor holds no state besides the borrowed connection and the
/// table name. It performs no synchronization of its own.
#[derive(Debug, Clone)]
pub struct Crud<'a> {
    connection: &'a Connection,
    table: String,
}

impl<'a> Crud<'a> {
    /// Creates an accessor for `table` on `connection`
    pub fn new(connection: &'a Connection, table: impl Into<String>) -> Self {
        Crud {
            connection,
            table: table.into(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Inserts one row built from `data`.
    ///
    /// # Returns
    ///
    /// `Ok(true)` when at least one row was inserted, `Ok(false)` when the
    /// statement failed to execute (constraint violation, unknown column,
    /// missing table).
    ///
    /// # Errors
    ///
    /// `CrudError::Preparation` if `data` is empty.
    pub fn create(&self, data: &Record) -> Result<bool> {
        let stmt = insert_statement(&self.table, data)?;
        Ok(self.execute_reporting("create", &stmt).map_or(false, |rows| rows > 0))
    }

    /// Selects rows matching every condition; empty conditions select all rows.
    ///
    /// Rows come back in whatever order the database returns them.
    ///
    /// # Errors
    ///
    /// `CrudError::Query` if the statement fails to prepare or execute.
    pub fn read(&self, conditions: &Record) -> Result<Vec<Record>> {
        let stmt = select_statement(&self.table, conditions);
        debug!(table = %self.table, sql = %stmt.sql, "read");

        let mut prepared = self
            .connection
            .prepare(&stmt.sql)
            .map_err(|e| CrudError::Query(format!("Failed to prepare statement: {}", e)))?;

        let columns: Vec<String> = prepared.column_names().into_iter().map(String::from).collect();

        let rows = prepared
            .query_map(params_from_iter(stmt.params.iter()), |row| {
                let mut record = Record::new();
                for (i, column) in columns.iter().enumerate() {
                    record.set(column.as_str(), row.get::<_, Value>(i)?);
                }
                Ok(record)
            })
            .map_err(|e| CrudError::Query(format!("Query execution failed: {}", e)))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| CrudError::Query(format!("Result processing failed: {}", e)))?;

        Ok(rows)
    }

    /// Reads every row of the table
    pub fn read_all(&self) -> Result<Vec<Record>> {
        self.read(&Record::new())
    }

    /// Counts rows matching every condition; empty conditions count all rows.
    pub fn count(&self, conditions: &Record) -> Result<usize> {
        let stmt = count_statement(&self.table, conditions);
        debug!(table = %self.table, sql = %stmt.sql, "count");

        let count: i64 = self
            .connection
            .query_row(&stmt.sql, params_from_iter(stmt.params.iter()), |row| row.get(0))
            .map_err(|e| CrudError::Query(format!("Query execution failed: {}", e)))?;

        Ok(count.max(0) as usize)
    }

    /// Sets the columns in `data` on every row matching `conditions`.
    ///
    /// Matching zero rows is a successful no-op.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the statement executed, `Ok(false)` if it failed.
    ///
    /// # Errors
    ///
    /// `CrudError::Preparation` if `data` or `conditions` is empty. Use
    /// [`Crud::update_all`] to update every row deliberately.
    pub fn update(&self, data: &Record, conditions: &Record) -> Result<bool> {
        let stmt = update_statement(&self.table, data, Some(conditions))?;
        Ok(self.execute_reporting("update", &stmt).is_some())
    }

    /// Sets the columns in `data` on every row of the table
    pub fn update_all(&self, data: &Record) -> Result<bool> {
        let stmt = update_statement(&self.table, data, None)?;
        Ok(self.execute_reporting("update_all", &stmt).is_some())
    }

    /// Deletes every row matching `conditions`.
    ///
    /// Matching zero rows is a successful no-op, so repeating a delete is
    /// harmless.
    ///
    /// # Errors
    ///
    /// `CrudError::Preparation` if `conditions` is empty. Use
    /// [`Crud::delete_all`] to empty the table deliberately.
    pub fn delete(&self, conditions: &Record) -> Result<bool> {
        let stmt = delete_statement(&self.table, Some(conditions))?;
        Ok(self.execute_reporting("delete", &stmt).is_some())
    }

    /// Deletes every row of the table
    pub fn delete_all(&self) -> Result<bool> {
        let stmt = delete_statement(&self.table, None)?;
        Ok(self.execute_reporting("delete_all", &stmt).is_some())
    }

    /// Executes a data-modifying statement, returning rows affected or
    /// `None` after logging the failure.
    fn execute_reporting(&self, operation: &str, stmt: &SqlStatement) -> Option<usize> {
        debug!(table = %self.table, sql = %stmt.sql, operation, "execute");

        match self
            .connection
            .execute(&stmt.sql, params_from_iter(stmt.params.iter()))
        {
            Ok(rows) => {
                debug!(table = %self.table, operation, rows, "statement executed");
                Some(rows)
            }
            Err(e) => {
                warn!(table = %self.table, operation, error = %e, "statement failed");
                None
            }
        }
    }
}
