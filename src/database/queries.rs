//! SQL query operations for database access
//!
//! This module provides low-level query functions over an open connection.
//! For path-configured operations, use the TableStore API.
//!
//! Data values are always bound as parameters. Table and column names are
//! interpolated into statement text, but only after validation against the
//! live schema and SQL identifier quoting.

use rusqlite::{Connection, params};
use tracing::debug;

use crate::database::models::{ColumnInfo, TableDump, Value};
use crate::database::schema::{self, quote_identifier, validate_identifier};
use crate::error::{Result, StoreError};

/// Check whether a table exists in the database
pub fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
        params![table],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Get the ordered column list for a table
///
/// Returns `TableNotFound` if the table does not exist.
pub fn table_columns(conn: &Connection, table: &str) -> Result<Vec<ColumnInfo>> {
    let table = validate_identifier(table)?;
    if !table_exists(conn, table)? {
        return Err(StoreError::TableNotFound(table.to_string()));
    }

    let mut stmt = conn.prepare(&format!(
        "PRAGMA table_info({})",
        quote_identifier(table)
    ))?;

    let columns = stmt.query_map([], |row| {
        Ok(ColumnInfo {
            ordinal: row.get::<_, i64>(0)? as usize,
            name: row.get(1)?,
            data_type: row.get(2)?,
            not_null: row.get::<_, i64>(3)? != 0,
            default_value: row.get(4)?,
            primary_key: row.get::<_, i64>(5)? > 0,
        })
    })?;

    columns
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(Into::into)
}

/// Get just the column names for a table, in declared order
pub fn column_names(conn: &Connection, table: &str) -> Result<Vec<String>> {
    Ok(table_columns(conn, table)?
        .into_iter()
        .map(|c| c.name)
        .collect())
}

/// Read all rows of a table
///
/// The header is taken from the statement's result metadata rather than the
/// schema inspector. No filtering and no ordering beyond the store's natural
/// return order.
pub fn fetch_all(conn: &Connection, table: &str) -> Result<TableDump> {
    let table = validate_identifier(table)?;
    if !table_exists(conn, table)? {
        return Err(StoreError::TableNotFound(table.to_string()));
    }

    let mut stmt = conn.prepare(&format!("SELECT * FROM {}", quote_identifier(table)))?;
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let column_count = columns.len();

    let rows = stmt.query_map([], |row| {
        let mut values = Vec::with_capacity(column_count);
        for i in 0..column_count {
            values.push(row.get::<_, Value>(i)?);
        }
        Ok(values)
    })?;

    let rows = rows.collect::<std::result::Result<Vec<_>, _>>()?;
    debug!(table, rows = rows.len(), "table read");

    Ok(TableDump {
        table: table.to_string(),
        columns,
        rows,
    })
}

/// Update one column of the rows matching an id value
///
/// Both column names are checked against the table's live schema before any
/// statement text is assembled; `new_value` and `id_value` are bound as data
/// parameters. Returns the affected-row count: zero means no row matched and
/// is not an error. The statement autocommits.
///
/// Uniqueness of `id_column` is the caller's obligation; a non-unique id
/// column updates every matching row.
pub fn update_field(
    conn: &Connection,
    table: &str,
    column: &str,
    new_value: &Value,
    id_column: &str,
    id_value: &Value,
) -> Result<usize> {
    let table = validate_identifier(table)?;
    let column = validate_identifier(column)?;
    let id_column = validate_identifier(id_column)?;

    let known = column_names(conn, table)?;
    for name in [column, id_column] {
        if !known.iter().any(|k| k == name) {
            return Err(StoreError::ColumnNotFound {
                table: table.to_string(),
                column: name.to_string(),
            });
        }
    }

    let sql = format!(
        "UPDATE {} SET {} = ?1 WHERE {} = ?2",
        quote_identifier(table),
        quote_identifier(column),
        quote_identifier(id_column),
    );

    let affected = conn.execute(&sql, params![new_value, id_value])?;
    debug!(table, column, affected, "field update applied");
    Ok(affected)
}

/// Create a table with the canonical column layout
pub fn create_table(conn: &Connection, table: &str) -> Result<()> {
    let table = validate_identifier(table)?;
    conn.execute(&schema::create_table_sql(table), [])?;
    debug!(table, "table created");
    Ok(())
}
