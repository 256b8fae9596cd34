//! Data models for RowCore database entities

use std::fmt;

use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

/// Dynamically typed SQL value
///
/// Covers the SQLite storage classes. Values are always bound as data
/// parameters, never interpolated into statement text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// SQL NULL
    Null,
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit float
    Real(f64),
    /// UTF-8 text
    Text(String),
    /// Raw bytes
    Blob(Vec<u8>),
}

impl Value {
    /// Check if this value is NULL
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Blob(v)
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Null => ToSqlOutput::Owned(rusqlite::types::Value::Null),
            Value::Integer(i) => ToSqlOutput::Owned(rusqlite::types::Value::Integer(*i)),
            Value::Real(r) => ToSqlOutput::Owned(rusqlite::types::Value::Real(*r)),
            Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            Value::Blob(b) => ToSqlOutput::Borrowed(ValueRef::Blob(b)),
        })
    }
}

impl FromSql for Value {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Ok(match value {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::Integer(i),
            ValueRef::Real(r) => Value::Real(r),
            ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(b) => Value::Blob(b.to_vec()),
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Real(r) => write!(f, "{r}"),
            Value::Text(s) => write!(f, "'{s}'"),
            Value::Blob(b) => write!(f, "<blob {} bytes>", b.len()),
        }
    }
}

/// One column of a table as reported by the schema inspector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnInfo {
    /// Zero-based ordinal position
    pub ordinal: usize,
    /// Column name
    pub name: String,
    /// Declared type (e.g. "INTEGER", "TEXT")
    pub data_type: String,
    /// True if the column carries a NOT NULL constraint
    pub not_null: bool,
    /// Default value expression, if declared
    pub default_value: Option<String>,
    /// True if the column is part of the primary key
    pub primary_key: bool,
}

/// Full contents of a table: header plus all rows
///
/// The header comes from the query's result metadata, independently of the
/// schema inspector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDump {
    /// Table the dump was taken from
    pub table: String,
    /// Column names from result metadata
    pub columns: Vec<String>,
    /// Rows in the store's natural return order
    pub rows: Vec<Vec<Value>>,
}

impl TableDump {
    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table held no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for TableDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Current data in table: {} ---", self.table)?;
        writeln!(f, "Fields: {:?}", self.columns)?;
        for row in &self.rows {
            let values: Vec<String> = row.iter().map(Value::to_string).collect();
            writeln!(f, "({})", values.join(", "))?;
        }
        Ok(())
    }
}
