//! Error types for RowCore

use thiserror::Error;

/// Main error type for store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database file not found at the specified path
    #[error("Database not found: {0}")]
    DatabaseNotFound(String),

    /// Named table does not exist in the database
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// Column name rejected by the schema allow-list check
    #[error("Column '{column}' not found in table '{table}'")]
    ColumnNotFound {
        /// Table whose schema was checked
        table: String,
        /// The rejected column name
        column: String,
    },

    /// Blank or otherwise unusable identifier
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// Database operation failed
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::DatabaseError(err.to_string())
    }
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::DatabaseNotFound("/path/to/db".to_string());
        assert!(err.to_string().contains("/path/to/db"));

        let err = StoreError::TableNotFound("dragons".to_string());
        assert_eq!(err.to_string(), "Table not found: dragons");

        let err = StoreError::ColumnNotFound {
            table: "dragons".to_string(),
            column: "colour".to_string(),
        };
        assert!(err.to_string().contains("colour"));
        assert!(err.to_string().contains("dragons"));

        let err = StoreError::InvalidIdentifier("".to_string());
        assert!(err.to_string().contains("Invalid identifier"));
    }

    #[test]
    fn test_error_from_rusqlite() {
        let sqlite_err = rusqlite::Error::QueryReturnedNoRows;
        let store_err: StoreError = sqlite_err.into();
        match store_err {
            StoreError::DatabaseError(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected DatabaseError"),
        }
    }
}
