//! Main TableStore API
//!
//! This module provides the primary interface for operating on a single
//! configured table in a local SQLite database.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::database::{Database, queries};
use crate::error::{Result, StoreError};
use crate::{DEFAULT_DATABASE_FILENAME, DEFAULT_TABLE_NAME};

/// Store configuration
///
/// The target table is an explicit configuration field, passed to every
/// operation, rather than a module-level constant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the database file.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    /// Name of the table all operations target.
    #[serde(default = "default_table")]
    pub table: String,
}

fn default_db_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE_FILENAME)
}

fn default_table() -> String {
    DEFAULT_TABLE_NAME.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            table: default_table(),
        }
    }
}

impl StoreConfig {
    /// Create a configuration for the given database file and table
    pub fn new(db_path: impl Into<PathBuf>, table: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
            table: table.into(),
        }
    }
}

/// High-level interface for inspecting and editing one table
///
/// Every operation opens its own connection and releases it before
/// returning; no state is shared between calls.
pub struct TableStore {
    /// Store configuration
    pub(crate) config: StoreConfig,
}

impl TableStore {
    /// Create a store from a configuration
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Create a store for the given database file and table
    pub fn with_table(db_path: impl Into<PathBuf>, table: impl Into<String>) -> Self {
        Self::new(StoreConfig::new(db_path, table))
    }

    /// Get the store configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Get the configured table name
    pub fn table(&self) -> &str {
        &self.config.table
    }

    /// Open the database for a single operation
    ///
    /// Read and edit paths require the file to exist already; only
    /// `create_table` creates it.
    pub(crate) fn open_database(&self) -> Result<Database> {
        if !self.config.db_path.exists() {
            return Err(StoreError::DatabaseNotFound(
                self.config.db_path.to_string_lossy().to_string(),
            ));
        }
        Database::open(&self.config.db_path)
    }

    /// Create the configured table, creating the database file if needed
    pub fn create_table(&self) -> Result<()> {
        debug!(table = %self.config.table, path = %self.config.db_path.display(), "creating table");
        let db = Database::create(&self.config.db_path)?;
        queries::create_table(db.connection()?, &self.config.table)
    }
}
