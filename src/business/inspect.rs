//! Schema inspection and table reading
//!
//! This module provides the read-only operations of the TableStore.

use tracing::debug;

use super::store::TableStore;
use crate::database::models::{ColumnInfo, TableDump};
use crate::database::queries;
use crate::error::Result;

impl TableStore {
    /// Get the ordered column list of the configured table
    pub fn columns(&self) -> Result<Vec<ColumnInfo>> {
        let db = self.open_database()?;
        queries::table_columns(db.connection()?, &self.config.table)
    }

    /// Get just the column names, in declared order
    pub fn column_names(&self) -> Result<Vec<String>> {
        let db = self.open_database()?;
        queries::column_names(db.connection()?, &self.config.table)
    }

    /// Read all rows of the configured table
    pub fn dump(&self) -> Result<TableDump> {
        debug!(table = %self.config.table, "dumping table");
        let db = self.open_database()?;
        queries::fetch_all(db.connection()?, &self.config.table)
    }
}
