//! Field editing
//!
//! This module provides the single write operation of the TableStore.

use tracing::debug;

use super::store::TableStore;
use crate::database::models::Value;
use crate::database::queries;
use crate::error::Result;

impl TableStore {
    /// Update one column of the rows matching an id value
    ///
    /// `new_value` and `id_value` are bound as data parameters; `column` and
    /// `id_column` are validated against the table's schema before the
    /// statement is assembled. Returns the affected-row count; zero means no
    /// row matched and is not an error.
    ///
    /// The store does not check that `id_column` is unique. Keying the edit
    /// on a non-unique column updates every matching row.
    pub fn edit_field(
        &self,
        column: &str,
        new_value: Value,
        id_column: &str,
        id_value: Value,
    ) -> Result<usize> {
        debug!(table = %self.config.table, column, id_column, "editing field");
        let db = self.open_database()?;
        queries::update_field(
            db.connection()?,
            &self.config.table,
            column,
            &new_value,
            id_column,
            &id_value,
        )
    }
}
