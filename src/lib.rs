//! # RowCore
//!
//! A small toolkit for inspecting and editing rows in a local single-table
//! SQLite database.
//!
//! ## Features
//!
//! - Runtime schema discovery (ordered column listing)
//! - Full-table dumps with result-metadata headers
//! - Single-field edits keyed on a caller-chosen id column
//! - Table creation with a canonical column layout
//! - Allow-list validation of runtime-supplied identifiers
//!
//! ## Example
//!
//! ```no_run
//! use rowcore::{TableStore, Value};
//!
//! let store = TableStore::with_table("dragon.db", "dragons");
//!
//! let dump = store.dump().unwrap();
//! println!("{}", dump);
//!
//! let affected = store
//!     .edit_field("element", Value::from("Fire"), "id", Value::from(1i64))
//!     .unwrap();
//! println!("{} row(s) affected", affected);
//! ```

pub mod business;
pub mod database;
pub mod error;

// Re-export main types
pub use business::{StoreConfig, TableStore};
pub use database::models::{ColumnInfo, TableDump, Value};
pub use error::{Result, StoreError};

/// Default database filename
pub const DEFAULT_DATABASE_FILENAME: &str = "dragon.db";

/// Default table name
pub const DEFAULT_TABLE_NAME: &str = "dragons";
