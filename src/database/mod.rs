//! Database layer for RowCore
//!
//! Handles SQLite database operations including:
//! - Connection lifecycle management
//! - Schema introspection and table creation
//! - Full-table reads and single-field updates

pub mod connection;
pub mod models;
pub mod queries;
pub mod schema;

pub use connection::Database;
pub use models::*;
