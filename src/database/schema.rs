//! Schema definitions and identifier handling

use crate::error::{Result, StoreError};

/// Column layout for newly created tables
pub const DEFAULT_COLUMNS_SQL: &str = r#"
    id      INTEGER PRIMARY KEY,
    name    TEXT NOT NULL,
    element TEXT,
    power   INTEGER
"#;

/// Build the CREATE TABLE statement for a new table
pub fn create_table_sql(table: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        quote_identifier(table),
        DEFAULT_COLUMNS_SQL,
    )
}

/// Quote an identifier for interpolation into statement text
///
/// Wraps the name in double quotes and doubles any embedded quote, so the
/// result is always read as a single identifier token.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Reject identifiers that cannot name a table or column
pub fn validate_identifier(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidIdentifier(name.to_string()));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_identifier_plain() {
        assert_eq!(quote_identifier("dragons"), "\"dragons\"");
    }

    #[test]
    fn test_quote_identifier_embedded_quote() {
        assert_eq!(quote_identifier("dra\"gons"), "\"dra\"\"gons\"");
    }

    #[test]
    fn test_quote_identifier_keeps_injection_inert() {
        // A hostile name stays inside the quoted token
        let quoted = quote_identifier("x; DROP TABLE dragons; --");
        assert!(quoted.starts_with('"') && quoted.ends_with('"'));
    }

    #[test]
    fn test_validate_identifier() {
        assert_eq!(validate_identifier("dragons").unwrap(), "dragons");
        assert_eq!(validate_identifier("  dragons ").unwrap(), "dragons");
        assert!(validate_identifier("").is_err());
        assert!(validate_identifier("   ").is_err());
    }

    #[test]
    fn test_create_table_sql() {
        let sql = create_table_sql("dragons");
        assert!(sql.contains("CREATE TABLE IF NOT EXISTS \"dragons\""));
        assert!(sql.contains("id"));
        assert!(sql.contains("name"));
        assert!(sql.contains("element"));
        assert!(sql.contains("power"));
    }
}
