//! RowCore Command-Line Interface
//!
//! Inspect and edit rows in a local SQLite table.
//!
//! # Usage
//!
//! ```bash
//! # Create the table (and database file) if missing
//! rowctl -D dragon.db -t dragons create-table
//!
//! # List the table's columns
//! rowctl -D dragon.db -t dragons columns
//!
//! # Print all rows
//! rowctl -D dragon.db -t dragons dump
//!
//! # Set element to Fire for the row where id = 1
//! rowctl -D dragon.db -t dragons edit --column element --value Fire --id 1
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rowcore::{StoreConfig, TableStore, Value};

/// RowCore command-line interface
#[derive(Parser, Debug)]
#[command(
    name = "rowctl",
    version,
    about = "Inspect and edit rows in a local SQLite table",
    long_about = "A command-line interface for inspecting and editing rows in a local\n\
                  single-table SQLite database. Values are bound as parameters; table and\n\
                  column names are validated against the live schema."
)]
struct Args {
    /// Database file
    #[arg(short = 'D', long, env = "ROWCTL_DATABASE")]
    database: Option<PathBuf>,

    /// Table to operate on
    #[arg(short = 't', long, env = "ROWCTL_TABLE")]
    table: Option<String>,

    /// Configuration file path
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the table (and the database file) if missing
    CreateTable,
    /// List the table's columns
    Columns,
    /// Print all rows with a column header
    Dump,
    /// Update one field of the rows matching an id value
    Edit {
        /// Column to update
        #[arg(short, long)]
        column: String,

        /// New value (parsed as integer, then real, then text)
        #[arg(short = 'V', long)]
        value: String,

        /// Column identifying the target rows
        #[arg(long, default_value = "id")]
        id_column: String,

        /// Value of the identifying column
        #[arg(long)]
        id: String,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);

    let config = load_config(&args)?;
    let store = TableStore::new(config);

    match &args.command {
        Command::CreateTable => {
            store.create_table()?;
            println!(
                "Table '{}' is ready in '{}'.",
                store.table(),
                store.config().db_path.display()
            );
        }
        Command::Columns => {
            let names = store.column_names()?;
            println!("Fields in the table: {names:?}");
        }
        Command::Dump => {
            let dump = store.dump()?;
            print!("{dump}");
        }
        Command::Edit {
            column,
            value,
            id_column,
            id,
        } => {
            let affected =
                store.edit_field(column, parse_value(value), id_column, parse_value(id))?;
            println!(
                "Updated '{column}' to '{value}' for rows where {id_column} = {id} \
                 ({affected} row(s) affected)"
            );
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("rowcore=debug,rowctl=debug")
    } else {
        EnvFilter::new("rowcore=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

fn load_config(args: &Args) -> Result<StoreConfig> {
    // Start from the config file (or defaults), then apply flag overrides
    let mut config = if let Some(path) = &args.config {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?
    } else {
        StoreConfig::default()
    };

    if let Some(db) = &args.database {
        config.db_path = db.clone();
    }
    if let Some(table) = &args.table {
        config.table = table.clone();
    }

    Ok(config)
}

/// Parse a command-line literal into a SQL value
fn parse_value(input: &str) -> Value {
    if let Ok(i) = input.parse::<i64>() {
        return Value::Integer(i);
    }
    if let Ok(r) = input.parse::<f64>() {
        return Value::Real(r);
    }
    Value::Text(input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("1"), Value::Integer(1));
        assert_eq!(parse_value("-42"), Value::Integer(-42));
        assert_eq!(parse_value("1.5"), Value::Real(1.5));
        assert_eq!(parse_value("Fire"), Value::Text("Fire".to_string()));
        // Leading zeros still parse as integers
        assert_eq!(parse_value("007"), Value::Integer(7));
    }

    #[test]
    fn test_edit_args() {
        let args = Args::parse_from([
            "rowctl", "-D", "dragon.db", "-t", "dragons", "edit", "--column", "element",
            "--value", "Fire", "--id", "1",
        ]);
        match args.command {
            Command::Edit {
                column,
                value,
                id_column,
                id,
            } => {
                assert_eq!(column, "element");
                assert_eq!(value, "Fire");
                assert_eq!(id_column, "id");
                assert_eq!(id, "1");
            }
            other => panic!("Expected edit subcommand, got {other:?}"),
        }
    }
}
