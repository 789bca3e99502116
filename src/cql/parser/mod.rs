mod statement;
mod table;

use std::io::Read;

use log::info;
use regex::Regex;

pub use statement::{extract_create_table, split_statements};
pub use table::parse_create_table;

use crate::{catalog::TableDefinition, core::CQLError};

lazy_static! {
    /// Shape of a `CREATE TABLE` statement. Captures the table name and the raw
    /// column list, leaving out a trailing parenthesized `PRIMARY KEY (...)` clause
    /// when there is one.
    static ref CREATE_TABLE: Regex = Regex::new(
        r"(?i)create\s+table\s+(?P<name>[^\s]+)\s*\((?P<columns>.*?)(primary\s+key\s*\(.*\))?\).*"
    )
    .expect("create table pattern");
}

/// Read a stream of statements and parse the single `CREATE TABLE` in it.
pub fn parse_table<R: Read>(mut reader: R) -> Result<TableDefinition, CQLError> {
    let mut bytes = vec![];
    reader.read_to_end(&mut bytes)?;
    let source = String::from_utf8_lossy(&bytes);

    let statement = extract_create_table(&source)?;
    let table = parse_create_table(&statement)?;
    info!(
        "Parsed table {} with {} columns",
        table.name,
        table.columns.len()
    );

    Ok(table)
}
