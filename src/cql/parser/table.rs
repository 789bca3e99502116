use log::{debug, trace};
use regex::Regex;

use super::CREATE_TABLE;
use crate::{
    catalog::{ColumnDefinition, TableDefinition},
    core::{resolve_type, CQLError, ErrorKind},
};

lazy_static! {
    static ref PRIMARY_KEY: Regex =
        Regex::new(r"(?i)\s*primary\s+key\s*").expect("primary key pattern");
    static ref STARTS_WITH_PAREN: Regex = Regex::new(r"^\s*\(").expect("paren pattern");
}

/// Decompose a single `CREATE TABLE` statement into a table definition.
pub fn parse_create_table(statement: &str) -> Result<TableDefinition, CQLError> {
    let captures = CREATE_TABLE.captures(statement);
    let name = captures.as_ref().and_then(|c| c.name("name"));
    let raw_columns = captures.as_ref().and_then(|c| c.name("columns"));

    let (name, raw_columns) = match (name, raw_columns) {
        (Some(name), Some(raw_columns)) => (name.as_str(), raw_columns.as_str()),
        (name, raw_columns) => {
            return Err(CQLError::new(
                ErrorKind::MalformedStatement,
                format!(
                    "could not parse table: (table name found - {}; columns found - {})",
                    name.is_some(),
                    raw_columns.is_some()
                ),
            ))
        }
    };

    let raw_columns = drop_primary_key(raw_columns);
    debug!("Column list of table {}: {}", name, raw_columns);

    let mut columns = vec![];
    for (position, raw_column) in raw_columns.split(',').enumerate() {
        let raw_column = raw_column.trim();
        if raw_column.is_empty() {
            continue;
        }

        let column = parse_column(position, raw_column)?;
        trace!("Column {}: {}", position, column);
        columns.push(column);
    }

    Ok(TableDefinition::new(name, columns))
}

/// Remove a `PRIMARY KEY` clause from the column list.
///
/// A clause followed by a parenthesized key expression is dropped together
/// with everything after it. A bare `PRIMARY KEY` marker on a column is
/// removed but the column definitions after it are kept.
fn drop_primary_key(raw_columns: &str) -> String {
    let mut parts = PRIMARY_KEY.splitn(raw_columns, 2);
    let prefix = parts.next().unwrap_or_default();

    match parts.next() {
        None => prefix.to_string(),
        Some(suffix) if STARTS_WITH_PAREN.is_match(suffix) => prefix.to_string(),
        Some(suffix) => format!("{} {}", prefix, suffix),
    }
}

/// Parse `<name> <type> [ignored...]`.
fn parse_column(position: usize, raw_column: &str) -> Result<ColumnDefinition, CQLError> {
    let malformed = || {
        CQLError::new(
            ErrorKind::MalformedColumn(position, raw_column.to_string()),
            format!("could not parse raw column {} '{}'", position, raw_column),
        )
    };

    let tokens = raw_column.split_whitespace().collect::<Vec<_>>();
    if tokens.len() < 2 {
        return Err(malformed());
    }

    let data_type = resolve_type(tokens[1]).map_err(|_| malformed())?;

    Ok(ColumnDefinition::new(tokens[0], data_type))
}
