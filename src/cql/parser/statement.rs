use log::{debug, warn};

use super::CREATE_TABLE;
use crate::core::{CQLError, ErrorKind};

/// Split raw input into `;`-delimited statements. Line breaks are dropped first
/// since a statement may span several lines.
pub fn split_statements(source: &str) -> Vec<String> {
    let joined = source.replace(['\n', '\r'], "");
    joined.split(';').map(|s| s.to_string()).collect()
}

/// Select the one statement that looks like a `CREATE TABLE`.
pub fn extract_create_table(source: &str) -> Result<String, CQLError> {
    let statements = split_statements(source);
    debug!("Found {} candidate statements", statements.len());

    let mut matches = statements
        .into_iter()
        .filter(|statement| CREATE_TABLE.is_match(statement))
        .collect::<Vec<_>>();

    match matches.len() {
        0 => Err(CQLError::new(
            ErrorKind::NoMatch,
            "found no create table statement",
        )),
        1 => Ok(matches.remove(0)),
        n => {
            warn!("Found {} create table statements, expected one", n);
            Err(CQLError::new(
                ErrorKind::AmbiguousInput(n),
                format!("found {} create table statements: {:?}", n, matches),
            ))
        }
    }
}
