pub mod parser;
pub mod query;

pub use parser::{extract_create_table, parse_create_table, parse_table};
pub use query::parse_queries;
