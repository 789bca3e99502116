use std::{
    fs::File,
    io::{BufReader, Write},
    path::{Path, PathBuf},
};

use clap::{ArgAction, Parser, ValueEnum};
use log::{info, LevelFilter};

use crate::{
    core::{CQLError, ErrorKind},
    cql::{parse_queries, parse_table},
    util::level_for_verbosity,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `name: {col (type), ...}` on one line
    Compact,
    /// One column per line with aligned types
    Pretty,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "cqlschema", version)]
#[command(about = "Extract the table schema from a CQL CREATE TABLE statement")]
pub struct Config {
    /// Path to file containing the create table statement
    #[arg(
        short = 't',
        long = "table-definitions",
        default_value = "tables.cql",
        env = "CQLSCHEMA_TABLES"
    )]
    pub table_definitions: PathBuf,

    /// Path to file containing the intended queries
    #[arg(
        short = 'q',
        long = "queries",
        default_value = "queries.cql",
        env = "CQLSCHEMA_QUERIES"
    )]
    pub queries: PathBuf,

    #[arg(short = 'f', long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    pub fn log_level(&self) -> LevelFilter {
        level_for_verbosity(self.verbose)
    }
}

pub struct CliApp<O: Write> {
    config: Config,

    output: O,
}

impl<O: Write> CliApp<O> {
    pub fn new(config: Config, output: O) -> Self {
        Self { config, output }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    pub fn run(&mut self) -> Result<(), CQLError> {
        let tables = open(&self.config.table_definitions)?;
        let queries = open(&self.config.queries)?;

        let table = parse_table(BufReader::new(tables))?;
        parse_queries(BufReader::new(queries))?;

        let rendered = match self.config.format {
            OutputFormat::Compact => table.to_string(),
            OutputFormat::Pretty => table.to_pretty_string(),
        };
        self.print(&rendered)?;
        self.print("\n")?;

        Ok(())
    }

    fn print(&mut self, string: &str) -> Result<(), CQLError> {
        self.output.write_all(string.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}

fn open(path: &Path) -> Result<File, CQLError> {
    info!("Reading {}", path.display());
    File::open(path).map_err(|e| {
        CQLError::new(
            ErrorKind::IoError,
            format!("failed to read file '{}': {}", path.display(), e),
        )
    })
}
