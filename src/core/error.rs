use std::{error::Error, fmt::Display};

use enum_as_inner::EnumAsInner;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CQLError {
    pub kind: ErrorKind,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, EnumAsInner)]
pub enum ErrorKind {
    /// Type keyword is not one of the native types.
    UnknownType(String),
    /// No statement looks like a `CREATE TABLE`.
    NoMatch,
    /// More than one statement looks like a `CREATE TABLE` (number of matches).
    AmbiguousInput(usize),
    /// Table name or column list could not be captured.
    MalformedStatement,
    /// (position, raw column text)
    MalformedColumn(usize, String),
    IoError,
}

impl Error for CQLError {}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::UnknownType(_) => write!(f, "Unknown Type"),
            ErrorKind::NoMatch => write!(f, "No Match"),
            ErrorKind::AmbiguousInput(_) => write!(f, "Ambiguous Input"),
            ErrorKind::MalformedStatement => write!(f, "Malformed Statement"),
            ErrorKind::MalformedColumn(_, _) => write!(f, "Malformed Column"),
            ErrorKind::IoError => write!(f, "IO Error"),
        }
    }
}

impl Display for CQLError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl CQLError {
    pub fn new(kind: ErrorKind, message: impl AsRef<str>) -> Self {
        Self {
            kind,
            message: message.as_ref().to_string(),
        }
    }
}

impl From<std::io::Error> for CQLError {
    fn from(e: std::io::Error) -> Self {
        CQLError::new(ErrorKind::IoError, e.to_string())
    }
}
