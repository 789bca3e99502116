use std::{collections::HashMap, fmt::Display, str::FromStr};

use super::{CQLError, ErrorKind};

/// Native scalar column types.
/// Variants are declared in the alphabetical order of their keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NativeType {
    Ascii,
    Bigint,
    Blob,
    Boolean,
    Counter,
    Date,
    Decimal,
    Double,
    Duration,
    Float,
    Inet,
    Int,
    Smallint,
    Text,
    Time,
    Timestamp,
    Timeuuid,
    Tinyint,
    Uuid,
    Varchar,
    Varint,
}

lazy_static! {
    static ref TYPE_CATALOG: HashMap<&'static str, NativeType> = NativeType::ALL
        .iter()
        .map(|typ| (typ.keyword(), *typ))
        .collect();
}

impl NativeType {
    pub const ALL: [NativeType; 21] = [
        NativeType::Ascii,
        NativeType::Bigint,
        NativeType::Blob,
        NativeType::Boolean,
        NativeType::Counter,
        NativeType::Date,
        NativeType::Decimal,
        NativeType::Double,
        NativeType::Duration,
        NativeType::Float,
        NativeType::Inet,
        NativeType::Int,
        NativeType::Smallint,
        NativeType::Text,
        NativeType::Time,
        NativeType::Timestamp,
        NativeType::Timeuuid,
        NativeType::Tinyint,
        NativeType::Uuid,
        NativeType::Varchar,
        NativeType::Varint,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            NativeType::Ascii => "ascii",
            NativeType::Bigint => "bigint",
            NativeType::Blob => "blob",
            NativeType::Boolean => "boolean",
            NativeType::Counter => "counter",
            NativeType::Date => "date",
            NativeType::Decimal => "decimal",
            NativeType::Double => "double",
            NativeType::Duration => "duration",
            NativeType::Float => "float",
            NativeType::Inet => "inet",
            NativeType::Int => "int",
            NativeType::Smallint => "smallint",
            NativeType::Text => "text",
            NativeType::Time => "time",
            NativeType::Timestamp => "timestamp",
            NativeType::Timeuuid => "timeuuid",
            NativeType::Tinyint => "tinyint",
            NativeType::Uuid => "uuid",
            NativeType::Varchar => "varchar",
            NativeType::Varint => "varint",
        }
    }
}

impl Display for NativeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Look up a type keyword, ignoring case and surrounding whitespace.
pub fn resolve_type(name: &str) -> Result<NativeType, CQLError> {
    let normalized = name.trim().to_lowercase();
    TYPE_CATALOG.get(normalized.as_str()).copied().ok_or_else(|| {
        CQLError::new(
            ErrorKind::UnknownType(name.to_string()),
            format!("could not recognise type '{}'", name),
        )
    })
}

impl FromStr for NativeType {
    type Err = CQLError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve_type(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_keyword() {
        for typ in NativeType::ALL {
            assert_eq!(resolve_type(typ.keyword()).unwrap(), typ);
        }
    }

    #[test]
    fn resolve_ignores_case_and_padding() {
        assert_eq!(resolve_type("  TimeUUID\t").unwrap(), NativeType::Timeuuid);
        assert_eq!("VARCHAR".parse::<NativeType>().unwrap(), NativeType::Varchar);
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = resolve_type("invalid").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownType("invalid".to_string()));

        // Parameterized and collection types are not native scalars.
        assert!(resolve_type("list<int>").is_err());
        assert!(resolve_type("").is_err());
    }

    #[test]
    fn display_is_keyword() {
        assert_eq!(NativeType::Ascii.to_string(), "ascii");
        assert_eq!(NativeType::Smallint.to_string(), "smallint");
    }

    #[test]
    fn ordering_follows_declaration() {
        let mut sorted = NativeType::ALL;
        sorted.sort();
        assert_eq!(sorted, NativeType::ALL);
        assert!(NativeType::Ascii < NativeType::Varint);
    }
}
