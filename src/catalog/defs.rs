use std::fmt::Display;

use crate::core::NativeType;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnDefinition {
    pub name: String,
    pub data_type: NativeType,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, data_type: NativeType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

impl Display for ColumnDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.data_type)
    }
}

impl TableDefinition {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDefinition>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    /// Multi-line rendering with type names aligned in one column.
    pub fn to_pretty_string(&self) -> String {
        format!("{:#}", self)
    }
}

/// Number of spaces between the longest column name and its type.
const TYPE_COLUMN_GAP: usize = 2;

impl Display for TableDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.columns.is_empty() {
            return write!(f, "{}: {{}}", self.name);
        }

        if !f.alternate() {
            return write!(
                f,
                "{}: {{{}}}",
                self.name,
                self.columns
                    .iter()
                    .map(|column| column.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        let width = self
            .columns
            .iter()
            .map(|column| column.name.chars().count())
            .max()
            .unwrap_or(0)
            + TYPE_COLUMN_GAP;

        let lines = self
            .columns
            .iter()
            .map(|column| {
                let padding = width - column.name.chars().count();
                format!("{}{}{}", column.name, " ".repeat(padding), column.data_type)
            })
            .collect::<Vec<_>>();

        write!(f, "{}: {{\n{}\n}}", self.name, lines.join(",\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: &[(&str, NativeType)]) -> TableDefinition {
        TableDefinition::new(
            "foo",
            columns
                .iter()
                .map(|(name, typ)| ColumnDefinition::new(*name, *typ))
                .collect(),
        )
    }

    #[test]
    fn column_display() {
        assert_eq!(
            ColumnDefinition::new("foo", NativeType::Smallint).to_string(),
            "foo (smallint)"
        );
        assert_eq!(
            ColumnDefinition::new("foo", NativeType::Boolean).to_string(),
            "foo (boolean)"
        );
    }

    #[test]
    fn compact_display() {
        assert_eq!(table(&[("bar", NativeType::Int)]).to_string(), "foo: {bar (int)}");
        assert_eq!(
            table(&[("bar", NativeType::Int), ("baz", NativeType::Int)]).to_string(),
            "foo: {bar (int), baz (int)}"
        );
        assert_eq!(table(&[]).to_string(), "foo: {}");
    }

    #[test]
    fn pretty_display() {
        assert_eq!(
            table(&[("bar", NativeType::Int)]).to_pretty_string(),
            "foo: {\nbar  int\n}"
        );
        assert_eq!(
            table(&[("bar", NativeType::Int), ("baz", NativeType::Int)]).to_pretty_string(),
            "foo: {\nbar  int,\nbaz  int\n}"
        );
        assert_eq!(
            table(&[("barbaric", NativeType::Int), ("baz", NativeType::Text)]).to_pretty_string(),
            "foo: {\nbarbaric  int,\nbaz       text\n}"
        );
    }

    #[test]
    fn pretty_display_without_columns() {
        assert_eq!(table(&[]).to_pretty_string(), "foo: {}");
        assert_eq!(format!("{:#}", table(&[])), table(&[]).to_string());
    }
}
