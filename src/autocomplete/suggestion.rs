use crate::*;
use derive_more::Display;
use itertools::Itertools as _;
use serde::{Serialize, Serializer, ser::SerializeMap as _};

/// A completion entry. Variants represent the different kinds of things that
/// can be suggested while the user types a query: keywords, schema tables and
/// columns of the tables the query already references.
///
/// Serialized as a flat object tagged by `kind`, carrying its `sortText`.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Suggestion {
    #[display("{name}")]
    Keyword { name: String },
    #[display("{name}")]
    Table { name: String },
    #[display("{table}.{name}")]
    Column {
        table: String,
        name: String,
        ts_type: TsType,
    },
}
pub type Suggestions = Vec<Suggestion>;

impl Suggestion {
    /// Text inserted on completion.
    pub fn name(&self) -> &str {
        match self {
            Suggestion::Keyword { name }
            | Suggestion::Table { name }
            | Suggestion::Column { name, .. } => name,
        }
    }

    /// Key the editor orders entries by; keywords sort by their lower-case form.
    pub fn sort_text(&self) -> String {
        match self {
            Suggestion::Keyword { name } => name.to_lowercase(),
            other => other.name().to_string(),
        }
    }
}

impl Serialize for Suggestion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self {
            Suggestion::Keyword { name } => {
                map.serialize_entry("kind", "keyword")?;
                map.serialize_entry("name", name)?;
            }
            Suggestion::Table { name } => {
                map.serialize_entry("kind", "table")?;
                map.serialize_entry("name", name)?;
            }
            Suggestion::Column {
                table,
                name,
                ts_type,
            } => {
                map.serialize_entry("kind", "column")?;
                map.serialize_entry("table", table)?;
                map.serialize_entry("name", name)?;
                map.serialize_entry("tsType", ts_type)?;
            }
        }
        map.serialize_entry("sortText", &self.sort_text())?;
        map.end()
    }
}

/// Completion entries for `query`: every schema table, then the columns of
/// the schema tables the query references, then every keyword.
///
/// Column entries need a parse; when the query cannot be parsed (or the oracle
/// faults) only tables and keywords are offered.
pub fn completions<O: ParserOracle>(
    analyzer: &Analyzer<O>,
    query: &str,
    schema: Option<&Schema>,
) -> Suggestions {
    let mut out = Suggestions::new();
    if let Some(schema) = schema {
        out.extend(schema.table_names().map(|name| Suggestion::Table {
            name: name.to_string(),
        }));

        if let Some(parsed) = analyzer.parse_result(query) {
            let referenced = parsed
                .tables()
                .unique_by(|t| t.name.clone())
                .filter_map(|t| schema.table(&t.name));
            for schema_table in referenced {
                out.extend(schema_table.columns.iter().map(|c| Suggestion::Column {
                    table: schema_table.name.clone(),
                    name: c.name.clone(),
                    ts_type: c.ts_type,
                }));
            }
        }
    }
    out.extend(KEYWORDS.iter().map(|kw| Suggestion::Keyword {
        name: kw.to_string(),
    }));
    trace!("Offering {} completions", out.len());
    out
}
