//! Parser oracle: turns SQL text into a structured parse or a syntax error.
//!
//! The analyzer only depends on the [`ParserOracle`] trait and the plain data
//! types in this module. [`SqlParserOracle`] is the in-process implementation
//! backed by `sqlparser`.
crate::reexport!(collector);
crate::reexport!(literal);
crate::reexport!(parser);

use crate::TsType;
use derive_more::Display;
use serde::Serialize;
use std::ops::Range;

/// Parse of one query text, or the syntax error that stopped it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "result")]
pub enum ParseResult {
    Parsed { statements: Vec<Statement> },
    SyntaxError(SyntaxError),
}

impl ParseResult {
    pub fn statements(&self) -> &[Statement] {
        match self {
            ParseResult::Parsed { statements } => statements,
            ParseResult::SyntaxError(_) => &[],
        }
    }

    /// Every table reference across all statements, in order.
    pub fn tables(&self) -> impl Iterator<Item = &QueryTable> {
        self.statements().iter().flat_map(|s| s.tables.iter())
    }
}

/// Offending token reported by the oracle.
///
/// `near` is empty when no token could be recovered. `position` is the
/// exclusive end byte offset of that token, `None` at end of input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxError {
    pub near: String,
    pub position: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
    #[display("DDL")]
    Ddl,
    Show,
    Use,
    Other,
}

impl StatementKind {
    pub const fn is_ddl(self) -> bool {
        matches!(self, StatementKind::Ddl)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statement {
    pub kind: StatementKind,
    /// Byte range of the statement's text, up to its terminating `;`.
    pub range: Range<usize>,
    pub tables: Vec<QueryTable>,
    /// Arity of an INSERT's explicit column list against its first row.
    pub row_arity: Option<RowArity>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowArity {
    pub columns: usize,
    pub values: usize,
}

impl RowArity {
    pub const fn matches(&self) -> bool {
        self.columns == self.values
    }
}

/// A table as referenced by the query, not as declared in the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryTable {
    pub name: String,
    pub alias: Option<String>,
    pub columns: Vec<QueryColumn>,
}

impl QueryTable {
    pub fn new(name: impl Into<String>, alias: Option<String>) -> Self {
        Self {
            name: name.into(),
            alias,
            columns: Vec::new(),
        }
    }

    /// True if `qualifier` refers to this table: its alias, or its name when
    /// unaliased.
    pub fn answers_to(&self, qualifier: &str) -> bool {
        match &self.alias {
            Some(alias) => alias == qualifier,
            None => self.name == qualifier,
        }
    }

    pub fn column(&self, name: &str) -> Option<&QueryColumn> {
        self.columns.iter().find(|c| c.name == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnContext {
    /// `column <op> value`, or a bare reference.
    #[display("expression")]
    Expression,
    /// Positional value of an INSERT column list.
    #[display("list")]
    List,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryColumn {
    pub name: String,
    pub context: ColumnContext,
    pub operator: Option<String>,
    /// Raw literal text as the parser printed it.
    pub value: Option<String>,
    pub ts_type: Option<TsType>,
}

impl QueryColumn {
    pub fn reference(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            context: ColumnContext::Expression,
            operator: None,
            value: None,
            ts_type: None,
        }
    }

    pub const fn has_value(&self) -> bool {
        self.ts_type.is_some()
    }
}

/// Infrastructure fault inside the oracle. Never a property of the query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("Parser panicked: {0}")]
    Panicked(String),

    #[error("Parser recursion limit exceeded")]
    RecursionLimit,

    #[error("Query of {len} bytes exceeds the {max} byte limit")]
    TooLarge { len: usize, max: usize },
}

/// Seam between the analyzer and whatever grammar implementation parses SQL.
pub trait ParserOracle: Send + Sync {
    fn parse(&self, query: &str) -> std::result::Result<ParseResult, OracleError>;
}

impl<O: ParserOracle + ?Sized> ParserOracle for std::sync::Arc<O> {
    fn parse(&self, query: &str) -> std::result::Result<ParseResult, OracleError> {
        (**self).parse(query)
    }
}
