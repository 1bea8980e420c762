use super::TsType;

/// Outcome of analyzing one query. Exactly one of these is reported per call.
///
/// Every `start`/`end`/`position` is a byte offset into the query text that
/// was passed to the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("Empty query")]
    EmptyQuery,

    #[error("Syntax error at offset {position}")]
    SyntaxError { position: usize },

    #[error("Reserved keyword '{keyword}' at {start}..{end}")]
    SyntaxErrorReservedKeyword {
        keyword: String,
        start: usize,
        end: usize,
    },

    #[error("Unidentified word '{word}' at {start}..{end}")]
    SyntaxErrorUnknownToken {
        word: String,
        start: usize,
        end: usize,
    },

    #[error("Unknown table '{table}' at {start}..{end}")]
    UnknownTable {
        table: String,
        start: usize,
        end: usize,
    },

    #[error("Unknown column '{column}' in table '{table}' at {start}..{end}")]
    UnknownColumn {
        column: String,
        table: String,
        start: usize,
        end: usize,
    },

    #[error("Type {received} is not assignable to type {expected} at {start}..{end}")]
    ColumnTypeMismatch {
        expected: TsType,
        received: TsType,
        start: usize,
        end: usize,
    },

    #[error("{columns} columns but {values} values at {start}..{end}")]
    ColumnCountMismatch {
        columns: usize,
        values: usize,
        start: usize,
        end: usize,
    },
}

pub type AnalysisResult<T = ()> = std::result::Result<T, AnalysisError>;

impl AnalysisError {
    /// Stable numeric code, used for documentation and suppression.
    pub const fn code(&self) -> u32 {
        match self {
            AnalysisError::EmptyQuery => 1001,
            AnalysisError::SyntaxError { .. } => 1002,
            AnalysisError::SyntaxErrorReservedKeyword { .. } => 1003,
            AnalysisError::SyntaxErrorUnknownToken { .. } => 1004,
            AnalysisError::UnknownTable { .. } => 1005,
            AnalysisError::UnknownColumn { .. } => 1006,
            AnalysisError::ColumnTypeMismatch { .. } => 1007,
            AnalysisError::ColumnCountMismatch { .. } => 1008,
        }
    }

    /// Byte span of the offending text, when the error has one.
    pub const fn span(&self) -> Option<(usize, usize)> {
        match self {
            AnalysisError::EmptyQuery | AnalysisError::SyntaxError { .. } => None,
            AnalysisError::SyntaxErrorReservedKeyword { start, end, .. }
            | AnalysisError::SyntaxErrorUnknownToken { start, end, .. }
            | AnalysisError::UnknownTable { start, end, .. }
            | AnalysisError::UnknownColumn { start, end, .. }
            | AnalysisError::ColumnTypeMismatch { start, end, .. }
            | AnalysisError::ColumnCountMismatch { start, end, .. } => Some((*start, *end)),
        }
    }

    pub const fn is_syntax(&self) -> bool {
        matches!(
            self,
            AnalysisError::EmptyQuery
                | AnalysisError::SyntaxError { .. }
                | AnalysisError::SyntaxErrorReservedKeyword { .. }
                | AnalysisError::SyntaxErrorUnknownToken { .. }
        )
    }
}
