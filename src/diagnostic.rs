//! User-facing diagnostics rendered from analysis errors.
use crate::*;
use derive_more::Display;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[display("error")]
    Error,
    #[display("warning")]
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Byte offset into the query; `-1` points at the opening delimiter
    /// enclosing an empty query.
    pub start: i64,
    pub length: usize,
    pub code: u32,
}

/// Turns an [`AnalysisError`] into a [`Diagnostic`], adding "did you mean"
/// suggestions from the keyword list or the schema.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagnosticFormatter<'a> {
    schema: Option<&'a Schema>,
    database_name: Option<&'a str>,
}

impl<'a> DiagnosticFormatter<'a> {
    pub fn new(schema: Option<&'a Schema>, database_name: Option<&'a str>) -> Self {
        Self {
            schema,
            database_name,
        }
    }

    pub fn format(&self, query: &str, error: &AnalysisError) -> Diagnostic {
        let (severity, message) = match error {
            AnalysisError::EmptyQuery => (Severity::Error, "Empty MySQL query.".to_string()),
            AnalysisError::SyntaxError { .. } => {
                (Severity::Error, "MySQL Syntax Error.".to_string())
            }
            AnalysisError::SyntaxErrorReservedKeyword { keyword, .. } => (
                Severity::Error,
                format!(
                    "MySQL Syntax Error. The problem is near the word '{keyword}', which is a \
                     reserved keyword. Are you missing a semicolon? Did you forget to backtick \
                     a column name?"
                ),
            ),
            AnalysisError::SyntaxErrorUnknownToken { word, .. } => (
                Severity::Error,
                format!(
                    "MySQL Syntax Error. Unidentified word '{word}'.{}",
                    did_you_mean(correction(word, KEYWORDS.iter().copied()))
                ),
            ),
            AnalysisError::UnknownTable { table, .. } => {
                let location = match self.database_name {
                    Some(database) => format!(" in database '{database}'"),
                    None => String::new(),
                };
                let names = self.schema.into_iter().flat_map(|s| s.table_names());
                (
                    Severity::Warning,
                    format!(
                        "Table '{table}' does not exist{location}.{}",
                        did_you_mean(correction(table, names))
                    ),
                )
            }
            AnalysisError::UnknownColumn { column, table, .. } => {
                let names = self
                    .schema
                    .and_then(|s| s.table(table))
                    .into_iter()
                    .flat_map(|t| t.column_names());
                (
                    Severity::Warning,
                    format!(
                        "Column '{column}' does not exist in table '{table}'.{}",
                        did_you_mean(correction(column, names))
                    ),
                )
            }
            AnalysisError::ColumnTypeMismatch {
                expected, received, ..
            } => (
                Severity::Warning,
                format!("Type {received} is not assignable to type {expected}"),
            ),
            AnalysisError::ColumnCountMismatch { .. } => (
                Severity::Error,
                "Column count does not match row count.".to_string(),
            ),
        };

        let (start, length) = match (error, error.span()) {
            (AnalysisError::EmptyQuery, _) => (-1, 2),
            (_, Some((start, end))) => (start as i64, end.saturating_sub(start)),
            (_, None) => (0, query.len()),
        };

        Diagnostic {
            severity,
            message,
            start,
            length,
            code: error.code(),
        }
    }
}

fn did_you_mean(correction: Option<&str>) -> String {
    correction
        .map(|c| format!(" Did you mean '{c}'?"))
        .unwrap_or_default()
}

/// Analyze `query` and render the outcome as zero or one diagnostic.
pub fn diagnose<O: ParserOracle>(
    analyzer: &Analyzer<O>,
    query: &str,
    schema: Option<&Schema>,
    database_name: Option<&str>,
) -> Vec<Diagnostic> {
    match analyzer.analyze(query, schema) {
        Ok(()) => Vec::new(),
        Err(error) => {
            debug!("Query failed analysis: {error}");
            vec![DiagnosticFormatter::new(schema, database_name).format(query, &error)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn diagnostic(query: &str, database: Option<&str>) -> Option<Diagnostic> {
        common_init();
        let schema = fixture_schema();
        diagnose(&Analyzer::new(), query, Some(&schema), database).pop()
    }

    #[test]
    fn empty_query_highlights_delimiters() {
        assert_eq!(
            diagnostic("", None),
            Some(Diagnostic {
                severity: Severity::Error,
                message: "Empty MySQL query.".into(),
                start: -1,
                length: 2,
                code: 1001,
            })
        );
    }

    #[test]
    fn generic_syntax_error_spans_the_query() {
        assert_eq!(
            diagnostic("SELECT * FROM users WHERE", None),
            Some(Diagnostic {
                severity: Severity::Error,
                message: "MySQL Syntax Error.".into(),
                start: 0,
                length: 25,
                code: 1002,
            })
        );
    }

    #[test]
    fn reserved_keyword_message() {
        let d = diagnostic("SELECT 1 SELECT", None).unwrap();
        assert_eq!(
            d.message,
            "MySQL Syntax Error. The problem is near the word 'SELECT', which is a reserved \
             keyword. Are you missing a semicolon? Did you forget to backtick a column name?"
        );
        assert_eq!((d.start, d.length, d.code), (9, 6, 1003));
    }

    #[test]
    fn unknown_token_suggests_keyword() {
        let d = diagnostic("SELECT * FRM users", None).unwrap();
        assert_eq!(d.message, "MySQL Syntax Error. Unidentified word 'FRM'. Did you mean 'FROM'?");
        assert_eq!((d.severity, d.start, d.length, d.code), (Severity::Error, 9, 3, 1004));
    }

    #[rstest]
    #[case(
        Some("app"),
        "Table 'user' does not exist in database 'app'. Did you mean 'users'?"
    )]
    #[case(None, "Table 'user' does not exist. Did you mean 'users'?")]
    fn unknown_table_message(#[case] database: Option<&str>, #[case] message: &str) {
        let d = diagnostic("SELECT * FROM user", database).unwrap();
        assert_eq!(d.message, message);
        assert_eq!((d.severity, d.start, d.length, d.code), (Severity::Warning, 14, 4, 1005));
    }

    #[test]
    fn unknown_column_suggests_from_its_table() {
        let d = diagnostic("SELECT emial FROM users", None).unwrap();
        assert_eq!(
            d.message,
            "Column 'emial' does not exist in table 'users'. Did you mean 'email'?"
        );
        assert_eq!((d.start, d.length, d.code), (7, 5, 1006));
    }

    #[test]
    fn type_mismatch_message() {
        let d = diagnostic("SELECT * FROM users WHERE is_admin = 'yes'", None).unwrap();
        assert_eq!(d.message, "Type string is not assignable to type boolean");
        assert_eq!((d.severity, d.start, d.length, d.code), (Severity::Warning, 37, 5, 1007));
    }

    #[test]
    fn count_mismatch_is_an_error() {
        let d = diagnostic("INSERT INTO users (id, email) VALUES (1)", None).unwrap();
        assert_eq!(d.message, "Column count does not match row count.");
        assert_eq!((d.severity, d.start, d.length, d.code), (Severity::Error, 30, 6, 1008));
    }

    #[test]
    fn severities_render_lowercase() {
        for (severity, label) in [(Severity::Error, "error"), (Severity::Warning, "warning")] {
            assert_eq!(severity.to_string(), label);
            assert_eq!(serde_json::to_value(severity).unwrap(), label);
        }
    }

    #[test]
    fn no_suggestion_without_candidates() {
        let error = AnalysisError::UnknownTable { table: "users".into(), start: 14, end: 19 };
        let d = DiagnosticFormatter::default().format("SELECT * FROM users", &error);
        assert_eq!(d.message, "Table 'users' does not exist.");
    }

    #[test]
    fn clean_queries_have_no_diagnostics() {
        assert_eq!(diagnostic("SELECT id FROM users WHERE id = 1", None), None);
    }
}
