//! Query analyzer: parse (memoized), classify syntax failures, then check
//! tables, columns and literal types against the schema.
use crate::*;
use moka::sync::Cache;
use regex::Regex;
use std::sync::Arc;

pub const DEFAULT_CACHE_CAPACITY: u64 = 512;

/// Analyzes queries against an optional schema.
///
/// Parse results are cached by exact query text in a bounded cache shared by
/// clones of the analyzer. Oracle faults are never cached.
#[derive(Clone)]
pub struct Analyzer<O: ParserOracle = SqlParserOracle> {
    oracle: O,
    cache: Cache<String, Arc<ParseResult>>,
}

/// Built from the process-wide [`config()`].
impl Default for Analyzer {
    fn default() -> Self {
        Self::from_config(config())
    }
}

impl Analyzer {
    pub fn new() -> Self {
        Self::with_oracle(SqlParserOracle::default(), DEFAULT_CACHE_CAPACITY)
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_oracle(
            SqlParserOracle::new(config.max_query_len),
            config.cache_capacity,
        )
    }
}

impl<O: ParserOracle> Analyzer<O> {
    pub fn with_oracle(oracle: O, cache_capacity: u64) -> Self {
        Self {
            oracle,
            cache: Cache::new(cache_capacity),
        }
    }

    /// Parse of `query`, from the cache when possible.
    ///
    /// `None` when the oracle faulted; the fault is logged and not cached, so
    /// the next call retries.
    pub fn parse_result(&self, query: &str) -> Option<Arc<ParseResult>> {
        if let Some(cached) = self.cache.get(query) {
            trace!("Parse cache hit ({} bytes)", query.len());
            return Some(cached);
        }
        debug!("Parse cache miss ({} bytes)", query.len());
        match self.oracle.parse(query) {
            Ok(result) => {
                let result = Arc::new(result);
                self.cache.insert(query.to_string(), Arc::clone(&result));
                Some(result)
            }
            Err(e) => {
                warn!("Parser oracle fault, skipping analysis: {e}");
                None
            }
        }
    }

    /// Analyze `query`, reporting the first problem found.
    ///
    /// Without a schema only syntax is checked. An oracle fault is not a
    /// problem with the query and yields `Ok(())`.
    pub fn analyze(&self, query: &str, schema: Option<&Schema>) -> AnalysisResult {
        if query.trim().is_empty() {
            return Err(AnalysisError::EmptyQuery);
        }
        let Some(parsed) = self.parse_result(query) else {
            return Ok(());
        };
        match parsed.as_ref() {
            ParseResult::SyntaxError(error) => Err(classify(query, error)),
            ParseResult::Parsed { statements } => match schema {
                Some(schema) => check_statements(query, statements, schema),
                None => Ok(()),
            },
        }
    }
}

fn classify(query: &str, error: &SyntaxError) -> AnalysisError {
    let word = match (error.near.as_str(), error.position) {
        ("", Some(position)) => locate(position, query).map(|w| (w.text, w.end)),
        (near, Some(position)) => Some((near.to_string(), position)),
        (_, None) => None,
    };
    let Some((word, end)) = word else {
        return AnalysisError::SyntaxError {
            position: error.position.unwrap_or(query.len()),
        };
    };
    let start = end.saturating_sub(word.len());
    if is_keyword(&word) {
        AnalysisError::SyntaxErrorReservedKeyword {
            keyword: word,
            start,
            end,
        }
    } else {
        AnalysisError::SyntaxErrorUnknownToken { word, start, end }
    }
}

/// Text of one statement, with its byte offset in the query. Names and
/// values are only ever searched for inside the statement they belong to.
struct Source<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Source<'a> {
    fn of(query: &'a str, statement: &Statement) -> Self {
        match query.get(statement.range.clone()) {
            Some(text) => Self {
                text,
                offset: statement.range.start,
            },
            None => Self {
                text: query,
                offset: 0,
            },
        }
    }

    fn shift(&self, (start, end): (usize, usize)) -> (usize, usize) {
        (start + self.offset, end + self.offset)
    }

    fn whole_word(&self, target: &str) -> Option<(usize, usize)> {
        first_whole_word(self.text, target).map(|span| self.shift(span))
    }

    fn whole_word_ignore_case(&self, target: &str) -> Option<(usize, usize)> {
        first_whole_word_ignore_case(self.text, target).map(|span| self.shift(span))
    }
}

fn check_statements(query: &str, statements: &[Statement], schema: &Schema) -> AnalysisResult {
    for statement in statements.iter().filter(|s| !s.kind.is_ddl()) {
        let source = Source::of(query, statement);
        if let Some(arity) = statement.row_arity
            && !arity.matches()
            && let Some((start, end)) = source.whole_word_ignore_case("VALUES")
        {
            return Err(AnalysisError::ColumnCountMismatch {
                columns: arity.columns,
                values: arity.values,
                start,
                end,
            });
        }
        for table in &statement.tables {
            check_table(&source, table, schema)?;
        }
    }
    Ok(())
}

fn check_table(source: &Source, table: &QueryTable, schema: &Schema) -> AnalysisResult {
    if table.name.eq_ignore_ascii_case("dual") {
        return Ok(());
    }
    let Some(schema_table) = schema.table(&table.name) else {
        return match source.whole_word(&table.name) {
            Some((start, end)) => Err(AnalysisError::UnknownTable {
                table: table.name.clone(),
                start,
                end,
            }),
            None => Ok(()),
        };
    };

    for column in &table.columns {
        let Some(schema_column) = schema_table.column(&column.name) else {
            if let Some((start, end)) = source.whole_word(&column.name) {
                return Err(AnalysisError::UnknownColumn {
                    column: column.name.clone(),
                    table: table.name.clone(),
                    start,
                    end,
                });
            }
            continue;
        };
        let Some(received) = column.ts_type else {
            continue;
        };
        if schema_column.ts_type.accepts(received, schema_column.optional) {
            continue;
        }
        if let Some((start, end)) = locate_value(source, column, received) {
            return Err(AnalysisError::ColumnTypeMismatch {
                expected: schema_column.ts_type,
                received,
                start,
                end,
            });
        }
    }
    Ok(())
}

/// Span of the literal `column` was compared with or inserted as.
///
/// Best effort: `None` when the statement does not contain a recognizable
/// occurrence, in which case no diagnostic is raised.
fn locate_value(source: &Source, column: &QueryColumn, received: TsType) -> Option<(usize, usize)> {
    let value = column.value.as_deref()?;
    let literal = match received {
        TsType::String | TsType::Date => format!(r#"["']{}["']"#, regex::escape(value)),
        TsType::Null | TsType::Boolean => format!("(?i:{})", regex::escape(value)),
        _ => regex::escape(value),
    };

    let span = match column.context {
        ColumnContext::Expression => {
            let operator = match column.operator.as_deref()? {
                "<>" => "(?:<>|!=)".to_string(),
                op => regex::escape(op),
            };
            // The literal must end where the value does: `1` is not `15`.
            let pattern = format!(
                r#"\b{}[`"]?\s*{operator}\s*(?P<value>{literal})(?:[^\w.]|$)"#,
                regex::escape(&column.name)
            );
            capture_value(&pattern, source.text, 0)
        }
        ColumnContext::List => {
            let (_, values_end) = first_whole_word_ignore_case(source.text, "VALUES")?;
            let pattern = format!(r"[(,]\s*(?P<value>{literal})\s*[,)]");
            capture_value(&pattern, source.text, values_end)
        }
    };
    span.map(|span| source.shift(span))
}

fn capture_value(pattern: &str, text: &str, from: usize) -> Option<(usize, usize)> {
    let regex = Regex::new(pattern)
        .inspect_err(|e| warn!("Could not build value pattern {pattern:?}: {e}"))
        .ok()?;
    regex
        .captures_at(text, from)
        .and_then(|c| c.name("value"))
        .map(|m| (m.start(), m.end()))
}
