use super::*;
use crate::{byte_offset, debug, trace};
use regex::Regex;
use sqlparser::{
    dialect::MySqlDialect,
    parser::{Parser, ParserError},
    tokenizer::{Location, Token, Tokenizer},
};
use std::{any::Any, ops::Range, panic, sync::LazyLock};

pub const DEFAULT_MAX_QUERY_LEN: usize = 64 * 1024;

static LOCATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"at Line: (\d+), Column: (\d+)").expect("location pattern is a valid regex")
});

/// In-process oracle backed by `sqlparser` with the MySQL dialect.
#[derive(Debug, Clone)]
pub struct SqlParserOracle {
    max_query_len: usize,
}

impl Default for SqlParserOracle {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_QUERY_LEN)
    }
}

impl SqlParserOracle {
    pub fn new(max_query_len: usize) -> Self {
        Self { max_query_len }
    }
}

impl ParserOracle for SqlParserOracle {
    fn parse(&self, query: &str) -> std::result::Result<ParseResult, OracleError> {
        if query.len() > self.max_query_len {
            return Err(OracleError::TooLarge {
                len: query.len(),
                max: self.max_query_len,
            });
        }

        let parsed = panic::catch_unwind(|| {
            Parser::parse_sql(&MySqlDialect {}, query).map(|statements| {
                let ranges = statement_ranges(query, statements.len());
                statements
                    .iter()
                    .zip(ranges)
                    .map(|(statement, range)| collect(statement, range))
                    .collect::<Vec<_>>()
            })
        })
        .map_err(|payload| OracleError::Panicked(panic_message(payload.as_ref())))?;

        match parsed {
            Ok(statements) => Ok(ParseResult::Parsed { statements }),
            Err(ParserError::RecursionLimitExceeded) => Err(OracleError::RecursionLimit),
            Err(ParserError::ParserError(message) | ParserError::TokenizerError(message)) => {
                trace!("sqlparser rejected query: {message}");
                Ok(ParseResult::SyntaxError(syntax_error(query, &message)))
            }
        }
    }
}

/// Byte ranges of the non-empty `;`-separated statements of `query`.
///
/// Every statement gets the whole query when the split disagrees with the
/// parser's statement count (compound bodies with inner semicolons).
fn statement_ranges(query: &str, count: usize) -> Vec<Range<usize>> {
    let whole = || vec![0..query.len(); count];
    let Ok(tokens) = Tokenizer::new(&MySqlDialect {}, query).tokenize_with_location() else {
        return whole();
    };

    let mut ranges = Vec::with_capacity(count);
    let (mut start, mut filled) = (0, false);
    for t in &tokens {
        match t.token {
            Token::SemiColon => {
                let location = t.span.start;
                let Some(end) = byte_offset(query, location.line as usize, location.column as usize)
                else {
                    return whole();
                };
                if filled {
                    ranges.push(start..end);
                }
                start = end + 1;
                filled = false;
            }
            Token::Whitespace(_) | Token::EOF => {}
            _ => filled = true,
        }
    }
    if filled {
        ranges.push(start..query.len());
    }

    if ranges.len() != count {
        debug!("Split {} statements where the parser found {count}", ranges.len());
        return whole();
    }
    ranges
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

/// Recover the offending token from a parser message ending in
/// `at Line: L, Column: C`.
fn syntax_error(query: &str, message: &str) -> SyntaxError {
    let at_end = SyntaxError {
        near: String::new(),
        position: None,
    };
    let Some(location) = LOCATION.captures_iter(message).last().and_then(|c| {
        Some(Location {
            line: c[1].parse().ok()?,
            column: c[2].parse().ok()?,
        })
    }) else {
        return at_end;
    };
    let Some(start) = byte_offset(query, location.line as usize, location.column as usize) else {
        return at_end;
    };

    // Tokenizer failures point at a character, not a token.
    let Ok(tokens) = Tokenizer::new(&MySqlDialect {}, query).tokenize_with_location() else {
        return SyntaxError {
            near: String::new(),
            position: Some(start),
        };
    };

    match tokens
        .iter()
        .filter(|t| !matches!(t.token, Token::Whitespace(_)))
        .find(|t| t.span.start == location)
    {
        Some(t) if t.token == Token::EOF => at_end,
        Some(t) => {
            let end = byte_offset(query, t.span.end.line as usize, t.span.end.column as usize)
                .filter(|&end| end > start)
                .unwrap_or(query.len());
            SyntaxError {
                near: query[start..end].to_string(),
                position: Some(end),
            }
        }
        None => SyntaxError {
            near: String::new(),
            position: Some(start),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(sql: &str) -> ParseResult {
        SqlParserOracle::default().parse(sql).unwrap()
    }

    #[rstest]
    #[case("SELECT * FRM users", "FRM", Some(12))]
    #[case("SELECT *\nFRM users", "FRM", Some(12))]
    #[case("SELECT 1 SELECT", "SELECT", Some(15))]
    #[case("SELECT * FROM users WHERE", "", None)]
    #[case("SELECT * FROM users; SELECT * FRM posts", "FRM", Some(33))]
    fn reports_offending_token(
        #[case] sql: &str,
        #[case] near: &str,
        #[case] position: Option<usize>,
    ) {
        assert_eq!(
            parse(sql),
            ParseResult::SyntaxError(SyntaxError {
                near: near.to_string(),
                position,
            })
        );
    }

    #[test]
    fn tokenizer_errors_point_at_a_character() {
        let ParseResult::SyntaxError(err) = parse("SELECT * FROM users WHERE id = 'abc") else {
            panic!("expected a syntax error");
        };
        assert_eq!(err.near, "");
        assert!(err.position.is_some_and(|p| (31..=35).contains(&p)));
    }

    #[test]
    fn parses_multiple_statements() {
        let result = parse("SELECT * FROM users; DELETE FROM posts WHERE id = 1");
        let kinds: Vec<_> = result.statements().iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![StatementKind::Select, StatementKind::Delete]);
        let tables: Vec<_> = result.tables().map(|t| t.name.as_str()).collect();
        assert_eq!(tables, vec!["users", "posts"]);
    }

    #[rstest]
    #[case("SELECT 1", vec![0..8])]
    #[case("SELECT 1;", vec![0..8])]
    #[case("SELECT 1; SELECT ';' ;;  DELETE FROM t", vec![0..8, 9..21, 23..38])]
    #[case("SELECT 1 -- trailing; comment\n", vec![0..30])]
    fn statements_carry_their_byte_range(#[case] sql: &str, #[case] ranges: Vec<Range<usize>>) {
        let found: Vec<_> = parse(sql).statements().iter().map(|s| s.range.clone()).collect();
        assert_eq!(found, ranges);
    }

    #[test]
    fn oversize_queries_are_faults() {
        let oracle = SqlParserOracle::new(8);
        assert_eq!(
            oracle.parse("SELECT * FROM users"),
            Err(OracleError::TooLarge { len: 19, max: 8 })
        );
    }

    #[test]
    fn deep_nesting_is_a_fault_not_a_syntax_error() {
        let sql = format!("SELECT {}1{}", "(".repeat(500), ")".repeat(500));
        assert_eq!(
            SqlParserOracle::default().parse(&sql),
            Err(OracleError::RecursionLimit)
        );
    }

    #[test]
    fn panic_payloads_become_messages() {
        let payload = panic::catch_unwind(|| panic!("boom")).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "boom");
    }
}
