use crate::*;
use serde::Serialize;

/// Everything known about the word under the cursor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickInfo {
    pub word: Word,
    pub topic: Option<&'static Topic>,
    /// Schema table named by the word, when the query references it.
    pub table: Option<SchemaTable>,
    /// First schema column named by the word among the referenced tables.
    pub column: Option<SchemaColumn>,
}

/// Hover information for the word touching `offset` in `query`.
///
/// `None` only when no word covers the offset. Schema details need a parse;
/// keyword documentation does not.
pub fn quick_info<O: ParserOracle>(
    analyzer: &Analyzer<O>,
    query: &str,
    offset: usize,
    schema: Option<&Schema>,
) -> Option<QuickInfo> {
    let word = locate(offset, query)?;
    let topic = topic(&word.text);
    let parsed = schema.and_then(|_| analyzer.parse_result(query));

    let (mut table, mut column) = (None, None);
    if let (Some(schema), Some(parsed)) = (schema, parsed.as_deref()) {
        table = parsed
            .tables()
            .find(|t| t.name == word.text)
            .and_then(|t| schema.table(&t.name))
            .cloned();
        column = parsed
            .tables()
            .filter_map(|t| schema.table(&t.name))
            .find_map(|t| t.column(&word.text))
            .cloned();
    }

    Some(QuickInfo {
        word,
        topic,
        table,
        column,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_context(AnalyzerContext)]
    #[test]
    fn keyword_documentation(ctx: &mut AnalyzerContext) {
        let info = quick_info(&ctx.analyzer, "select * FROM users", 3, Some(&ctx.schema)).unwrap();
        assert_eq!(info.word, Word::new("select", 0, 6));
        assert_eq!(info.topic.map(|t| t.name), Some("SELECT"));
        assert!(info.table.is_none() && info.column.is_none());
    }

    #[test_context(AnalyzerContext)]
    #[test]
    fn table_and_column_details(ctx: &mut AnalyzerContext) {
        let query = "SELECT title FROM posts WHERE user_id = 1";
        let info = quick_info(&ctx.analyzer, query, 20, Some(&ctx.schema)).unwrap();
        assert_eq!(info.word.text, "posts");
        assert_eq!(info.table.map(|t| t.columns.len()), Some(5));

        let info = quick_info(&ctx.analyzer, query, 32, Some(&ctx.schema)).unwrap();
        assert_eq!(info.word.text, "user_id");
        let column = info.column.unwrap();
        assert_eq!((column.sql_type.as_str(), column.ts_type), ("int(11)", TsType::Number));
    }

    #[test_context(AnalyzerContext)]
    #[test]
    fn unreferenced_tables_are_not_described(ctx: &mut AnalyzerContext) {
        let info = quick_info(&ctx.analyzer, "SELECT users FROM posts", 9, Some(&ctx.schema)).unwrap();
        assert_eq!(info.word.text, "users");
        assert!(info.table.is_none());
    }

    #[test]
    fn nothing_under_the_cursor() {
        let analyzer = Analyzer::new();
        assert_eq!(quick_info(&analyzer, "SELECT *   FROM", 9, None), None);
        let info = quick_info(&analyzer, "SELECT * FRM", 10, None).unwrap();
        assert_eq!(info.word.text, "FRM");
        assert!(info.topic.is_none());
    }
}
