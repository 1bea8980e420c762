#![cfg(test)]
crate::reexport!(context);
pub use rstest::*;

use crate::{Schema, SchemaColumn, SchemaTable};

pub(crate) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}

/// Two-table schema shared by analyzer, diagnostic and lookup tests.
pub(crate) fn fixture_schema() -> Schema {
    Schema::new([
        SchemaTable::new_with(
            "users",
            [
                SchemaColumn::new("id", "int(11)"),
                SchemaColumn::new("email", "varchar(255)"),
                SchemaColumn::new("name", "varchar(255)").optional(true),
                SchemaColumn::new("is_admin", "tinyint(1)"),
                SchemaColumn::new("created_at", "datetime"),
                SchemaColumn::new("settings", "json"),
            ],
        ),
        SchemaTable::new_with(
            "posts",
            [
                SchemaColumn::new("id", "int(11)"),
                SchemaColumn::new("user_id", "int(11)"),
                SchemaColumn::new("title", "varchar(255)"),
                SchemaColumn::new("body", "text").optional(true),
                SchemaColumn::new("published_at", "timestamp").optional(true),
            ],
        ),
    ])
}

mod fixture_tests {
    use super::{super::*, *};

    #[test_context(AnalyzerContext)]
    #[test]
    fn context_starts_with_fixture_schema(ctx: &mut AnalyzerContext) {
        assert_eq!(ctx.schema.table_names().collect::<Vec<_>>(), vec!["users", "posts"]);
        assert!(ctx.analyzer.parse_result("SELECT 1").is_some());
    }

    #[test]
    fn fixture_types_follow_sql_labels() {
        let schema = fixture_schema();
        let users = schema.table("users").unwrap();
        assert_eq!(users.column("is_admin").unwrap().ts_type, TsType::Boolean);
        assert_eq!(users.column("created_at").unwrap().ts_type, TsType::Date);
        assert!(users.column("name").unwrap().optional);
    }
}
