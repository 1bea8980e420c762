//! Walks a parsed statement once and organizes what the analyzer needs:
//! referenced tables with their aliases, the columns attached to them, and
//! the literal each column is compared against or inserted with.
use super::*;
use sqlparser::ast::{
    self, BinaryOperator, Expr, Ident, ObjectName, Query, SetExpr, TableFactor, TableObject, Visit,
    Visitor,
};
use std::ops::{ControlFlow, Range};

/// Extract the tables and columns of a single statement whose text spans
/// `range` of the query.
pub fn collect(statement: &ast::Statement, range: Range<usize>) -> Statement {
    let mut collector = Collector::default();
    let flow = statement.visit(&mut collector);
    debug_assert!(flow.is_continue());
    collector.finish(kind_of(statement), range)
}

pub fn kind_of(statement: &ast::Statement) -> StatementKind {
    use ast::Statement as S;
    match statement {
        S::Query { .. } => StatementKind::Select,
        S::Insert { .. } => StatementKind::Insert,
        S::Update { .. } => StatementKind::Update,
        S::Delete { .. } => StatementKind::Delete,
        S::CreateTable { .. }
        | S::AlterTable { .. }
        | S::Drop { .. }
        | S::Truncate { .. }
        | S::CreateIndex { .. }
        | S::CreateView { .. }
        | S::CreateDatabase { .. }
        | S::CreateSchema { .. } => StatementKind::Ddl,
        S::ShowTables { .. } | S::ShowColumns { .. } => StatementKind::Show,
        S::Use { .. } => StatementKind::Use,
        _ => StatementKind::Other,
    }
}

/// Last part of a possibly qualified name, without identifier quotes.
fn base_name(name: &ObjectName) -> Option<String> {
    name.0
        .last()
        .map(|part| part.to_string().trim_matches(['`', '"']).to_string())
        .filter(|n| !n.is_empty())
}

/// `(qualifier, column)` of a column reference expression.
fn column_ref(expr: &Expr) -> Option<(Option<String>, String)> {
    match expr {
        Expr::Identifier(ident) => Some((None, ident.value.clone())),
        Expr::CompoundIdentifier(parts) => match parts.as_slice() {
            [.., qualifier, column] => Some((Some(qualifier.value.clone()), column.value.clone())),
            [column] => Some((None, column.value.clone())),
            [] => None,
        },
        _ => None,
    }
}

fn is_comparison(op: &BinaryOperator) -> bool {
    matches!(
        op,
        BinaryOperator::Eq
            | BinaryOperator::NotEq
            | BinaryOperator::Lt
            | BinaryOperator::LtEq
            | BinaryOperator::Gt
            | BinaryOperator::GtEq
            | BinaryOperator::Spaceship
    )
}

struct Comparison {
    qualifier: Option<String>,
    column: String,
    operator: String,
    value: Literal,
}

struct InsertList {
    table: String,
    columns: Vec<String>,
    values: Option<Vec<Option<Literal>>>,
}

#[derive(Default)]
struct Collector {
    tables: Vec<QueryTable>,
    relations: Vec<String>,
    ctes: Vec<String>,
    references: Vec<(Option<String>, String)>,
    comparisons: Vec<Comparison>,
    insert: Option<InsertList>,
}

impl Visitor for Collector {
    type Break = ();

    fn pre_visit_statement(&mut self, statement: &ast::Statement) -> ControlFlow<()> {
        if let ast::Statement::Insert(insert) = statement
            && self.insert.is_none()
            && let TableObject::TableName(name) = &insert.table
            && let Some(table) = base_name(name)
        {
            let columns: Vec<String> = insert.columns.iter().map(|c: &Ident| c.value.clone()).collect();
            let first_row = insert.source.as_deref().and_then(|q| match q.body.as_ref() {
                SetExpr::Values(values) => values.rows.first(),
                _ => None,
            });
            self.relations.push(table.clone());
            self.insert = Some(InsertList {
                table,
                columns,
                values: first_row.map(|row| row.iter().map(literal).collect()),
            });
        }
        ControlFlow::Continue(())
    }

    fn pre_visit_query(&mut self, query: &Query) -> ControlFlow<()> {
        if let Some(with) = &query.with {
            self.ctes
                .extend(with.cte_tables.iter().map(|cte| cte.alias.name.value.clone()));
        }
        ControlFlow::Continue(())
    }

    fn pre_visit_table_factor(&mut self, factor: &TableFactor) -> ControlFlow<()> {
        if let TableFactor::Table { name, alias, .. } = factor
            && let Some(name) = base_name(name)
        {
            let alias = alias.as_ref().map(|a| a.name.value.clone());
            self.tables.push(QueryTable::new(name, alias));
        }
        ControlFlow::Continue(())
    }

    fn pre_visit_relation(&mut self, relation: &ObjectName) -> ControlFlow<()> {
        if let Some(name) = base_name(relation) {
            self.relations.push(name);
        }
        ControlFlow::Continue(())
    }

    fn pre_visit_expr(&mut self, expr: &Expr) -> ControlFlow<()> {
        if let Some(reference) = column_ref(expr) {
            self.references.push(reference);
        }
        if let Expr::BinaryOp { left, op, right } = expr
            && is_comparison(op)
            && let Some((qualifier, column)) = column_ref(left)
            && let Some(value) = literal(right)
        {
            self.comparisons.push(Comparison {
                qualifier,
                column,
                operator: op.to_string(),
                value,
            });
        }
        ControlFlow::Continue(())
    }
}

impl Collector {
    fn finish(mut self, kind: StatementKind, range: Range<usize>) -> Statement {
        self.tables.retain(|t| !self.ctes.contains(&t.name));
        for name in std::mem::take(&mut self.relations) {
            let known = self.ctes.contains(&name)
                || self
                    .tables
                    .iter()
                    .any(|t| t.name == name || t.alias.as_deref() == Some(name.as_str()));
            if !known {
                self.tables.push(QueryTable::new(name, None));
            }
        }

        for (qualifier, column) in std::mem::take(&mut self.references) {
            if let Some(table) = self.resolve(qualifier.as_deref())
                && table.column(&column).is_none()
            {
                table.columns.push(QueryColumn::reference(column));
            }
        }

        let mut row_arity = None;
        if let Some(insert) = self.insert.take() {
            if let Some(values) = &insert.values
                && !insert.columns.is_empty()
            {
                row_arity = Some(RowArity {
                    columns: insert.columns.len(),
                    values: values.len(),
                });
            }
            let values = insert.values.filter(|v| v.len() == insert.columns.len());
            if let Some(table) = self.tables.iter_mut().find(|t| t.name == insert.table) {
                for (i, name) in insert.columns.into_iter().enumerate() {
                    let value = values.as_ref().and_then(|v| v[i].clone());
                    let column = QueryColumn {
                        name,
                        context: ColumnContext::List,
                        operator: None,
                        value: value.as_ref().map(|l| l.text.clone()),
                        ts_type: value.map(|l| l.ts_type),
                    };
                    match table.columns.iter_mut().find(|c| c.name == column.name) {
                        Some(existing) => *existing = column,
                        None => table.columns.push(column),
                    }
                }
            }
        }

        for comparison in std::mem::take(&mut self.comparisons) {
            let Some(table) = self.resolve(comparison.qualifier.as_deref()) else {
                continue;
            };
            if let Some(column) = table
                .columns
                .iter_mut()
                .find(|c| c.name == comparison.column && !c.has_value())
            {
                column.context = ColumnContext::Expression;
                column.operator = Some(comparison.operator);
                column.value = Some(comparison.value.text);
                column.ts_type = Some(comparison.value.ts_type);
            }
        }

        // Checks report the first problem, so order is by name.
        self.tables.sort_by(|a, b| a.name.cmp(&b.name));
        for table in &mut self.tables {
            table.columns.sort_by(|a, b| a.name.cmp(&b.name));
        }

        Statement {
            kind,
            range,
            tables: self.tables,
            row_arity,
        }
    }

    /// Table a column reference belongs to. Unqualified references only
    /// resolve when the statement names exactly one table.
    fn resolve(&mut self, qualifier: Option<&str>) -> Option<&mut QueryTable> {
        match qualifier {
            Some(q) => self.tables.iter_mut().find(|t| t.answers_to(q)),
            None if self.tables.len() == 1 => self.tables.first_mut(),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sqlparser::{dialect::MySqlDialect, parser::Parser};

    fn statement(sql: &str) -> Statement {
        let parsed = Parser::parse_sql(&MySqlDialect {}, sql).unwrap();
        collect(&parsed[0], 0..sql.len())
    }

    fn names(statement: &Statement) -> Vec<(&str, Option<&str>)> {
        statement
            .tables
            .iter()
            .map(|t| (t.name.as_str(), t.alias.as_deref()))
            .collect()
    }

    #[test]
    fn select_with_comparison() {
        let s = statement("SELECT id FROM users WHERE id = 1");
        assert_eq!(s.kind, StatementKind::Select);
        assert_eq!(names(&s), vec![("users", None)]);
        assert_eq!(
            s.tables[0].columns,
            vec![QueryColumn {
                name: "id".into(),
                context: ColumnContext::Expression,
                operator: Some("=".into()),
                value: Some("1".into()),
                ts_type: Some(TsType::Number),
            }]
        );
    }

    #[test]
    fn aliases_and_qualified_columns() {
        let s = statement(
            "SELECT u.name, p.title FROM users u JOIN posts p ON p.user_id = u.id WHERE p.id <> 'x'",
        );
        assert_eq!(names(&s), vec![("posts", Some("p")), ("users", Some("u"))]);
        let posts: Vec<_> = s.tables[0].columns.iter().map(|c| c.name.as_str()).collect();
        let users: Vec<_> = s.tables[1].columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(posts, vec!["id", "title", "user_id"]);
        assert_eq!(users, vec!["id", "name"]);
        let id = s.tables[0].column("id").unwrap();
        assert_eq!(id.operator.as_deref(), Some("<>"));
        assert_eq!(id.ts_type, Some(TsType::String));
    }

    #[test]
    fn tables_and_columns_are_ordered_by_name() {
        let s = statement("SELECT zed, abc FROM zeta");
        assert_eq!(names(&s), vec![("zeta", None)]);
        let columns: Vec<_> = s.tables[0].columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(columns, vec!["abc", "zed"]);

        let s = statement("SELECT * FROM zeta JOIN alpha ON 1 = 1");
        assert_eq!(names(&s), vec![("alpha", None), ("zeta", None)]);
        assert_eq!(s.range, 0..38);
    }

    #[test]
    fn unqualified_columns_need_a_single_table() {
        let s = statement("SELECT name FROM users, posts WHERE id = 1");
        assert!(s.tables.iter().all(|t| t.columns.is_empty()));
    }

    #[test]
    fn first_comparison_wins() {
        let s = statement("SELECT * FROM users WHERE id = 1 OR id = 'a'");
        let id = s.tables[0].column("id").unwrap();
        assert_eq!(id.value.as_deref(), Some("1"));
    }

    #[test]
    fn placeholders_carry_no_type() {
        let s = statement("SELECT * FROM users WHERE id = ?");
        assert_eq!(s.tables[0].column("id").unwrap().ts_type, None);
    }

    #[test]
    fn insert_values_attach_as_list() {
        let s = statement("INSERT INTO users (id, name) VALUES (1, 'bob')");
        assert_eq!(s.kind, StatementKind::Insert);
        assert_eq!(s.row_arity, Some(RowArity { columns: 2, values: 2 }));
        let columns: Vec<_> = s.tables[0]
            .columns
            .iter()
            .map(|c| (c.name.as_str(), c.context, c.value.as_deref(), c.ts_type))
            .collect();
        assert_eq!(
            columns,
            vec![
                ("id", ColumnContext::List, Some("1"), Some(TsType::Number)),
                ("name", ColumnContext::List, Some("bob"), Some(TsType::String)),
            ]
        );
    }

    #[test]
    fn insert_arity_mismatch_keeps_columns_without_values() {
        let s = statement("INSERT INTO users (id, name) VALUES (1)");
        assert_eq!(s.row_arity, Some(RowArity { columns: 2, values: 1 }));
        assert!(!s.row_arity.unwrap().matches());
        assert!(s.tables[0].columns.iter().all(|c| c.ts_type.is_none()));
    }

    #[test]
    fn update_and_delete_targets() {
        let s = statement("UPDATE users SET name = 'a' WHERE id = 2");
        assert_eq!(s.kind, StatementKind::Update);
        assert_eq!(names(&s), vec![("users", None)]);
        assert_eq!(s.tables[0].column("id").unwrap().ts_type, Some(TsType::Number));

        let s = statement("DELETE FROM posts WHERE id = 3");
        assert_eq!(s.kind, StatementKind::Delete);
        assert_eq!(names(&s), vec![("posts", None)]);
    }

    #[test]
    fn cte_names_are_not_tables() {
        let s = statement("WITH recent AS (SELECT id FROM posts) SELECT * FROM recent");
        assert_eq!(names(&s), vec![("posts", None)]);
    }

    #[test]
    fn quoted_and_qualified_table_names() {
        let s = statement("SELECT * FROM `app`.`users`");
        assert_eq!(names(&s), vec![("users", None)]);
    }

    #[test]
    fn statement_kinds() {
        assert_eq!(statement("CREATE TABLE t (id INT)").kind, StatementKind::Ddl);
        assert_eq!(statement("DROP TABLE t").kind, StatementKind::Ddl);
        assert_eq!(statement("SHOW TABLES").kind, StatementKind::Show);
        assert_eq!(statement("USE app").kind, StatementKind::Use);
        assert_eq!(statement("SELECT 1").kind, StatementKind::Select);
    }
}
