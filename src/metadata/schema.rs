use super::*;

/// Full in-memory snapshot of the known tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    tables: Vec<SchemaTable>,
    index: HashMap<String, usize>,
}

impl Schema {
    /// Build a schema; on duplicate names the first table is kept for lookups.
    pub fn new(tables: impl IntoIterator<Item = SchemaTable>) -> Self {
        let tables: Vec<SchemaTable> = tables.into_iter().collect();
        let mut index = HashMap::with_capacity(tables.len());
        for (i, table) in tables.iter().enumerate() {
            index.entry(table.name.clone()).or_insert(i);
        }
        Self { tables, index }
    }

    /// Exact-name table lookup.
    pub fn table(&self, name: &str) -> Option<&SchemaTable> {
        self.index.get(name).map(|&i| &self.tables[i])
    }

    pub fn tables(&self) -> &[SchemaTable] {
        &self.tables
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|t| t.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl From<Vec<SchemaTable>> for Schema {
    fn from(tables: Vec<SchemaTable>) -> Self {
        Self::new(tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_exact_name_keeps_order() {
        let schema = Schema::new([
            SchemaTable::new("users"),
            SchemaTable::new("posts"),
            SchemaTable::new_with("users", [SchemaColumn::new("id", "int")]),
        ]);
        assert!(schema.table("Users").is_none());
        assert!(schema.table("users").unwrap().columns.is_empty());
        assert_eq!(schema.table_names().collect::<Vec<_>>(), vec!["users", "posts", "users"]);
        assert!(Schema::default().is_empty());
    }
}
