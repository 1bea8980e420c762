use super::*;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaTable {
    pub name: String,
    // Declaration order is kept; completion and hover list columns this way.
    #[serde(default)]
    pub columns: Vec<SchemaColumn>,
}

impl SchemaTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    pub fn new_with(
        name: impl Into<String>,
        columns: impl IntoIterator<Item = SchemaColumn>,
    ) -> Self {
        Self {
            name: name.into(),
            columns: columns.into_iter().collect(),
        }
    }

    /// Exact-name column lookup.
    pub fn column(&self, name: &str) -> Option<&SchemaColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_lookup_is_exact() {
        let table = SchemaTable::new_with(
            "users",
            [SchemaColumn::new("id", "int"), SchemaColumn::new("Name", "text")],
        );
        assert!(table.column("id").is_some());
        assert!(table.column("name").is_none());
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["id", "Name"]);
    }
}
