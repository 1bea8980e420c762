use crate::*;
use std::{future::Future, path::PathBuf};

/// Source of the table catalog. Loaded once, as a whole.
pub trait SchemaProvider {
    fn load(&self) -> impl Future<Output = Result<Vec<SchemaTable>>> + Send;
}

/// Tables held in memory, mostly for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSchema(pub Vec<SchemaTable>);

impl SchemaProvider for StaticSchema {
    async fn load(&self) -> Result<Vec<SchemaTable>> {
        Ok(self.0.clone())
    }
}

/// JSON file holding an array of tables:
/// `[{"name": "users", "columns": [{"name": "id", "sqlType": "int"}]}]`.
#[derive(Debug, Clone)]
pub struct JsonSchemaFile {
    path: PathBuf,
}

impl JsonSchemaFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SchemaProvider for JsonSchemaFile {
    async fn load(&self) -> Result<Vec<SchemaTable>> {
        debug!("Reading schema from {}", self.path.display());
        let text = tokio::fs::read_to_string(&self.path).await?;
        let tables: Vec<SchemaTable> = serde_json::from_str(&text)?;
        if let Some(table) = tables.iter().find(|t| t.name.is_empty()) {
            return Err(Error::Schema(format!(
                "table with {} columns has no name",
                table.columns.len()
            )));
        }
        Ok(tables)
    }
}
