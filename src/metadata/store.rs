use crate::*;
use std::sync::Arc;
use tokio::{sync::RwLock, task::JoinHandle};

/// Shared holder for the schema snapshot.
///
/// The schema is absent until a provider has loaded successfully. Readers
/// never wait on a load in progress: [`SchemaStore::snapshot`] reports
/// `None` instead, and callers fall back to syntax-only analysis.
#[derive(Debug, Clone, Default)]
pub struct SchemaStore {
    schema: Arc<RwLock<Option<Arc<Schema>>>>,
}

impl SchemaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current schema, or `None` when not loaded yet (or being replaced).
    pub fn snapshot(&self) -> Option<Arc<Schema>> {
        self.schema.try_read().ok().and_then(|guard| guard.clone())
    }

    /// Current schema, waiting for an in-flight write to finish.
    pub async fn get(&self) -> Option<Arc<Schema>> {
        self.schema.read().await.clone()
    }

    pub async fn set(&self, schema: Schema) {
        *self.schema.write().await = Some(Arc::new(schema));
    }

    /// Await `provider` and install its tables. Failures are logged and leave
    /// the previous state untouched; returns whether a schema was installed.
    pub async fn load<P: SchemaProvider>(&self, provider: &P) -> bool {
        info!("Started loading schema");
        match provider.load().await {
            Ok(tables) => {
                info!("Schema loaded with {} tables", tables.len());
                self.set(Schema::new(tables)).await;
                true
            }
            Err(e) => {
                error!("Failed to load schema: {e}");
                false
            }
        }
    }

    /// Load in the background on the current tokio runtime.
    pub fn spawn_load<P>(&self, provider: P) -> JoinHandle<bool>
    where
        P: SchemaProvider + Send + Sync + 'static,
    {
        let store = self.clone();
        tokio::spawn(async move { store.load(&provider).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingProvider;

    impl SchemaProvider for FailingProvider {
        async fn load(&self) -> Result<Vec<SchemaTable>> {
            Err(Error::Schema("unreachable database".into()))
        }
    }

    #[tokio::test]
    async fn absent_until_loaded() {
        let store = SchemaStore::new();
        assert!(store.snapshot().is_none());
        assert!(store.load(&StaticSchema(vec![SchemaTable::new("users")])).await);
        let schema = store.snapshot().unwrap();
        assert!(schema.table("users").is_some());
    }

    #[tokio::test]
    async fn failures_leave_schema_absent() {
        let store = SchemaStore::new();
        assert!(!store.load(&FailingProvider).await);
        assert!(store.get().await.is_none());
    }

    #[tokio::test]
    async fn failures_keep_previous_schema() {
        let store = SchemaStore::new();
        store.set(Schema::new([SchemaTable::new("users")])).await;
        assert!(!store.load(&FailingProvider).await);
        assert!(store.snapshot().unwrap().table("users").is_some());
    }

    #[tokio::test]
    async fn background_load_does_not_block_readers() {
        let store = SchemaStore::new();
        let handle = store.spawn_load(StaticSchema(vec![SchemaTable::new("late")]));
        // Readers are served immediately, loaded or not.
        let _ = store.snapshot();
        assert!(handle.await.unwrap());
        assert!(store.get().await.unwrap().table("late").is_some());
    }

    #[tokio::test]
    async fn write_in_progress_reads_as_absent() {
        let store = SchemaStore::new();
        store.set(Schema::default()).await;
        let guard = store.schema.write().await;
        assert!(store.snapshot().is_none());
        drop(guard);
        assert!(store.snapshot().is_some());
    }
}
