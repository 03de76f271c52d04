use crate::domain::ports::{Record, Repository};
use crate::error::{RentalError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory repository keyed by record id.
///
/// Uses `Arc<RwLock<HashMap<String, T>>>` so clones share the same records.
/// Useful for tests and for embedding the engine without a data directory.
#[derive(Clone)]
pub struct InMemoryRepository<T> {
    records: Arc<RwLock<HashMap<String, T>>>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<T: Record + Clone + Send + Sync> InMemoryRepository<T> {
    /// Creates a new, empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `records`.
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let map = records
            .into_iter()
            .map(|record| (record.id().to_string(), record))
            .collect();
        Self {
            records: Arc::new(RwLock::new(map)),
        }
    }

    /// Inserts or replaces a record.
    pub async fn insert(&self, record: T) {
        let mut records = self.records.write().await;
        records.insert(record.id().to_string(), record);
    }
}

#[async_trait]
impl<T: Record + Clone + Send + Sync> Repository<T> for InMemoryRepository<T> {
    async fn find(&self, id: &str) -> Result<T> {
        let records = self.records.read().await;
        records
            .get(id)
            .cloned()
            .ok_or_else(|| RentalError::NotFound(id.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<T>> {
        let records = self.records.read().await;
        let mut all: Vec<T> = records.values().cloned().collect();
        all.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(all)
    }
}
