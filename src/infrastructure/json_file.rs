use crate::domain::ports::{Record, Repository};
use crate::error::{RentalError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A read-only repository backed by a JSON file holding an array of records.
///
/// The file is read on every call, so edits to the file are visible to the
/// next lookup without reloading anything.
pub struct JsonFileRepository<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> JsonFileRepository<T> {
    /// Creates a repository over `path`. The file is not touched until the
    /// first lookup.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T: DeserializeOwned> JsonFileRepository<T> {
    async fn load(&self) -> Result<Vec<T>> {
        let content = tokio::fs::read(&self.path).await?;
        let records: Vec<T> = serde_json::from_slice(&content)?;
        debug!(path = %self.path.display(), count = records.len(), "Loaded records");
        Ok(records)
    }
}

#[async_trait]
impl<T> Repository<T> for JsonFileRepository<T>
where
    T: Record + DeserializeOwned + Send + Sync,
{
    async fn find(&self, id: &str) -> Result<T> {
        self.load()
            .await?
            .into_iter()
            .find(|record| record.id() == id)
            .ok_or_else(|| RentalError::NotFound(id.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<T>> {
        self.load().await
    }
}
