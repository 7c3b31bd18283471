use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tracing::warn;

use super::KeyValueStore;
use crate::StoreError;

/// Store backed by a single JSON document on disk.
///
/// The document is an object mapping keys to values. Each write rewrites
/// the whole document; callers are expected to serialize their writes.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

type Document = serde_json::Map<String, serde_json::Value>;

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<Option<Document>, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })
    }

    async fn write_document(&self, document: &Document) -> Result<(), StoreError> {
        let io_error = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
        }
        let content = serde_json::to_string_pretty(document).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        tokio::fs::write(&self.path, content).await.map_err(io_error)
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        Ok(self
            .read_document()
            .await?
            .and_then(|mut document| document.remove(key)))
    }

    async fn set(&self, key: &str, value: serde_json::Value) -> Result<(), StoreError> {
        let mut document = match self.read_document().await {
            Ok(document) => document.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "discarding unreadable storage document");
                Document::new()
            }
        };
        document.insert(key.to_string(), value);
        self.write_document(&document).await
    }
}
