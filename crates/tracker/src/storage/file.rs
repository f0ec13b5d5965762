//! File-backed key-value store: one JSON document per record key.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use crate::models::types::{Result, TrackerError};
use crate::storage::KeyValueStore;

/// Persists each record as `<dir>/<key>.json`.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for JsonFileStore {
    fn load<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Vec<u8>>>> + Send + 'a>> {
        Box::pin(async move {
            match tokio::fs::read(self.record_path(key)).await {
                Ok(bytes) => Ok(Some(bytes)),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
                Err(e) => Err(TrackerError::Persistence(format!(
                    "reading record {}: {}",
                    key, e
                ))),
            }
        })
    }

    fn save<'a>(
        &'a self,
        key: &'a str,
        data: &'a [u8],
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
                TrackerError::Persistence(format!("creating store directory: {}", e))
            })?;
            tokio::fs::write(self.record_path(key), data)
                .await
                .map_err(|e| TrackerError::Persistence(format!("writing record {}: {}", key, e)))
        })
    }
}
