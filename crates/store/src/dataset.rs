use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Keyed persistence for computed datasets.
///
/// A present, well-formed entry is the sole cache-hit signal; an unreadable
/// or corrupt entry is a miss. There is no schema versioning; a shape change
/// means deleting stale checkpoints.
#[allow(async_fn_in_trait)]
pub trait DatasetStore {
    async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<Vec<T>>;
    async fn put<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StoreError>;
}

/// Return the checkpoint under `key`, or run `producer` and persist its
/// result before returning it.
///
/// On a hit the producer never runs; that short-circuit is what makes
/// repeated pipeline runs resumable without re-issuing thousands of requests.
/// A failed write is logged and does not block returning the fresh data;
/// the store is an optimization, never a correctness dependency.
pub async fn load_or_compute<T, S, F, Fut>(store: &S, key: &str, producer: F) -> Vec<T>
where
    T: Serialize + DeserializeOwned,
    S: DatasetStore,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Vec<T>>,
{
    if let Some(items) = store.get(key).await {
        return items;
    }

    let items = producer().await;

    if let Err(error) = store.put(key, &items).await {
        tracing::warn!(key, %error, "failed to persist checkpoint");
    }

    items
}

/// One JSON file per checkpoint under a base directory.
pub struct JsonDirStore {
    dir: PathBuf,
}

impl JsonDirStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl DatasetStore for JsonDirStore {
    async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<Vec<T>> {
        let path = self.path(key);

        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(error) => {
                tracing::debug!(path = %path.display(), %error, "no readable checkpoint");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => {
                tracing::info!(path = %path.display(), "loaded checkpoint");
                Some(items)
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "corrupt checkpoint, recomputing");
                None
            }
        }
    }

    async fn put<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let json = serde_json::to_string(items)?;
        tokio::fs::write(self.path(key), json).await?;
        tracing::info!(key, count = items.len(), "wrote checkpoint");
        Ok(())
    }
}

/// In-memory store, for tests and dry runs.
#[derive(Default)]
pub struct MemStore {
    entries: Mutex<HashMap<String, serde_json::Value>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DatasetStore for MemStore {
    async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<Vec<T>> {
        let value = self.entries.lock().unwrap().get(key).cloned()?;
        serde_json::from_value(value).ok()
    }

    async fn put<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StoreError> {
        let value = serde_json::to_value(items)?;
        self.entries.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }
}
