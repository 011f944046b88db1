use std::{collections::HashMap, hash::Hash, path::{Path, PathBuf}, sync::Arc};
use tokio::{fs, sync::RwLock};

use crate::errors::ServiceError;

/// Generic JSON file-backed key-value map store.
///
/// Keeps a `HashMap<K, V>` in memory and rewrites the whole file after every
/// mutation. Readers never observe a half-applied mutation: changes happen
/// under the write lock and are persisted before the lock is released.
pub struct JsonMapStore<K, V> {
    inner: RwLock<HashMap<K, V>>,
    file_path: PathBuf,
}

impl<K, V> JsonMapStore<K, V>
where
    K: Eq + Hash + serde::Serialize + serde::de::DeserializeOwned + Clone,
    V: serde::Serialize + serde::de::DeserializeOwned + Clone,
{
    /// Open the store at `path`, creating the file with an empty map if missing.
    /// An unreadable or corrupt file is an error rather than silently emptied.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(storage_err)?;
            }
        }

        let map: HashMap<K, V> = match fs::read(&file_path).await {
            Ok(bytes) if bytes.is_empty() => HashMap::new(),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                ServiceError::Storage(format!("corrupt store {}: {e}", file_path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let empty: HashMap<K, V> = HashMap::new();
                write_atomic(&file_path, &empty).await?;
                empty
            }
            Err(e) => return Err(storage_err(e)),
        };

        Ok(Arc::new(Self { inner: RwLock::new(map), file_path }))
    }

    /// List all entries as `(key, value)` pairs, in no particular order.
    pub async fn list(&self) -> Vec<(K, V)> {
        let map = self.inner.read().await;
        map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Get value by key.
    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    /// Apply a mutation and persist. On any failure the previous contents are restored.
    pub async fn update_map<F, T>(&self, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut HashMap<K, V>) -> Result<T, ServiceError>,
    {
        let mut map = self.inner.write().await;
        let snapshot = map.clone();
        let out = match f(&mut map) {
            Ok(out) => out,
            Err(e) => {
                *map = snapshot;
                return Err(e);
            }
        };
        if let Err(e) = write_atomic(&self.file_path, &*map).await {
            *map = snapshot;
            return Err(e);
        }
        Ok(out)
    }
}

/// Write to a sibling temp file, then rename over the target.
async fn write_atomic<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), ServiceError> {
    let data = serde_json::to_vec_pretty(value).map_err(|e| ServiceError::Storage(e.to_string()))?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    fs::write(&tmp, data).await.map_err(storage_err)?;
    fs::rename(&tmp, path).await.map_err(storage_err)?;
    Ok(())
}

fn storage_err(e: std::io::Error) -> ServiceError {
    ServiceError::Storage(e.to_string())
}
