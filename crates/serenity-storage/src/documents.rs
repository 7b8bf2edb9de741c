use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;

use crate::error::StorageError;

/// Key-addressed JSON documents under a single root directory.
///
/// Keys follow the conventions in `serenity_core::store_keys`
/// (`sessions/{id}.json`, ...). Writes go through a temp file and a rename
/// so a reader never observes a half-written document.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub async fn open(root: impl AsRef<Path>) -> Result<Self, StorageError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await.map_err(|e| StorageError::Write {
            key: root.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    /// Read and deserialize the document at `key`.
    pub async fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<T, StorageError> {
        let bytes = fs::read(self.path_for(key)).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::NotFound {
                    key: key.to_string(),
                }
            } else {
                StorageError::Read {
                    key: key.to_string(),
                    message: e.to_string(),
                }
            }
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Serialize `value` and write it to `key` atomically.
    pub async fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        }

        let body = serde_json::to_vec_pretty(value)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &body).await.map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        fs::rename(&tmp, &path).await.map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Remove the document at `key`. Missing documents are `NotFound`.
    pub async fn delete(&self, key: &str) -> Result<(), StorageError> {
        fs::remove_file(self.path_for(key)).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::NotFound {
                    key: key.to_string(),
                }
            } else {
                StorageError::Delete {
                    key: key.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    /// List document keys under a prefix directory (e.g. `sessions/`).
    ///
    /// A prefix with no directory yet yields an empty list. Temp files from
    /// in-flight writes are skipped.
    pub async fn list_keys(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let dir = self.root.join(prefix);
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StorageError::List {
                    prefix: prefix.to_string(),
                    message: e.to_string(),
                });
            }
        };

        let mut keys = Vec::new();
        loop {
            let entry = entries.next_entry().await.map_err(|e| StorageError::List {
                prefix: prefix.to_string(),
                message: e.to_string(),
            })?;
            let Some(entry) = entry else { break };
            let name = entry.file_name().to_string_lossy().to_string();
            if !name.ends_with(".json") {
                continue;
            }
            keys.push(format!("{prefix}{name}"));
        }

        Ok(keys)
    }
}
