use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("document not found: {key}")]
    NotFound { key: String },

    #[error("document already exists: {key}")]
    AlreadyExists { key: String },

    #[error("concurrent update conflict on: {key}")]
    Conflict { key: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("read error for {key}: {message}")]
    Read { key: String, message: String },

    #[error("write error for {key}: {message}")]
    Write { key: String, message: String },

    #[error("delete error for {key}: {message}")]
    Delete { key: String, message: String },

    #[error("list error for {prefix}: {message}")]
    List { prefix: String, message: String },
}
