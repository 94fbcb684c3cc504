use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to persist file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Key cache at '{path}' is corrupt: {source}")]
    CacheCorrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Key Parse Error: {0}")]
    KeyParse(String),
}

pub type CfResult<T> = Result<T, CipherError>;
