use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Failed to create directory {path:?}: {source}")]
    DirectoryCreation { path: PathBuf, source: io::Error },

    #[error("Failed to serialize collection: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write file {path:?}: {source}")]
    FileWrite { path: PathBuf, source: io::Error },

    #[error("Invalid collection: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
