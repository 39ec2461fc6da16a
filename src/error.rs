use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThaiKeyError {
    #[error("Document not found: {}", .0.display())]
    DocumentNotFound(PathBuf),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown typist profile: {0}")]
    UnknownProfile(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type TkResult<T> = Result<T, ThaiKeyError>;
