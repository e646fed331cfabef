use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConstsyncError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Source directory not found at {}", .path.display())]
    SourceDirectoryMissing { path: PathBuf },

    #[error("Registry entries require ABI {found} but this build supports up to {supported}")]
    UnsupportedRegistry { found: u32, supported: u32 },

    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

pub type Result<T> = std::result::Result<T, ConstsyncError>;

impl ConstsyncError {
    pub fn config(message: impl Into<String>) -> Self {
        ConstsyncError::Config(message.into())
    }

    pub fn source_directory_missing(path: impl Into<PathBuf>) -> Self {
        ConstsyncError::SourceDirectoryMissing { path: path.into() }
    }
}
