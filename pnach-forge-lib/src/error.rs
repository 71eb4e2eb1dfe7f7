use std::path::PathBuf;

/// Errors raised while scanning a cheats folder.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The scan root itself is missing. Distinct from a root with no files.
    #[error("Cheats folder not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scan worker failed: {0}")]
    Worker(String),
}

impl ScanError {
    pub fn worker(msg: impl Into<String>) -> Self {
        Self::Worker(msg.into())
    }
}

/// Errors raised while loading a title mapping file.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid mapping: {0}")]
    Invalid(String),
}

impl MappingError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}
