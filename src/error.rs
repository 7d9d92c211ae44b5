use thiserror::Error;

/// Application-specific error type
#[derive(Debug, Error)]
pub enum TimelordError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Could not determine data directory")]
    NoDataDirectory,

    #[error("No sessions to export")]
    NothingToExport,
}

/// Convenience type alias for Result with TimelordError
pub type Result<T> = std::result::Result<T, TimelordError>;
