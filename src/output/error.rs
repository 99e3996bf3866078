// ==========================================
// Asin Batcher - output error types
// ==========================================

use thiserror::Error;

/// Output layer error type
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Could not create output folder {path}: {message}")]
    FolderCreateError { path: String, message: String },

    #[error("Could not write batch file {path}: {message}")]
    BatchWriteError { path: String, message: String },

    #[error("Could not write zip archive {path}: {message}")]
    ZipWriteError { path: String, message: String },

    #[error("Could not write duplicate report {path}: {message}")]
    ReportWriteError { path: String, message: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias
pub type OutputResult<T> = Result<T, OutputError>;
