// ==========================================
// Asin Batcher - importer error types
// ==========================================
// Tool: thiserror derive macros
// ==========================================

use thiserror::Error;

/// Importer layer error type
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== File errors =====
    #[error("Input file not found: {0}")]
    FileNotFound(String),

    #[error("File read failed: {0}")]
    FileReadError(String),

    #[error("Excel read failed: {0}")]
    ExcelReadError(String),

    #[error("Tab-delimited read failed: {0}")]
    TsvReadError(String),

    // ===== Decoding errors =====
    #[error("No candidate encoding decoded {path} cleanly")]
    NoEncodingSucceeded { path: String },

    // ===== Generic =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::TsvReadError(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelReadError(err.to_string())
    }
}

/// Result type alias
pub type ImportResult<T> = Result<T, ImportError>;
