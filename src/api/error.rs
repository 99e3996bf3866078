// ==========================================
// Asin Batcher - API layer error types
// ==========================================
// Converts importer/output errors into the user-facing messages the
// transport reports. Wire messages are frozen for compatibility with
// the historical client.
// ==========================================

use crate::importer::ImportError;
use crate::output::OutputError;
use thiserror::Error;

/// API layer error type
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // Input errors
    // ==========================================
    #[error("Missing input_path")]
    MissingInputPath,

    #[error("Input file not found")]
    InputFileNotFound,

    #[error("No valid ASINs found")]
    NoValidAsins,

    // ==========================================
    // Configuration errors
    // ==========================================
    #[error("Missing store_name")]
    MissingStoreName,

    #[error("Missing file_label")]
    MissingFileLabel,

    // Historical client shows this text verbatim, hence Spanish.
    #[error(
        "La cantidad de lotes no puede ser mayor que la cantidad de URLs. URLs: {unique} | Lotes: {batches}"
    )]
    TooManyBatches { unique: usize, batches: usize },

    // ==========================================
    // Transport errors
    // ==========================================
    #[error("No input received")]
    NoInputReceived,

    #[error("Unknown action")]
    UnknownAction,

    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),

    // ==========================================
    // Lower layers
    // ==========================================
    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// Full diagnostic trace for the `traceback` response field:
    /// the error plus its source chain.
    pub fn trace(&self) -> String {
        let mut out = format!("{self:?}");
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            out.push_str("\ncaused by: ");
            out.push_str(&err.to_string());
            source = err.source();
        }
        out
    }
}

/// Result type alias
pub type ApiResult<T> = Result<T, ApiError>;
