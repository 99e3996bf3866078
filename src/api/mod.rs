// ==========================================
// Asin Batcher - API layer
// ==========================================
// Request/response DTOs, error taxonomy and action handlers.
// ==========================================

pub mod dto;
pub mod error;
pub mod handlers;

pub use dto::{
    DuplicatesResponse, EngineRequest, FailureResponse, PreviewResponse, ProcessResponse,
};
pub use error::{ApiError, ApiResult};
pub use handlers::{
    handle_export_duplicates, handle_preview, handle_process, handle_request, respond,
};
