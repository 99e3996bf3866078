// ==========================================
// Asin Batcher - core library
// ==========================================
// Pipeline: classifier → extractor → normalizer → deduplicator →
// orderer → batcher → URL builder → output writer → packager.
// Transport: one JSON request on stdin, one JSON response on stdout.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - value types
pub mod domain;

// Importer layer - input classification and extraction
pub mod importer;

// Engine layer - dedup / order / batch / URLs
pub mod engine;

// Output layer - batch files, zip packaging, duplicate report
pub mod output;

// API layer - transport DTOs and action handlers
pub mod api;

// Logging
pub mod logging;

// ==========================================
// Core type re-exports
// ==========================================

pub use domain::{normalize_asin, Market, OrderPolicy, DEFAULT_BATCHES};

pub use importer::{classify, extract_asins_any, ImportError, InputKind};

pub use engine::{build_url, deduplicate, reorder, split_in_batches, ExtractionResult};

pub use output::{export_duplicates_csv, sanitize_filename, write_batches, zip_outputs};

pub use api::{respond, ApiError, EngineRequest};

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "Asin Batcher";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
