// ==========================================
// Asin Batcher - engine layer
// ==========================================
// Deduplicator → orderer → batcher → URL builder.
// ==========================================

pub mod batching;
pub mod dedup;
pub mod ordering;
pub mod urls;

pub use batching::split_in_batches;
pub use dedup::{deduplicate, ExtractionResult};
pub use ordering::reorder;
pub use urls::build_url;
