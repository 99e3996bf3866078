// ==========================================
// Asin Batcher - domain layer
// ==========================================

pub mod asin;
pub mod types;

pub use asin::normalize_asin;
pub use types::{
    all_stores, store_from_selection, Market, OrderPolicy, DEFAULT_BATCHES, STORES_LEFT,
    STORES_RIGHT,
};
