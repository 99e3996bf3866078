// ==========================================
// Asin Batcher - importer layer
// ==========================================
// Classifier → decoder → readers → extraction entry point.
// ==========================================

pub mod classifier;
pub mod decode;
pub mod error;
pub mod extract;
pub mod readers;

pub use classifier::{classify, is_inventory_report, InputKind};
pub use error::{ImportError, ImportResult};
pub use extract::extract_asins_any;
pub use readers::{InventoryExcelReader, InventoryTsvReader, PlainListReader, TokenReader};
