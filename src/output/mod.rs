// ==========================================
// Asin Batcher - output layer
// ==========================================
// Naming → batch files → optional zip packaging → duplicate report.
// ==========================================

pub mod batch_writer;
pub mod duplicate_report;
pub mod error;
pub mod naming;
pub mod packager;

pub use batch_writer::{ensure_folder, write_batches, START_URL_HEADER};
pub use duplicate_report::export_duplicates_csv;
pub use error::{OutputError, OutputResult};
pub use naming::{sanitize_filename, EMPTY_NAME_PLACEHOLDER};
pub use packager::{cleanup_work_dir, zip_outputs};
