// ==========================================
// Asin Batcher - batch file writer
// ==========================================
// One UTF-8 text file per batch: the literal `start_url` header,
// then one product URL per ASIN in batch order.
// ==========================================

use crate::domain::Market;
use crate::engine::build_url;
use crate::output::error::{OutputError, OutputResult};
use crate::output::naming::sanitize_filename;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Header line expected by the downstream scraping tools.
pub const START_URL_HEADER: &str = "start_url";

/// Create a folder (and parents) if it does not exist yet.
pub fn ensure_folder(path: &Path) -> OutputResult<()> {
    fs::create_dir_all(path).map_err(|e| OutputError::FolderCreateError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Write every batch into `folder`, returning the produced paths.
///
/// A single batch gets `{base}.txt`; multiple batches get a 1-based
/// `{base}_{i}.txt` suffix.
pub fn write_batches(
    batches: &[Vec<String>],
    folder: &Path,
    market: Market,
    base_label: &str,
) -> OutputResult<Vec<PathBuf>> {
    let safe_base = sanitize_filename(base_label);
    let total = batches.len();
    let mut out_files = Vec::with_capacity(total);

    for (idx, batch) in batches.iter().enumerate() {
        let file_name = if total > 1 {
            format!("{}_{}.txt", safe_base, idx + 1)
        } else {
            format!("{safe_base}.txt")
        };
        let path = folder.join(file_name);

        let mut content = String::with_capacity(batch.len() * 64 + 16);
        content.push_str(START_URL_HEADER);
        content.push('\n');
        for asin in batch {
            content.push_str(&build_url(asin, market));
            content.push('\n');
        }

        let mut file = fs::File::create(&path).map_err(|e| OutputError::BatchWriteError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        file.write_all(content.as_bytes())
            .map_err(|e| OutputError::BatchWriteError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        out_files.push(path);
    }

    tracing::info!(folder = %folder.display(), files = out_files.len(), "batch files written");
    Ok(out_files)
}
