// ==========================================
// Asin Batcher - duplicate report
// ==========================================
// Secondary capability, independent of the batching flow: a CSV
// listing each distinct duplicated ASIN once.
// ==========================================

use crate::output::batch_writer::ensure_folder;
use crate::output::error::{OutputError, OutputResult};
use chrono::Local;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Write the duplicate listing under `out_dir`.
///
/// One line per distinct duplicated value, in first-duplicate
/// encounter order, under the literal `asin` header. Nothing is
/// written when there are no duplicates; the returned path is `None`.
pub fn export_duplicates_csv(
    duplicates: &[String],
    out_dir: &Path,
) -> OutputResult<Option<PathBuf>> {
    if duplicates.is_empty() {
        return Ok(None);
    }
    ensure_folder(out_dir)?;

    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = out_dir.join(format!("duplicados_{stamp}.csv"));

    let mut content = String::from("asin\n");
    let mut seen = HashSet::new();
    for asin in duplicates {
        if seen.insert(asin.as_str()) {
            content.push_str(asin);
            content.push('\n');
        }
    }

    fs::write(&path, content).map_err(|e| OutputError::ReportWriteError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    tracing::info!(path = %path.display(), "duplicate report written");
    Ok(Some(path))
}
