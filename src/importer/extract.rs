// ==========================================
// Asin Batcher - extraction entry point
// ==========================================
// Dispatches a file to the right reader based on extension and
// classifier verdict, then hands the token stream to the caller.
// ==========================================

use crate::importer::classifier::{classify, InputKind};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::readers::{
    InventoryExcelReader, InventoryTsvReader, PlainListReader, TokenReader,
};
use std::path::Path;

/// Read all normalized candidate ASINs from any supported file.
///
/// - `.xlsx`/`.xls`: the spreadsheet reader. A read failure on a
///   classified inventory report is surfaced; on anything else it
///   degrades to an empty list.
/// - `.txt`: the tab-delimited reader for inventory reports, the
///   plain-list reader otherwise.
/// - Unknown extensions: the plain-list reader, degrading read
///   failures to an empty list.
pub fn extract_asins_any(path: &Path) -> ImportResult<Vec<String>> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    let kind = classify(path);

    let tokens = match ext.as_str() {
        "xlsx" | "xls" => match InventoryExcelReader.read_tokens(path) {
            Ok(tokens) => tokens,
            Err(err) if kind == InputKind::InventoryReport => return Err(err),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "spreadsheet read failed");
                Vec::new()
            }
        },
        "txt" => match kind {
            InputKind::InventoryReport => InventoryTsvReader.read_tokens(path)?,
            InputKind::PlainList => PlainListReader.read_tokens(path)?,
        },
        _ => PlainListReader.read_tokens(path).unwrap_or_default(),
    };

    tracing::debug!(path = %path.display(), count = tokens.len(), "extracted candidate tokens");
    Ok(tokens)
}
