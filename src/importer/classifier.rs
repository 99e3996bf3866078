// ==========================================
// Asin Batcher - input classifier
// ==========================================
// Decides whether a file is a plain one-ASIN-per-line list or a
// seller-central inventory report (tab-delimited or spreadsheet).
// Classification never fails: unreadable files degrade to the
// plain-list reader, whose own decoding fallback deals with them.
// ==========================================

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// How the extractor should treat an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// One candidate token per line.
    PlainList,
    /// Tab-delimited or spreadsheet export with a header row.
    InventoryReport,
}

// Locale-specific export name, e.g. "Reporte+de+inventario+03-02-2025.txt".
static INVENTORY_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^Reporte\+de\+inventario\+\d{2}-\d{2}-\d{4}\.(txt|xlsx|xls)$")
        .expect("invalid inventory report name pattern")
});

/// Whether the file looks like an inventory report.
///
/// True when either the file name matches the fixed export pattern or
/// the first line is tab-separated and carries an `asin` column
/// (case-insensitive).
pub fn is_inventory_report(path: &Path) -> bool {
    let base = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    if INVENTORY_NAME_RE.is_match(&base) {
        return true;
    }

    if let Ok(file) = File::open(path) {
        let mut first = String::new();
        // Sniffing tolerates non-UTF-8 bytes; a read error just means
        // "not an inventory report".
        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        if reader.read_until(b'\n', &mut buf).is_ok() {
            first = String::from_utf8_lossy(&buf).to_string();
        }
        if first.contains('\t') {
            return first
                .split('\t')
                .any(|h| h.trim().eq_ignore_ascii_case("asin"));
        }
    }
    false
}

/// Classify an input file by extension plus content sniffing.
pub fn classify(path: &Path) -> InputKind {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    match ext.as_str() {
        "txt" | "xlsx" | "xls" if is_inventory_report(path) => InputKind::InventoryReport,
        _ => InputKind::PlainList,
    }
}
