// ==========================================
// Asin Batcher - token readers
// ==========================================
// Three source formats: plain one-per-line lists, tab-delimited
// inventory reports, and spreadsheet inventory reports.
// Every reader emits normalized ASINs; tokens that normalize to
// empty are dropped at the source.
// ==========================================

use crate::domain::normalize_asin;
use crate::importer::decode::decode_with_fallback;
use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

// A run of exactly 10 uppercase alphanumerics, on word boundaries.
static ASIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z0-9]{10}\b").expect("invalid ASIN pattern"));

// ==========================================
// Reader seam
// ==========================================
pub trait TokenReader {
    /// Read all normalized candidate tokens from `path`.
    fn read_tokens(&self, path: &Path) -> ImportResult<Vec<String>>;
}

// ==========================================
// Plain list reader
// ==========================================
pub struct PlainListReader;

impl TokenReader for PlainListReader {
    fn read_tokens(&self, path: &Path) -> ImportResult<Vec<String>> {
        let bytes = fs::read(path)?;
        // Plain lists tolerate mojibake: lossy decoding mirrors the
        // historical errors="ignore" behavior.
        let text = String::from_utf8_lossy(&bytes);
        Ok(text
            .lines()
            .map(normalize_asin)
            .filter(|a| !a.is_empty())
            .collect())
    }
}

// ==========================================
// Tab-delimited inventory reader
// ==========================================
pub struct InventoryTsvReader;

impl TokenReader for InventoryTsvReader {
    fn read_tokens(&self, path: &Path) -> ImportResult<Vec<String>> {
        if !path.is_file() {
            return Ok(Vec::new());
        }
        let bytes = fs::read(path)?;

        // No clean decode is not fatal: the caller reports
        // "no valid ASINs found" on the resulting empty list.
        let text = match decode_with_fallback(&bytes) {
            Some(text) => text,
            None => {
                let err = ImportError::NoEncodingSucceeded {
                    path: path.display().to_string(),
                };
                tracing::warn!(error = %err, "inventory report skipped");
                return Ok(Vec::new());
            }
        };

        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut rows: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(|c| c.trim().to_string()).collect());
        }
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let header: Vec<String> = rows[0].iter().map(|c| c.to_lowercase()).collect();
        let mut asins = Vec::new();

        if let Some(idx) = header.iter().position(|h| h == "asin") {
            // Header carries an asin column: scan only that column.
            for row in &rows[1..] {
                if let Some(cell) = row.get(idx) {
                    if let Some(m) = ASIN_RE.find(&cell.to_uppercase()) {
                        asins.push(normalize_asin(m.as_str()));
                    }
                }
            }
        } else {
            // Headerless export: scan every cell of every row.
            for row in &rows {
                for cell in row {
                    if let Some(m) = ASIN_RE.find(&cell.to_uppercase()) {
                        asins.push(normalize_asin(m.as_str()));
                    }
                }
            }
        }

        Ok(asins.into_iter().filter(|a| !a.is_empty()).collect())
    }
}

// ==========================================
// Spreadsheet inventory reader
// ==========================================
// First worksheet only, every cell treated as text. The asin column
// is located by case-insensitive header match; absent a header the
// first column is used (headerless exports).
pub struct InventoryExcelReader;

impl TokenReader for InventoryExcelReader {
    fn read_tokens(&self, path: &Path) -> ImportResult<Vec<String>> {
        let mut workbook = open_workbook_auto(path)
            .map_err(|e| ImportError::ExcelReadError(e.to_string()))?;

        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelReadError("workbook has no sheets".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelReadError(e.to_string()))?;

        let mut rows = range.rows();
        let header_row = match rows.next() {
            Some(row) => row,
            None => return Ok(Vec::new()),
        };

        let header: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_lowercase())
            .collect();

        let mut asins = Vec::new();
        if let Some(idx) = header.iter().position(|h| h == "asin") {
            for row in rows {
                if let Some(cell) = row.get(idx) {
                    asins.push(normalize_asin(&cell.to_string()));
                }
            }
        } else {
            // No asin header: take the first column. Row 0 is still the
            // header of whatever the sheet holds and is not data.
            for row in rows {
                if let Some(first) = row.first() {
                    asins.push(normalize_asin(&first.to_string()));
                }
            }
        }

        Ok(asins.into_iter().filter(|a| !a.is_empty()).collect())
    }
}
