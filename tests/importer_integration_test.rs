// ==========================================
// Asin Batcher - importer integration tests
// ==========================================
// Classifier + readers + extraction against real files on disk,
// including the encoding fallback path.
// ==========================================

use asin_batcher::engine::deduplicate;
use asin_batcher::importer::{classify, extract_asins_any, InputKind};
use asin_batcher::logging;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_bytes(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_plain_list_extraction_and_dedup() {
    logging::init_test();
    let dir = TempDir::new().unwrap();
    let path = write_bytes(
        &dir,
        "lista.txt",
        b"B0TEST000A\nb0test000b\nB0TEST000A\n!!!\n",
    );

    let tokens = extract_asins_any(&path).unwrap();
    assert_eq!(tokens, vec!["B0TEST000A", "B0TEST000B", "B0TEST000A"]);

    let result = deduplicate(tokens);
    assert_eq!(result.unique, vec!["B0TEST000A", "B0TEST000B"]);
    assert_eq!(result.duplicates, vec!["B0TEST000A"]);
}

#[test]
fn test_inventory_report_by_locale_filename() {
    logging::init_test();
    let dir = TempDir::new().unwrap();
    // Matches the fixed export name pattern, so the header row is not
    // needed for classification; content still carries an asin column.
    let path = write_bytes(
        &dir,
        "Reporte+de+inventario+03-02-2025.txt",
        b"sku\tasin\tprecio\nS1\tB0TEST000A\t10\nS2\tB0TEST000B\t20\n",
    );

    assert_eq!(classify(&path), InputKind::InventoryReport);
    let tokens = extract_asins_any(&path).unwrap();
    assert_eq!(tokens, vec!["B0TEST000A", "B0TEST000B"]);
}

#[test]
fn test_inventory_report_latin1_encoding_fallback() {
    logging::init_test();
    let dir = TempDir::new().unwrap();
    // Header holds a Latin-1 "ñ" (0xF1), invalid as UTF-8: the second
    // candidate encoding has to pick this file up.
    let path = write_bytes(
        &dir,
        "export.txt",
        b"due\xF1o\tasin\nS1\tB0TEST000A\nS2\tB0TEST000B\n",
    );

    assert_eq!(classify(&path), InputKind::InventoryReport);
    let tokens = extract_asins_any(&path).unwrap();
    assert_eq!(tokens, vec!["B0TEST000A", "B0TEST000B"]);
}

#[test]
fn test_inventory_report_asin_column_only() {
    logging::init_test();
    let dir = TempDir::new().unwrap();
    // The sku column also holds a 10-char alphanumeric run; only the
    // asin column may be scanned.
    let path = write_bytes(
        &dir,
        "export.txt",
        b"sku\tasin\nAAAAAAAAA1\tB0TEST000A\nAAAAAAAAA2\tnada\n",
    );

    let tokens = extract_asins_any(&path).unwrap();
    assert_eq!(tokens, vec!["B0TEST000A"]);
}

#[test]
fn test_headerless_inventory_export_scans_every_cell() {
    logging::init_test();
    let dir = TempDir::new().unwrap();
    // Classified by file name, but the export lost its header row:
    // every cell of every row gets scanned.
    let path = write_bytes(
        &dir,
        "Reporte+de+inventario+03-02-2025.txt",
        b"S1\tB0TEST000A\nB0TEST000B\tS2\n",
    );

    assert_eq!(classify(&path), InputKind::InventoryReport);
    let tokens = extract_asins_any(&path).unwrap();
    assert_eq!(tokens, vec!["B0TEST000A", "B0TEST000B"]);
}

#[test]
fn test_empty_file_yields_no_tokens() {
    logging::init_test();
    let dir = TempDir::new().unwrap();
    let path = write_bytes(&dir, "lista.txt", b"");
    let tokens = extract_asins_any(&path).unwrap();
    assert!(tokens.is_empty());
}
