// ==========================================
// Asin Batcher - multi-encoding text decoding
// ==========================================
// Inventory exports arrive as UTF-8 (often with BOM) or Latin-1.
// Candidates are tried in order; the first clean decode wins.
// ==========================================

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

/// Candidate encodings, in trial order.
const CANDIDATES: [&Encoding; 2] = [UTF_8, WINDOWS_1252];

/// Decode raw bytes with the encoding fallback chain.
///
/// Returns the first decode that produced no replacement characters,
/// or `None` when every candidate reported errors. Windows-1252 maps
/// every byte, so in practice the chain only fails on empty candidate
/// lists; the `Option` keeps the "no candidate succeeded" case
/// explicit all the same.
pub fn decode_with_fallback(bytes: &[u8]) -> Option<String> {
    for encoding in CANDIDATES {
        let (text, _, had_errors) = encoding.decode(bytes);
        if !had_errors {
            return Some(text.into_owned());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_preferred() {
        let text = decode_with_fallback("asin\tcantidad\n".as_bytes()).unwrap();
        assert_eq!(text, "asin\tcantidad\n");
    }

    #[test]
    fn test_utf8_bom_stripped() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"asin\n");
        assert_eq!(decode_with_fallback(&bytes).unwrap(), "asin\n");
    }

    #[test]
    fn test_latin1_fallback() {
        // 0xF1 is ñ in Latin-1 but an invalid UTF-8 sequence.
        let bytes = b"due\xF1o\tasin\n";
        let text = decode_with_fallback(bytes).unwrap();
        assert_eq!(text, "dueño\tasin\n");
    }
}
