// ==========================================
// Asin Batcher - ASIN normalization
// ==========================================
// Canonical identifier: uppercase, restricted to [A-Z0-9].
// ==========================================

/// Normalize a raw token into a canonical ASIN.
///
/// Trims, uppercases and strips every character outside `[A-Z0-9]`.
/// The result may be empty; callers drop empty results instead of
/// storing them.
pub fn normalize_asin(raw: &str) -> String {
    raw.trim()
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_and_uppercases() {
        assert_eq!(normalize_asin("b0-ABC*123 "), "B0ABC123");
    }

    #[test]
    fn test_normalize_plain_asin_unchanged() {
        assert_eq!(normalize_asin("B0TEST1234"), "B0TEST1234");
    }

    #[test]
    fn test_normalize_can_yield_empty() {
        assert_eq!(normalize_asin("  --*/ "), "");
        assert_eq!(normalize_asin(""), "");
    }

    #[test]
    fn test_normalize_non_ascii_dropped() {
        assert_eq!(normalize_asin("ñB01é234"), "B01234");
    }
}
