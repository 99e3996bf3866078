// ==========================================
// Asin Batcher - output file naming
// ==========================================
// User-supplied labels become file names; everything outside
// [A-Za-z0-9_()+-] is squashed to underscore.
// ==========================================

use once_cell::sync::Lazy;
use regex::Regex;

/// Fallback name when sanitization leaves nothing.
pub const EMPTY_NAME_PLACEHOLDER: &str = "archivo";

static DISALLOWED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9_()+-]").expect("invalid name pattern"));
static UNDERSCORE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_+").expect("invalid underscore pattern"));

/// Sanitize a user-supplied label into a safe file name stem.
///
/// Spaces and hyphens become underscores, every other character
/// outside the allowed set becomes an underscore, runs collapse to
/// one, and leading/trailing underscores and dots are trimmed.
pub fn sanitize_filename(label: &str) -> String {
    let replaced = label.trim().replace([' ', '-'], "_");
    let replaced = DISALLOWED_RE.replace_all(&replaced, "_");
    let collapsed = UNDERSCORE_RUN_RE.replace_all(&replaced, "_");
    let trimmed = collapsed
        .trim_matches('_')
        .trim_matches('.')
        .to_string();
    if trimmed.is_empty() {
        EMPTY_NAME_PLACEHOLDER.to_string()
    } else {
        trimmed
    }
}
