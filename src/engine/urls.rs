// ==========================================
// Asin Batcher - URL builder
// ==========================================
// One fixed template per market; `Market` is a closed enum, so
// anything outside the allow-list never reaches this point.
// ==========================================

use crate::domain::Market;

/// Build the canonical product URL for an ASIN in a market.
pub fn build_url(asin: &str, market: Market) -> String {
    match market {
        Market::Us => format!("https://www.amazon.com/dp/{asin}?th=1"),
        Market::Mx => format!("https://www.amazon.com.mx/dp/{asin}?th=1"),
    }
}
