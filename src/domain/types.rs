// ==========================================
// Asin Batcher - domain type definitions
// ==========================================
// Markets, ordering policies and the fixed store catalog
// shared by the importer, engine and API layers.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default number of batches when the request carries none (or garbage).
pub const DEFAULT_BATCHES: usize = 30;

// ==========================================
// Market
// ==========================================
// Storefront selector; controls which URL template is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Market {
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "MX")]
    Mx,
}

impl Market {
    /// Parse a request-level market string. Anything outside the fixed
    /// allow-list falls back to the default (`US`).
    pub fn from_request(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("MX") => Market::Mx,
            _ => Market::Us,
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Market::Us => write!(f, "US"),
            Market::Mx => write!(f, "MX"),
        }
    }
}

// ==========================================
// Ordering policy
// ==========================================
// Wire values are the historical Spanish labels; anything
// unrecognized degrades to the ascending sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderPolicy {
    /// Ascending lexicographic sort ("Ordenado").
    Ascending,
    /// Descending lexicographic sort ("Inverso").
    Descending,
    /// Uniform unseeded shuffle ("Aleatorio"); intentionally
    /// non-reproducible across invocations.
    Random,
}

impl OrderPolicy {
    pub fn from_request(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("inverso") => OrderPolicy::Descending,
            Some("aleatorio") => OrderPolicy::Random,
            _ => OrderPolicy::Ascending,
        }
    }
}

impl fmt::Display for OrderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderPolicy::Ascending => write!(f, "Ordenado"),
            OrderPolicy::Descending => write!(f, "Inverso"),
            OrderPolicy::Random => write!(f, "Aleatorio"),
        }
    }
}

// ==========================================
// Store catalog
// ==========================================
// Fixed legacy catalog; the first entry is the fallback when a
// request names a store outside the list.
pub const STORES_LEFT: [&str; 4] = ["ProductosTX", "Holaproducto", "Altinor", "HervazTrade"];
pub const STORES_RIGHT: [&str; 3] = ["BBvs_Template", "BBvsBB2_2da", "BBvsBB2"];

/// All known stores, left group first.
pub fn all_stores() -> Vec<&'static str> {
    STORES_LEFT.iter().chain(STORES_RIGHT.iter()).copied().collect()
}

/// Resolve a request-supplied store selection against the catalog.
pub fn store_from_selection(selected: Option<&str>) -> &'static str {
    let stores = all_stores();
    match selected {
        Some(s) => stores
            .iter()
            .find(|known| **known == s)
            .copied()
            .unwrap_or(stores[0]),
        None => stores[0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_from_request_defaults_to_us() {
        assert_eq!(Market::from_request(Some("MX")), Market::Mx);
        assert_eq!(Market::from_request(Some("US")), Market::Us);
        assert_eq!(Market::from_request(Some("BR")), Market::Us);
        assert_eq!(Market::from_request(None), Market::Us);
    }

    #[test]
    fn test_order_policy_unrecognized_degrades_to_ascending() {
        assert_eq!(OrderPolicy::from_request(Some("Inverso")), OrderPolicy::Descending);
        assert_eq!(OrderPolicy::from_request(Some("ALEATORIO")), OrderPolicy::Random);
        assert_eq!(OrderPolicy::from_request(Some("whatever")), OrderPolicy::Ascending);
        assert_eq!(OrderPolicy::from_request(None), OrderPolicy::Ascending);
    }

    #[test]
    fn test_store_from_selection_falls_back_to_first() {
        assert_eq!(store_from_selection(Some("Altinor")), "Altinor");
        assert_eq!(store_from_selection(Some("Desconocida")), "ProductosTX");
        assert_eq!(store_from_selection(None), "ProductosTX");
    }
}
