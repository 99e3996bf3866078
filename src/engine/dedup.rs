// ==========================================
// Asin Batcher - deduplicator
// ==========================================
// Single left-to-right pass; encounter order preserved in both
// outputs so later reordering stays deterministic.
// ==========================================

use std::collections::HashSet;

/// Result of splitting a token stream into uniques and duplicates.
///
/// Invariant: the multiset union of `unique` and `duplicates` equals
/// the multiset of input tokens; `unique` contains no repeats;
/// `duplicates` holds every occurrence after the first, in encounter
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub unique: Vec<String>,
    pub duplicates: Vec<String>,
}

impl ExtractionResult {
    /// Total number of valid tokens encountered.
    pub fn total(&self) -> usize {
        self.unique.len() + self.duplicates.len()
    }
}

/// Split normalized tokens into first-occurrence uniques and ordered
/// duplicates.
pub fn deduplicate(tokens: Vec<String>) -> ExtractionResult {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    let mut duplicates = Vec::new();

    for token in tokens {
        if seen.contains(&token) {
            duplicates.push(token);
        } else {
            seen.insert(token.clone());
            unique.push(token);
        }
    }

    ExtractionResult { unique, duplicates }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_occurrence_stable() {
        let result = deduplicate(strings(&["B", "A", "B", "C", "A", "B"]));
        assert_eq!(result.unique, strings(&["B", "A", "C"]));
        assert_eq!(result.duplicates, strings(&["B", "A", "B"]));
    }

    #[test]
    fn test_multiset_union_preserved() {
        let input = strings(&["X", "Y", "X", "Z", "X"]);
        let result = deduplicate(input.clone());

        let mut recombined = result.unique.clone();
        recombined.extend(result.duplicates.clone());
        recombined.sort();
        let mut expected = input;
        expected.sort();
        assert_eq!(recombined, expected);
        assert_eq!(result.total(), 5);
    }

    #[test]
    fn test_no_duplicates() {
        let result = deduplicate(strings(&["A", "B", "C"]));
        assert_eq!(result.unique, strings(&["A", "B", "C"]));
        assert!(result.duplicates.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let result = deduplicate(Vec::new());
        assert!(result.unique.is_empty());
        assert!(result.duplicates.is_empty());
        assert_eq!(result.total(), 0);
    }
}
