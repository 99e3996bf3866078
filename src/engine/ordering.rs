// ==========================================
// Asin Batcher - orderer
// ==========================================
// Three policies over the unique list. The random policy draws from
// the process-wide unseeded generator: runs are intentionally not
// reproducible.
// ==========================================

use crate::domain::OrderPolicy;
use rand::seq::SliceRandom;

/// Apply an ordering policy to the unique ASIN list.
pub fn reorder(mut asins: Vec<String>, policy: OrderPolicy) -> Vec<String> {
    match policy {
        OrderPolicy::Ascending => asins.sort(),
        OrderPolicy::Descending => {
            asins.sort();
            asins.reverse();
        }
        OrderPolicy::Random => asins.shuffle(&mut rand::thread_rng()),
    }
    asins
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ascending() {
        let out = reorder(strings(&["C", "A", "B"]), OrderPolicy::Ascending);
        assert_eq!(out, strings(&["A", "B", "C"]));
    }

    #[test]
    fn test_descending() {
        let out = reorder(strings(&["C", "A", "B"]), OrderPolicy::Descending);
        assert_eq!(out, strings(&["C", "B", "A"]));
    }

    #[test]
    fn test_random_is_a_permutation() {
        // Sequence is intentionally unasserted; only multiset equality.
        let input = strings(&["A", "B", "C", "D", "E"]);
        let mut out = reorder(input.clone(), OrderPolicy::Random);
        out.sort();
        assert_eq!(out, input);
    }
}
