// ==========================================
// Asin Batcher - batcher
// ==========================================
// Contiguous near-equal partition with the exact remainder rule:
// the first (n mod k) batches carry one extra item.
// ==========================================

/// Partition `items` into `batches` contiguous groups.
///
/// Precondition (caller-enforced): `batches <= items.len()` whenever
/// `items` is non-empty. The API layer rejects oversized requests
/// before this point; the partition itself stays total and will hand
/// back empty tail batches if the contract is broken.
pub fn split_in_batches(items: Vec<String>, batches: usize) -> Vec<Vec<String>> {
    if batches <= 1 {
        return vec![items];
    }
    let n = items.len();
    if n == 0 {
        return vec![Vec::new(); batches];
    }

    let base = n / batches;
    let remainder = n % batches;

    let mut out = Vec::with_capacity(batches);
    let mut start = 0;
    for i in 0..batches {
        let count = base + usize::from(i < remainder);
        out.push(items[start..start + count].to_vec());
        start += count;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_five_into_three() {
        let out = split_in_batches(strings(&["A", "B", "C", "D", "E"]), 3);
        assert_eq!(
            out,
            vec![strings(&["A", "B"]), strings(&["C", "D"]), strings(&["E"])]
        );
    }

    #[test]
    fn test_single_batch_keeps_everything() {
        let items = strings(&["A", "B", "C"]);
        let out = split_in_batches(items.clone(), 1);
        assert_eq!(out, vec![items]);
    }

    #[test]
    fn test_even_split() {
        let out = split_in_batches(strings(&["A", "B", "C", "D"]), 2);
        assert_eq!(out, vec![strings(&["A", "B"]), strings(&["C", "D"])]);
    }

    #[test]
    fn test_partition_laws() {
        let items: Vec<String> = (0..23).map(|i| format!("B{:09}", i)).collect();
        let out = split_in_batches(items.clone(), 7);

        assert_eq!(out.len(), 7);
        let total: usize = out.iter().map(|b| b.len()).sum();
        assert_eq!(total, items.len());

        let max = out.iter().map(|b| b.len()).max().unwrap();
        let min = out.iter().map(|b| b.len()).min().unwrap();
        assert!(max - min <= 1);

        let concatenated: Vec<String> = out.into_iter().flatten().collect();
        assert_eq!(concatenated, items);
    }

    #[test]
    fn test_empty_input_yields_empty_batches() {
        let out = split_in_batches(Vec::new(), 4);
        assert_eq!(out, vec![Vec::<String>::new(); 4]);
    }
}
