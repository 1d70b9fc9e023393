//! Shannon entropy over verdict categories.

/// Returns the Shannon entropy, in bits, of the distribution given by
/// `counts` (one count per category).
///
/// Categories with a zero count contribute nothing. An all-zero or empty
/// input yields `0.0`.
pub fn shannon_entropy(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}
