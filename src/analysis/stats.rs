//! Summary statistics shared by the analyses
//!
//! All helpers return 0 (or `None`) for empty input instead of NaN, so report
//! fields are always printable.

use statrs::statistics::Statistics;

/// Arithmetic mean, 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.mean()
    }
}

/// Population standard deviation, 0 for an empty slice.
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.population_std_dev()
    }
}

/// Element at index `len / 2` of the sorted values.
///
/// For even lengths this is the upper of the two middle elements, which is
/// what the published training reports use.
pub fn upper_median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Some(sorted[sorted.len() / 2])
}

/// Shannon entropy of a count distribution normalized by `ln(n)`.
///
/// Returns 1.0 for a perfectly uniform spread and 0.0 when all mass sits on a
/// single bucket. Fewer than two buckets, or no mass at all, yields 0.
pub fn normalized_entropy(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    if counts.len() < 2 || total == 0 {
        return 0.0;
    }
    let entropy: f64 = counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total as f64;
            -p * p.ln()
        })
        .sum();
    entropy / (counts.len() as f64).ln()
}

/// `part / whole`, 0 when `whole` is 0.
pub fn ratio(part: f64, whole: f64) -> f64 {
    if whole > 0.0 { part / whole } else { 0.0 }
}
