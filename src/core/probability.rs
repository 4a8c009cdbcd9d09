// probability.rs - Count table normalization

/// Convert a table of occurrence counts into probabilities.
///
/// Every entry becomes `count / total`. When `total` is zero (every sample
/// was missing data) all probabilities are `0.0`.
pub fn counts_to_probabilities(counts: &[u32]) -> Vec<f64> {
    let total: u64 = counts.iter().map(|&c| c as u64).sum();
    if total == 0 {
        return vec![0.0; counts.len()];
    }
    let total = total as f64;
    counts.iter().map(|&c| c as f64 / total).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probabilities_sum_to_one() {
        let counts = [3, 0, 7, 1, 0, 12, 5];
        let probabilities = counts_to_probabilities(&counts);
        assert_eq!(probabilities.len(), counts.len());

        let sum: f64 = probabilities.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert_eq!(probabilities[1], 0.0);
        assert!((probabilities[5] - 12.0 / 28.0).abs() < 1e-15);
    }

    #[test]
    fn test_zero_total_gives_zeros() {
        let probabilities = counts_to_probabilities(&[0; 16]);
        assert_eq!(probabilities, vec![0.0; 16]);
        assert_eq!(probabilities.iter().sum::<f64>(), 0.0);
    }

    #[test]
    fn test_single_key() {
        assert_eq!(counts_to_probabilities(&[0, 9, 0]), vec![0.0, 1.0, 0.0]);
    }
}
