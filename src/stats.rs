//! Rank statistics for the evaluation engine.
//!
//! Spearman correlation is computed the standard tie-aware way: both
//! sequences are converted to ranks (tied values share the average of the
//! ranks they occupy), then the rank sequences are Pearson-correlated.
//! Undefined results are represented as NaN, never as a substitute value.

use std::cmp::Ordering;

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (sum of squared deviations divided by the
/// count, not count - 1). NaN for an empty slice.
pub fn std_dev(values: &[f64]) -> f64 {
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Pearson correlation coefficient of two equally long sequences.
///
/// Returns NaN when the lengths differ, a sequence is empty, or either
/// sequence has zero variance (the 0/0 case is left to float arithmetic).
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.is_empty() {
        return f64::NAN;
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (xi, yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    cov / (var_x.sqrt() * var_y.sqrt())
}

/// Tie-aware Spearman rank correlation coefficient.
///
/// Returns NaN when the correlation is undefined: fewer than 2 pairs,
/// mismatched lengths, a NaN in either input, or all-tied ranks.
pub fn spearman_correlation(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.len() < 2 {
        return f64::NAN;
    }
    if x.iter().chain(y.iter()).any(|v| v.is_nan()) {
        return f64::NAN;
    }

    let ranks_x = average_ranks(x);
    let ranks_y = average_ranks(y);
    pearson_correlation(&ranks_x, &ranks_y)
}

/// 1-based ranks with tied values assigned the average of the ranks they
/// jointly occupy. Values must not contain NaN.
fn average_ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(Ordering::Equal)
    });

    let mut ranks = vec![0.0; values.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start;
        while end + 1 < order.len() && values[order[end + 1]] == values[order[start]] {
            end += 1;
        }
        // Positions start..=end are tied; 1-based ranks start+1..=end+1
        // collapse to their average.
        let rank = (start + end) as f64 / 2.0 + 1.0;
        for &index in &order[start..=end] {
            ranks[index] = rank;
        }
        start = end + 1;
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_std_dev() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert!((mean(&values) - 2.5).abs() < 1e-12);
        // Population form: sqrt(5/4).
        assert!((std_dev(&values) - 1.118033988749895).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_single_value() {
        assert!(std_dev(&[5.0]).abs() < 1e-12);
    }

    #[test]
    fn test_average_ranks_distinct() {
        assert_eq!(average_ranks(&[3.0, 1.0, 2.0]), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_average_ranks_ties() {
        assert_eq!(
            average_ranks(&[1.0, 2.0, 2.0, 3.0]),
            vec![1.0, 2.5, 2.5, 4.0]
        );
    }

    #[test]
    fn test_spearman_identity() {
        let x = [0.1, 0.4, 0.7, 0.9];
        assert!((spearman_correlation(&x, &x) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_spearman_reverse() {
        let x = [0.1, 0.4, 0.7, 0.9];
        let reversed = [0.9, 0.7, 0.4, 0.1];
        assert!((spearman_correlation(&x, &reversed) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_spearman_with_ties() {
        // Ranks [1, 2.5, 2.5, 4] against [1, 2, 3, 4]: rho = sqrt(0.9).
        let x = [1.0, 2.0, 2.0, 3.0];
        let y = [10.0, 20.0, 30.0, 40.0];
        assert!((spearman_correlation(&x, &y) - 0.9486832980505138).abs() < 1e-9);
    }

    #[test]
    fn test_spearman_undefined_cases() {
        assert!(spearman_correlation(&[], &[]).is_nan());
        assert!(spearman_correlation(&[1.0], &[2.0]).is_nan());
        assert!(spearman_correlation(&[1.0, 2.0], &[1.0]).is_nan());
        assert!(spearman_correlation(&[1.0, f64::NAN], &[1.0, 2.0]).is_nan());
    }

    #[test]
    fn test_pearson_zero_variance_is_nan() {
        assert!(pearson_correlation(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_nan());
    }
}
