//! Vector similarity metrics.
//!
//! Cosine is the metric the evaluation runs with; Tanimoto is kept as a
//! pluggable alternative for callers of the library API. Both accumulate in
//! f64 and carry no zero-norm guard: an all-zero vector makes the quotient
//! 0/0 and the resulting NaN flows through rank correlation instead of
//! crashing or being silently replaced.

use serde::{Deserialize, Serialize};

/// Similarity function applied to each found word pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimilarityMetric {
    /// dot(a,b) / (|a| * |b|). The default.
    #[default]
    Cosine,
    /// dot(a,b) / (|a|^2 + |b|^2 - dot(a,b)).
    Tanimoto,
}

impl SimilarityMetric {
    /// Apply the metric to two vectors of equal length.
    pub fn apply(&self, a: &[f32], b: &[f32]) -> f64 {
        match self {
            SimilarityMetric::Cosine => cosine_similarity(a, b),
            SimilarityMetric::Tanimoto => tanimoto_similarity(a, b),
        }
    }

    /// Human-readable metric name.
    pub fn name(&self) -> &'static str {
        match self {
            SimilarityMetric::Cosine => "cosine",
            SimilarityMetric::Tanimoto => "tanimoto",
        }
    }
}

/// Compute cosine similarity between two vectors of equal length.
/// NaN when either vector is all-zero.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Compute Tanimoto similarity between two vectors of equal length.
/// NaN when both vectors are all-zero.
pub fn tanimoto_similarity(a: &[f32], b: &[f32]) -> f64 {
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    dot / (norm_a + norm_b - dot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_similarity() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![1.0, 0.0, 0.0];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-9);

        let c = vec![0.0, 1.0, 0.0];
        assert!(cosine_similarity(&a, &c).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_similarity_scale_invariant() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![2.0, 4.0, 6.0];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_similarity_zero_vector_is_nan() {
        let zero = vec![0.0, 0.0];
        let a = vec![1.0, 0.0];
        assert!(cosine_similarity(&zero, &a).is_nan());
    }

    #[test]
    fn test_tanimoto_similarity() {
        let a = vec![1.0, 2.0];
        assert!((tanimoto_similarity(&a, &a) - 1.0).abs() < 1e-9);

        let b = vec![1.0, 0.0];
        let c = vec![0.0, 1.0];
        assert!(tanimoto_similarity(&b, &c).abs() < 1e-9);
    }

    #[test]
    fn test_metric_dispatch() {
        let a = vec![1.0, 0.0];
        let metric = SimilarityMetric::default();
        assert_eq!(metric, SimilarityMetric::Cosine);
        assert!((metric.apply(&a, &a) - 1.0).abs() < 1e-9);
        assert_eq!(SimilarityMetric::Tanimoto.name(), "tanimoto");
    }
}
