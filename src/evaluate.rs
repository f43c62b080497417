//! Evaluation engine: scores embeddings against benchmark datasets.
//!
//! Results accumulate in an [`EvalResults`] value owned by the caller for
//! the duration of a run. Correlation scores append per embedding file;
//! coverage is overwritten, so only the most recent file's counts remain
//! for each dataset.

use crate::dataset::SimilarityDataset;
use crate::embedding::Embedding;
use crate::similarity::SimilarityMetric;
use crate::stats::spearman_correlation;
use std::collections::BTreeMap;
use tracing::debug;

/// Found/total pair counts for one dataset under one embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coverage {
    /// Pairs whose words were both in the vocabulary.
    pub found: usize,
    /// All pairs in the dataset.
    pub total: usize,
}

impl Coverage {
    /// Build from found/not-found counters; `total` is their sum, so
    /// `found <= total` holds by construction.
    pub fn new(found: usize, not_found: usize) -> Self {
        Self {
            found,
            total: found + not_found,
        }
    }

    /// Pairs skipped because a word was out of vocabulary.
    pub fn not_found(&self) -> usize {
        self.total - self.found
    }

    /// Out-of-vocabulary percentage, truncated toward zero. Only meaningful
    /// when `total` is nonzero (the reporter rejects the zero case first).
    pub fn oov_percent(&self) -> u32 {
        (100.0 - (self.found as f64 / self.total as f64) * 100.0) as u32
    }
}

/// Run-wide accumulator for per-dataset correlation scores and coverage.
///
/// Keyed by dataset filename; the ordered map makes report iteration
/// lexicographic without a separate sort.
#[derive(Debug, Clone, Default)]
pub struct EvalResults {
    scores: BTreeMap<String, Vec<f64>>,
    coverage: BTreeMap<String, Coverage>,
}

impl EvalResults {
    /// Initialize with one empty score list per dataset name.
    pub fn new<I, S>(dataset_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            scores: dataset_names
                .into_iter()
                .map(|name| (name.into(), Vec::new()))
                .collect(),
            coverage: BTreeMap::new(),
        }
    }

    /// Record one embedding file's outcome for a dataset: the correlation
    /// appends, the coverage replaces whatever was there.
    pub fn record(&mut self, dataset: &str, rho: f64, coverage: Coverage) {
        self.scores
            .entry(dataset.to_string())
            .or_default()
            .push(rho);
        self.coverage.insert(dataset.to_string(), coverage);
    }

    /// Dataset names in lexicographic order.
    pub fn datasets(&self) -> impl Iterator<Item = &str> + '_ {
        self.scores.keys().map(String::as_str)
    }

    /// All correlations recorded for a dataset, in evaluation order.
    pub fn scores(&self, dataset: &str) -> Option<&[f64]> {
        self.scores.get(dataset).map(Vec::as_slice)
    }

    /// Most recent coverage recorded for a dataset.
    pub fn coverage(&self, dataset: &str) -> Option<Coverage> {
        self.coverage.get(dataset).copied()
    }

    /// Number of datasets tracked.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if no datasets are tracked.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Scores embeddings against benchmark datasets.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    metric: SimilarityMetric,
}

impl Evaluator {
    /// Evaluator with the default cosine metric.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluator with an explicit similarity metric.
    pub fn with_metric(metric: SimilarityMetric) -> Self {
        Self { metric }
    }

    /// The metric word pairs are scored with.
    pub fn metric(&self) -> SimilarityMetric {
        self.metric
    }

    /// Score one embedding against every dataset, recording into `results`.
    pub fn evaluate(
        &self,
        embedding: &Embedding,
        datasets: &[SimilarityDataset],
        results: &mut EvalResults,
    ) {
        for dataset in datasets {
            let (rho, coverage) = self.evaluate_dataset(embedding, dataset);
            debug!(
                "{}: rho={:.4} found={} not_found={} ({})",
                dataset.name,
                rho,
                coverage.found,
                coverage.not_found(),
                self.metric.name()
            );
            results.record(&dataset.name, rho, coverage);
        }
    }

    /// Correlate one dataset's human scores with embedding similarities.
    fn evaluate_dataset(
        &self,
        embedding: &Embedding,
        dataset: &SimilarityDataset,
    ) -> (f64, Coverage) {
        let mut human = Vec::with_capacity(dataset.len());
        let mut computed = Vec::with_capacity(dataset.len());
        let mut not_found = 0usize;

        for pair in &dataset.pairs {
            match (embedding.get(&pair.word1), embedding.get(&pair.word2)) {
                (Some(v1), Some(v2)) => {
                    human.push(pair.score);
                    computed.push(self.metric.apply(v1, v2));
                }
                _ => not_found += 1,
            }
        }

        let rho = spearman_correlation(&human, &computed);
        (rho, Coverage::new(human.len(), not_found))
    }
}
