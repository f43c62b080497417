//! Embedding Eval - Intrinsic quality evaluation for word embeddings.
//!
//! This library scores trained word embeddings against human word-similarity
//! benchmarks. It reads the binary dump format produced by
//! [dict2vec](https://github.com/tca19/dict2vec)-style training tools and
//! reports Spearman rank correlations between model similarities and human
//! judgements.
//!
//! # Overview
//!
//! An evaluation run:
//! 1. Parses each binary embedding dump into an in-memory vector matrix
//! 2. Computes a similarity score (cosine by default) for every benchmark
//!    word pair covered by the vocabulary
//! 3. Rank-correlates the model scores against the human gold scores
//! 4. Aggregates per-dataset statistics into a summary table with a
//!    coverage-weighted global average
//!
//! # Quick Start
//!
//! ```no_run
//! use embedding_eval::{
//!     config::Config,
//!     dataset::{discover_datasets, SimilarityDataset},
//!     embedding::Embedding,
//!     evaluate::{EvalResults, Evaluator},
//!     report::Report,
//! };
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Load configuration
//!     let config = Config::load()?;
//!     config.validate()?;
//!
//!     // Parse the benchmark datasets once
//!     let mut datasets = Vec::new();
//!     for path in discover_datasets(&config.data_dir)? {
//!         datasets.push(SimilarityDataset::load(&path)?);
//!     }
//!
//!     // Score an embedding against every dataset
//!     let mut results = EvalResults::new(datasets.iter().map(|d| d.name.as_str()));
//!     let embedding = Embedding::load(Path::new("vectors.bin"))?;
//!     Evaluator::new().evaluate(&embedding, &datasets, &mut results);
//!
//!     // Render the summary table
//!     let report = Report::from_results(&results)?;
//!     print!("{}", report.format_table());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - **Embedding**: word-to-vector store parsed from a binary dump
//! - **SimilarityDataset**: human-scored word pairs from a benchmark file
//! - **Evaluator**: scores pairs and rank-correlates against human judgements
//! - **EvalResults**: accumulator across embedding files and datasets
//! - **Report**: per-dataset statistics plus the coverage-weighted average

pub mod config;
pub mod dataset;
pub mod embedding;
pub mod error;
pub mod evaluate;
pub mod report;
pub mod similarity;
pub mod stats;

// Re-export commonly used types
pub use config::Config;
pub use dataset::{discover_datasets, SimilarityDataset, SimilarityPair};
pub use embedding::Embedding;
pub use error::{EvalError, Result};
pub use evaluate::{Coverage, EvalResults, Evaluator};
pub use report::{DatasetSummary, Report};
pub use similarity::SimilarityMetric;
