//! Error types for the embedding evaluator.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our custom error.
pub type Result<T> = std::result::Result<T, EvalError>;

/// Errors that can occur while evaluating embeddings.
///
/// Every variant is fatal: the run stops at the first error raised. The one
/// recoverable condition in the pipeline, a word token that fails UTF-8
/// decoding, is handled inside the parser by substituting the placeholder
/// word `"unknown"` and never surfaces here.
#[derive(Error, Debug)]
pub enum EvalError {
    /// Error reading an embedding file, dataset file, or directory.
    #[error("I/O error for path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The embedding file header is not the fixed 10-byte
    /// `"<count> <dim>\n"` form, or its integers do not parse.
    #[error("Malformed header in '{path}': {reason}")]
    MalformedHeader { path: PathBuf, reason: String },

    /// The embedding file ended before all bytes promised by the header
    /// were read.
    #[error("Embedding file '{path}' is truncated: {reason}")]
    TruncatedFile { path: PathBuf, reason: String },

    /// A benchmark dataset line is not `word1 word2 score`.
    #[error("Malformed line {line} in dataset '{dataset}': {reason}")]
    DatasetFormat {
        dataset: String,
        line: usize,
        reason: String,
    },

    /// Aggregation over results that cannot produce meaningful statistics
    /// (an empty score list, or no found pairs to weight by).
    #[error("Degenerate statistics: {0}")]
    DegenerateStats(String),

    /// Configuration file error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl EvalError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
