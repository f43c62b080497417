//! Benchmark dataset discovery and parsing.
//!
//! A benchmark dataset is a plain-text file of human similarity judgments,
//! one `word1 word2 score` triplet per line. Every regular file directly
//! inside the benchmark directory is a dataset; discovery is flat and
//! returns lexicographic filename order.

use crate::error::{EvalError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One human similarity judgment. Words are stored lower-cased, ready for
/// vocabulary lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityPair {
    pub word1: String,
    pub word2: String,
    pub score: f64,
}

/// A parsed benchmark dataset file.
#[derive(Debug, Clone)]
pub struct SimilarityDataset {
    /// Dataset filename, used as the reporting key.
    pub name: String,
    /// Judgments in file order.
    pub pairs: Vec<SimilarityPair>,
}

impl SimilarityDataset {
    /// Parse a benchmark file. Every line must be exactly
    /// `word1 word2 score`; a short line, a long line, or an unparsable
    /// score is fatal, not skipped.
    pub fn load(path: &Path) -> Result<Self> {
        let name = dataset_name(path);
        let content = fs::read_to_string(path).map_err(|e| EvalError::io(path, e))?;

        let mut pairs = Vec::new();
        for (number, line) in content.lines().enumerate() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 3 {
                return Err(EvalError::DatasetFormat {
                    dataset: name.clone(),
                    line: number + 1,
                    reason: format!(
                        "expected 3 whitespace-separated fields, got {}",
                        fields.len()
                    ),
                });
            }
            let score: f64 = fields[2].parse().map_err(|_| EvalError::DatasetFormat {
                dataset: name.clone(),
                line: number + 1,
                reason: format!("score '{}' is not a number", fields[2]),
            })?;
            pairs.push(SimilarityPair {
                word1: fields[0].to_lowercase(),
                word2: fields[1].to_lowercase(),
                score,
            });
        }

        Ok(Self { name, pairs })
    }

    /// Number of judgments.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if the dataset has no judgments.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Dataset filename used as the reporting key.
fn dataset_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("dataset")
        .to_string()
}

/// List the benchmark files directly inside `dir`, sorted by filename.
/// Subdirectories are not entered.
pub fn discover_datasets(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| walk_error(dir, e))?;
        if entry.file_type().is_file() {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

fn walk_error(dir: &Path, source: walkdir::Error) -> EvalError {
    let path = source
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.to_path_buf());
    let source = source
        .into_io_error()
        .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "directory walk failed"));
    EvalError::Io { path, source }
}
