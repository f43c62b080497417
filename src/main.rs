//! Embedding Eval CLI
//!
//! Scores word embedding files against word-similarity benchmarks and
//! prints an aggregate report.

use anyhow::{Context, Result};
use clap::Parser;
use embedding_eval::{
    config::Config,
    dataset::{discover_datasets, SimilarityDataset},
    embedding::Embedding,
    evaluate::{EvalResults, Evaluator},
    report::Report,
};
use std::path::PathBuf;
use tracing::info;

/// Evaluate semantic similarities of word embeddings
#[derive(Parser)]
#[command(name = "embedding-eval")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Filename of word embedding to evaluate
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging. The report goes to stdout, so logs stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let dataset_paths = discover_datasets(&config.data_dir).with_context(|| {
        format!(
            "Failed to list benchmark datasets in '{}'",
            config.data_dir.display()
        )
    })?;

    let mut datasets = Vec::with_capacity(dataset_paths.len());
    for path in &dataset_paths {
        let dataset = SimilarityDataset::load(path)
            .with_context(|| format!("Failed to load dataset '{}'", path.display()))?;
        datasets.push(dataset);
    }
    info!(
        "loaded {} benchmark datasets from {}",
        datasets.len(),
        config.data_dir.display()
    );

    let evaluator = Evaluator::new();
    let mut results = EvalResults::new(datasets.iter().map(|d| d.name.as_str()));

    for file in &cli.files {
        info!("evaluating {}", file.display());
        let embedding = Embedding::load(file)
            .with_context(|| format!("Failed to read embedding file '{}'", file.display()))?;
        evaluator.evaluate(&embedding, &datasets, &mut results);
    }

    let report = Report::from_results(&results).context("Failed to aggregate results")?;
    report.print();

    if let Some(json_path) = &config.report_json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        std::fs::write(json_path, json)
            .with_context(|| format!("Failed to write report to '{}'", json_path.display()))?;
        info!("report written to {}", json_path.display());
    }

    Ok(())
}
