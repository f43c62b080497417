//! Aggregate report over accumulated evaluation results.
//!
//! One row per dataset in lexicographic order, then a coverage-weighted
//! global average. The table reproduces the reference layout exactly: a
//! 16-column name cell, five `"| "`-prefixed 5-column cells, `=`/`-` rules
//! of title width, 3-decimal numeric cells, and a truncated integer oov%.

use crate::error::{EvalError, Result};
use crate::evaluate::EvalResults;
use crate::stats::{mean, std_dev};
use serde::Serialize;

/// Summary row for one dataset.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    /// Dataset filename.
    pub name: String,
    /// Mean of the recorded correlations.
    pub average: f64,
    /// Smallest recorded correlation.
    pub minimum: f64,
    /// Largest recorded correlation.
    pub maximum: f64,
    /// Population standard deviation of the recorded correlations.
    pub std_dev: f64,
    /// Out-of-vocabulary percentage from the most recent coverage.
    pub oov_percent: u32,
    /// Found pairs from the most recent coverage (the weighting factor).
    pub found: usize,
}

/// Final aggregated report.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// One row per dataset, lexicographic by filename.
    pub rows: Vec<DatasetSummary>,
    /// Coverage-weighted mean of the per-dataset averages.
    pub weighted_average: f64,
}

impl Report {
    /// Aggregate accumulated results into per-dataset rows and the global
    /// weighted average.
    ///
    /// Degenerate inputs are fatal: a dataset with no recorded scores, a
    /// dataset whose most recent coverage found nothing, or zero found
    /// pairs overall. NaN correlations are not degenerate; they poison
    /// every numeric cell of the affected row and the report still
    /// renders.
    pub fn from_results(results: &EvalResults) -> Result<Self> {
        let mut rows = Vec::with_capacity(results.len());
        let mut weighted_sum = 0.0;
        let mut total_found = 0usize;

        for name in results.datasets() {
            let scores = results.scores(name).unwrap_or_default();
            if scores.is_empty() {
                return Err(EvalError::DegenerateStats(format!(
                    "dataset '{name}' has no recorded correlation scores"
                )));
            }
            let coverage = results.coverage(name).ok_or_else(|| {
                EvalError::DegenerateStats(format!("dataset '{name}' has no coverage record"))
            })?;
            if coverage.found == 0 {
                return Err(EvalError::DegenerateStats(format!(
                    "dataset '{name}' had no overlapping word pairs"
                )));
            }

            let average = mean(scores);
            weighted_sum += coverage.found as f64 * average;
            total_found += coverage.found;

            // f64::min and f64::max skip NaN, which would render an all-NaN
            // score list as infinite extremes. Any NaN poisons both cells.
            let (minimum, maximum) = if scores.iter().any(|s| s.is_nan()) {
                (f64::NAN, f64::NAN)
            } else {
                (
                    scores.iter().copied().fold(f64::INFINITY, f64::min),
                    scores.iter().copied().fold(f64::NEG_INFINITY, f64::max),
                )
            };

            rows.push(DatasetSummary {
                name: name.to_string(),
                average,
                minimum,
                maximum,
                std_dev: std_dev(scores),
                oov_percent: coverage.oov_percent(),
                found: coverage.found,
            });
        }

        if total_found == 0 {
            return Err(EvalError::DegenerateStats(
                "no word pairs were found in any dataset".to_string(),
            ));
        }

        Ok(Self {
            rows,
            weighted_average: weighted_sum / total_found as f64,
        })
    }

    /// Render the report table.
    pub fn format_table(&self) -> String {
        let title = format!(
            "{:<16}| {:<5}| {:<5}| {:<5}| {:<5}| {:<5}",
            "Filename", "AVG", "MIN", "MAX", "STD", "oov"
        );

        let mut out = String::new();
        out.push_str(&title);
        out.push('\n');
        out.push_str(&"=".repeat(title.len()));
        out.push('\n');
        for row in &self.rows {
            out.push_str(&format!(
                "{:<16}| {:.3}| {:.3}| {:.3}| {:.3}|  {}%\n",
                row.name, row.average, row.minimum, row.maximum, row.std_dev, row.oov_percent
            ));
        }
        out.push_str(&"-".repeat(title.len()));
        out.push('\n');
        out.push_str(&format!(
            "{:<16}| {:.3}\n",
            "W.Average", self.weighted_average
        ));
        out
    }

    /// Print the table to stdout.
    pub fn print(&self) {
        print!("{}", self.format_table());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::Coverage;

    #[test]
    fn test_weighted_average_is_coverage_weighted() {
        let mut results = EvalResults::new(["a.txt", "b.txt"]);
        results.record("a.txt", 0.5, Coverage::new(10, 0));
        results.record("b.txt", 0.9, Coverage::new(90, 10));

        let report = Report::from_results(&results).unwrap();
        // (10*0.5 + 90*0.9) / 100, not the flat mean 0.7.
        assert!((report.weighted_average - 0.86).abs() < 1e-9);
        assert_eq!(report.rows.len(), 2);
    }

    #[test]
    fn test_row_statistics() {
        let mut results = EvalResults::new(["ws353.txt"]);
        results.record("ws353.txt", 0.5, Coverage::new(7, 6));
        results.record("ws353.txt", 0.7, Coverage::new(7, 6));

        let report = Report::from_results(&results).unwrap();
        let row = &report.rows[0];
        assert_eq!(row.name, "ws353.txt");
        assert!((row.average - 0.6).abs() < 1e-9);
        assert!((row.minimum - 0.5).abs() < 1e-9);
        assert!((row.maximum - 0.7).abs() < 1e-9);
        assert!((row.std_dev - 0.1).abs() < 1e-9);
        assert_eq!(row.oov_percent, 46);
        assert_eq!(row.found, 7);
    }

    #[test]
    fn test_rows_lexicographic() {
        let mut results = EvalResults::new(["b.txt", "a.txt", "c.txt"]);
        results.record("b.txt", 0.2, Coverage::new(1, 0));
        results.record("a.txt", 0.1, Coverage::new(1, 0));
        results.record("c.txt", 0.3, Coverage::new(1, 0));

        let report = Report::from_results(&results).unwrap();
        let names: Vec<&str> = report.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_dataset_without_scores_is_fatal() {
        let results = EvalResults::new(["a.txt"]);
        let err = Report::from_results(&results).unwrap_err();
        assert!(matches!(err, EvalError::DegenerateStats(_)));
    }

    #[test]
    fn test_dataset_without_found_pairs_is_fatal() {
        let mut results = EvalResults::new(["a.txt"]);
        results.record("a.txt", f64::NAN, Coverage::new(0, 5));
        let err = Report::from_results(&results).unwrap_err();
        assert!(matches!(err, EvalError::DegenerateStats(_)));
    }

    #[test]
    fn test_no_datasets_is_fatal() {
        let results = EvalResults::default();
        let err = Report::from_results(&results).unwrap_err();
        assert!(matches!(err, EvalError::DegenerateStats(_)));
    }

    #[test]
    fn test_nan_scores_poison_cells_but_still_render() {
        let mut results = EvalResults::new(["a.txt", "b.txt"]);
        results.record("a.txt", f64::NAN, Coverage::new(3, 1));
        results.record("b.txt", 0.5, Coverage::new(4, 0));

        let report = Report::from_results(&results).unwrap();
        assert!(report.rows[0].average.is_nan());
        assert!(report.rows[0].minimum.is_nan());
        assert!(report.rows[0].maximum.is_nan());
        assert!(report.weighted_average.is_nan());
        assert!(report.format_table().contains("NaN"));
    }

    #[test]
    fn test_all_nan_scores_render_nan_extremes() {
        // A single found pair leaves the correlation undefined; the row
        // must carry NaN through all four numeric cells, not infinite
        // extremes from a NaN-skipping min/max.
        let mut results = EvalResults::new(["pairs.txt"]);
        results.record("pairs.txt", f64::NAN, Coverage::new(1, 0));

        let report = Report::from_results(&results).unwrap();
        let row = &report.rows[0];
        assert!(row.minimum.is_nan());
        assert!(row.maximum.is_nan());
        assert!(row.std_dev.is_nan());

        let table = report.format_table();
        assert!(!table.contains("inf"));
        assert_eq!(
            table.lines().nth(2).unwrap(),
            "pairs.txt       | NaN| NaN| NaN| NaN|  0%"
        );
    }

    #[test]
    fn test_table_layout() {
        let mut results = EvalResults::new(["ws353.txt"]);
        results.record("ws353.txt", 0.5, Coverage::new(7, 6));
        results.record("ws353.txt", 0.7, Coverage::new(7, 6));

        let table = Report::from_results(&results).unwrap().format_table();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(
            lines[0],
            "Filename        | AVG  | MIN  | MAX  | STD  | oov  "
        );
        assert_eq!(lines[1], "=".repeat(51));
        assert_eq!(lines[2], "ws353.txt       | 0.600| 0.500| 0.700| 0.100|  46%");
        assert_eq!(lines[3], "-".repeat(51));
        assert_eq!(lines[4], "W.Average       | 0.600");
    }

    #[test]
    fn test_report_serializes_to_json() {
        let mut results = EvalResults::new(["a.txt"]);
        results.record("a.txt", 0.5, Coverage::new(2, 0));

        let report = Report::from_results(&results).unwrap();
        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(json.contains("\"weighted_average\""));
        assert!(json.contains("\"a.txt\""));
    }
}
