//! Configuration for evaluation runs.
//!
//! Supports both environment variables and a YAML config file.
//! Environment variables take precedence over config file values.

use crate::error::{EvalError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Full application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the word-similarity benchmark files.
    pub data_dir: PathBuf,

    /// Optional path for a JSON copy of the final report.
    pub report_json: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data/eval"),
            report_json: None,
        }
    }
}

/// Configuration file structure (YAML format).
#[derive(Debug, Deserialize)]
struct ConfigFile {
    eval: Option<EvalFileSection>,
}

#[derive(Debug, Deserialize)]
struct EvalFileSection {
    data_dir: Option<PathBuf>,
    report_json: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables and optional config file.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (EMBEDDING_EVAL_DATA_DIR, EMBEDDING_EVAL_REPORT_JSON)
    /// 2. Config file (~/.config/embedding-eval/config.yaml)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        let mut config = Config::default();

        // Try to load from config file first
        if let Some(config_path) = Self::config_file_path() {
            if config_path.exists() {
                config = Self::load_from_file(&config_path)?;
            }
        }

        // Override with environment variables
        if let Ok(data_dir) = env::var("EMBEDDING_EVAL_DATA_DIR") {
            config.data_dir = PathBuf::from(data_dir);
        }

        if let Ok(report_json) = env::var("EMBEDDING_EVAL_REPORT_JSON") {
            config.report_json = Some(PathBuf::from(report_json));
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| EvalError::io(path, e))?;

        let file_config: ConfigFile = serde_yaml::from_str(&content)
            .map_err(|e| EvalError::Config(format!("Failed to parse config file: {}", e)))?;

        let mut config = Config::default();

        if let Some(eval) = file_config.eval {
            if let Some(data_dir) = eval.data_dir {
                config.data_dir = data_dir;
            }
            if let Some(report_json) = eval.report_json {
                config.report_json = Some(report_json);
            }
        }

        Ok(config)
    }

    /// Get the default config file path.
    pub fn config_file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "embedding-eval")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Validate that required configuration is present.
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(EvalError::Config(
                "Benchmark data directory is required. Set EMBEDDING_EVAL_DATA_DIR environment variable or add eval.data_dir to the config file.".to_string()
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.data_dir, PathBuf::from("data/eval"));
        assert!(config.report_json.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_data_dir() {
        let config = Config {
            data_dir: PathBuf::new(),
            report_json: None,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "eval:\n  data_dir: /srv/benchmarks\n  report_json: report.json\n",
        )
        .unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/benchmarks"));
        assert_eq!(config.report_json, Some(PathBuf::from("report.json")));
    }

    #[test]
    fn test_load_from_file_partial_section_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "eval:\n  report_json: out.json\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("data/eval"));
        assert_eq!(config.report_json, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_load_from_file_rejects_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "eval: [not, a, map").unwrap();

        assert!(matches!(
            Config::load_from_file(&path),
            Err(EvalError::Config(_))
        ));
    }
}
