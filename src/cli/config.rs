//! TOML configuration file support.
//!
//! Settings that would otherwise be repeated on every `score --save`:
//!
//! ```toml
//! # scalewiz.toml
//! [evaluation]
//! save_log = true
//! save_project = true
//! export_csv = true
//! output_dir = "reports"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use scalewiz::evaluation::SaveOptions;

/// Root configuration structure for scalewiz.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Evaluation settings.
    #[serde(default)]
    pub evaluation: EvaluationConfig,
}

/// Configuration for saving evaluation artifacts.
#[derive(Debug, Default, Deserialize)]
pub struct EvaluationConfig {
    /// Write the derivation log text file.
    pub save_log: Option<bool>,

    /// Write scored results back into the project file.
    pub save_project: Option<bool>,

    /// Write the CSV data table.
    pub export_csv: Option<bool>,

    /// Directory for log and data files.
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Save options from this config, with command-line values taking priority.
    pub fn save_options(&self, export_csv: bool, output_dir: Option<PathBuf>) -> SaveOptions {
        let defaults = SaveOptions::default();
        let eval = &self.evaluation;
        SaveOptions {
            save_log: eval.save_log.unwrap_or(defaults.save_log),
            save_project: eval.save_project.unwrap_or(defaults.save_project),
            export_csv: export_csv || eval.export_csv.unwrap_or(defaults.export_csv),
            output_dir: output_dir.or_else(|| eval.output_dir.clone()),
        }
    }
}
