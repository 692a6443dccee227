//! Configuration type definitions.

use crate::annotate::ApproximantRange;
use crate::bank::Column;
use crate::constants::{
    DEFAULT_BANK_LABEL, DEFAULT_GROUP_BY_CHI, DEFAULT_OUTPUT_DIR, DEFAULT_OVERLAP,
    output_extensions,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration as stored in the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Chirp-mass ranges mapped to approximants, checked in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub approximants: Vec<ApproximantRange>,
}

/// Default split settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Target number of templates per sub-bank.
    pub templates_per_bank: Option<usize>,

    /// Templates shared between neighbouring sub-banks.
    pub overlap: usize,

    /// Column templates are sorted by before splitting.
    pub sort_by: Option<Column>,

    /// Number of effective-spin bins.
    pub group_by_chi: usize,

    /// Instrument label written to output templates and file names.
    pub instrument: Option<String>,

    /// Lower frequency cutoff in Hz.
    pub f_low: Option<f64>,

    /// Ceiling on the upper frequency cutoff in Hz.
    pub max_f_final: Option<f64>,

    /// Output directory for sub-bank files.
    pub output_dir: PathBuf,

    /// Sub-bank file format.
    pub format: OutputFormat,

    /// Description label used in file names and cache entries.
    pub bank_label: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            templates_per_bank: None,
            overlap: DEFAULT_OVERLAP,
            sort_by: None,
            group_by_chi: DEFAULT_GROUP_BY_CHI,
            instrument: None,
            f_low: None,
            max_f_final: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            format: OutputFormat::default(),
            bank_label: DEFAULT_BANK_LABEL.to_string(),
        }
    }
}

/// Supported sub-bank file formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated table.
    #[default]
    Csv,
    /// Apache Parquet table.
    Parquet,
}

impl OutputFormat {
    /// File extension for this format.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => output_extensions::CSV,
            Self::Parquet => output_extensions::PARQUET,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Parquet => write!(f, "parquet"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "parquet" | "pq" => Ok(Self::Parquet),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Fully resolved settings for one split run.
///
/// Built once by [`super::build_split_config`] and passed by reference
/// through the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitConfig {
    /// Target number of templates per sub-bank.
    pub templates_per_bank: usize,
    /// Templates shared between neighbouring sub-banks (even, below
    /// `templates_per_bank`).
    pub overlap: usize,
    /// Sort column.
    pub sort_by: Column,
    /// Number of effective-spin bins.
    pub group_by_chi: usize,
    /// Approximant ranges, first match wins.
    pub approximants: Vec<ApproximantRange>,
    /// Instrument label.
    pub instrument: String,
    /// Lower frequency cutoff in Hz.
    pub f_low: f64,
    /// Optional ceiling on the upper frequency cutoff in Hz.
    pub max_f_final: Option<f64>,
    /// Directory sub-bank files are written to.
    pub output_dir: PathBuf,
    /// Path of the cache manifest.
    pub output_cache: PathBuf,
    /// Sub-bank file format.
    pub format: OutputFormat,
    /// Description label for file names and cache entries.
    pub bank_label: String,
    /// Optional JSON run summary path.
    pub summary: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("csv".parse::<OutputFormat>().ok(), Some(OutputFormat::Csv));
        assert_eq!(
            "Parquet".parse::<OutputFormat>().ok(),
            Some(OutputFormat::Parquet)
        );
        assert_eq!("pq".parse::<OutputFormat>().ok(), Some(OutputFormat::Parquet));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_display_and_extension() {
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
        assert_eq!(OutputFormat::Parquet.extension(), "parquet");
    }

    #[test]
    fn test_defaults_config_default_values() {
        let defaults = DefaultsConfig::default();
        assert_eq!(defaults.overlap, 0);
        assert_eq!(defaults.group_by_chi, 1);
        assert_eq!(defaults.bank_label, "SPLIT_BANK");
        assert_eq!(defaults.output_dir, PathBuf::from("."));
        assert_eq!(defaults.format, OutputFormat::Csv);
        assert!(defaults.templates_per_bank.is_none());
    }
}
