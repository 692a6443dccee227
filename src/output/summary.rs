//! JSON run summary.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::annotate::{Approximant, ApproximantRange};
use crate::bank::Column;
use crate::config::{OutputFormat, SplitConfig};
use crate::error::{Error, Result};

/// Summary of one split run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Tool version that produced the split.
    pub version: String,
    /// Input template bank.
    pub input: PathBuf,
    /// Number of templates read from the input.
    pub input_templates: usize,
    /// Settings the split ran with.
    pub settings: SummarySettings,
    /// Cache manifest path.
    pub output_cache: PathBuf,
    /// One entry per sub-bank, in index order.
    pub sub_banks: Vec<SubBankSummary>,
}

impl RunSummary {
    /// Total number of templates written, counting duplicates.
    pub fn templates_written(&self) -> usize {
        self.sub_banks.iter().map(|s| s.templates).sum()
    }
}

/// Settings recorded in the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarySettings {
    /// Target templates per sub-bank.
    pub templates_per_bank: usize,
    /// Overlap between neighbouring sub-banks.
    pub overlap: usize,
    /// Sort column.
    pub sort_by: Column,
    /// Number of effective-spin bins.
    pub group_by_chi: usize,
    /// Instrument label.
    pub instrument: String,
    /// Lower frequency cutoff in Hz.
    pub f_low: f64,
    /// Upper frequency ceiling in Hz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_f_final: Option<f64>,
    /// Sub-bank file format.
    pub format: OutputFormat,
    /// Approximant ranges.
    pub approximants: Vec<ApproximantRange>,
}

impl From<&SplitConfig> for SummarySettings {
    fn from(config: &SplitConfig) -> Self {
        Self {
            templates_per_bank: config.templates_per_bank,
            overlap: config.overlap,
            sort_by: config.sort_by,
            group_by_chi: config.group_by_chi,
            instrument: config.instrument.clone(),
            f_low: config.f_low,
            max_f_final: config.max_f_final,
            format: config.format,
            approximants: config.approximants.clone(),
        }
    }
}

/// One written sub-bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubBankSummary {
    /// Sub-bank index.
    pub index: usize,
    /// Written file.
    pub path: PathBuf,
    /// Number of templates, including edge padding.
    pub templates: usize,
    /// Approximant chosen for the sub-bank.
    pub approximant: Approximant,
    /// Chirp mass of the representative template.
    pub representative_mchirp: f64,
    /// Sort-column value of the representative template.
    pub representative_sort_value: f64,
}

/// Write the summary as pretty-printed JSON.
pub fn write_summary(summary: &RunSummary, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::JsonWrite {
        path: path.to_path_buf(),
        source: serde_json::Error::io(e),
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), summary).map_err(|e| Error::JsonWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn summary() -> RunSummary {
        RunSummary {
            version: "0.0.0".to_string(),
            input: PathBuf::from("bank.csv"),
            input_templates: 40,
            settings: SummarySettings {
                templates_per_bank: 20,
                overlap: 0,
                sort_by: Column::Mchirp,
                group_by_chi: 1,
                instrument: "H1".to_string(),
                f_low: 15.0,
                max_f_final: None,
                format: OutputFormat::Csv,
                approximants: vec!["0:100:IMRPhenomD".parse().unwrap()],
            },
            output_cache: PathBuf::from("banks.cache"),
            sub_banks: vec![
                SubBankSummary {
                    index: 0,
                    path: PathBuf::from("H1-0000_SPLIT_BANK-0-0.csv"),
                    templates: 20,
                    approximant: Approximant::ImrPhenomD,
                    representative_mchirp: 1.2,
                    representative_sort_value: 1.2,
                },
                SubBankSummary {
                    index: 1,
                    path: PathBuf::from("H1-0001_SPLIT_BANK-0-0.csv"),
                    templates: 20,
                    approximant: Approximant::ImrPhenomD,
                    representative_mchirp: 5.0,
                    representative_sort_value: 5.0,
                },
            ],
        }
    }

    #[test]
    fn test_summary_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("summary.json");
        write_summary(&summary(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"sort_by\": \"mchirp\""));
        assert!(content.contains("\"approximant\": \"IMRPhenomD\""));
        assert!(!content.contains("max_f_final"));
        let parsed: RunSummary = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, summary());
    }

    #[test]
    fn test_templates_written() {
        assert_eq!(summary().templates_written(), 40);
    }
}
