//! CLI argument definitions.

use super::validators::{parse_approximant_range, parse_column, parse_even, parse_frequency};
use crate::annotate::ApproximantRange;
use crate::bank::Column;
use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Split a gravitational-wave template bank into overlapping sub-banks.
#[derive(Debug, Parser)]
#[command(name = "banksplit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Template bank CSV to split (exactly one).
    pub inputs: Vec<PathBuf>,

    /// Split options.
    #[command(flatten)]
    pub split: SplitArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for a split run.
#[derive(Debug, Default, Args)]
pub struct SplitArgs {
    /// Target number of templates per sub-bank.
    #[arg(short = 'n', long, env = "BANKSPLIT_TEMPLATES_PER_BANK")]
    pub templates_per_bank: Option<usize>,

    /// Templates shared between neighbouring sub-banks (even).
    #[arg(long, value_parser = parse_even, env = "BANKSPLIT_OVERLAP")]
    pub overlap: Option<usize>,

    /// Column to sort templates by before splitting (e.g. mchirp, mtotal, tau0).
    #[arg(short, long, value_parser = parse_column, env = "BANKSPLIT_SORT_BY")]
    pub sort_by: Option<Column>,

    /// Number of effective-spin bins to split independently.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..), env = "BANKSPLIT_GROUP_BY_CHI")]
    pub group_by_chi: Option<u64>,

    /// Chirp-mass range and approximant as MIN:MAX:APPROXIMANT (repeatable,
    /// comma-separated). Replaces the ranges of the config file.
    #[arg(
        short,
        long = "approximant",
        value_parser = parse_approximant_range,
        value_delimiter = ',',
        env = "BANKSPLIT_APPROXIMANTS"
    )]
    pub approximants: Vec<ApproximantRange>,

    /// Instrument label (e.g. H1, L1).
    #[arg(short, long, env = "BANKSPLIT_INSTRUMENT")]
    pub instrument: Option<String>,

    /// Lower frequency cutoff in Hz.
    #[arg(long, value_parser = parse_frequency, env = "BANKSPLIT_F_LOW")]
    pub f_low: Option<f64>,

    /// Ceiling on the upper frequency cutoff in Hz.
    #[arg(long, value_parser = parse_frequency, env = "BANKSPLIT_MAX_F_FINAL")]
    pub max_f_final: Option<f64>,

    /// Directory to write sub-banks to (default: current directory).
    #[arg(short, long, env = "BANKSPLIT_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path of the cache manifest listing every sub-bank.
    #[arg(long, env = "BANKSPLIT_OUTPUT_CACHE")]
    pub output_cache: Option<PathBuf>,

    /// Sub-bank file format (csv, parquet).
    #[arg(short, long, env = "BANKSPLIT_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Description label used in file names and cache entries.
    #[arg(long, env = "BANKSPLIT_BANK_LABEL")]
    pub bank_label: Option<String>,

    /// Write a JSON summary of the run to this path.
    #[arg(long, env = "BANKSPLIT_SUMMARY")]
    pub summary: Option<PathBuf>,

    /// Configuration file (default: platform config directory).
    #[arg(long, env = "BANKSPLIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress progress output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable progress bars.
    #[arg(long)]
    pub no_progress: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
