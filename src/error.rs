//! Error types for banksplit.

/// Result type alias for banksplit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for banksplit.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Wrong number of input bank files.
    #[error("exactly one input template bank is required, got {count}")]
    InputCount {
        /// Number of inputs supplied.
        count: usize,
    },

    /// Unknown sort column name.
    #[error("unknown column '{name}' (expected one of: {expected})")]
    UnknownColumn {
        /// The unrecognised column name.
        name: String,
        /// Comma-separated list of recognised columns.
        expected: String,
    },

    /// Unknown waveform approximant name.
    #[error("unknown approximant '{name}'")]
    UnknownApproximant {
        /// The unrecognised approximant name.
        name: String,
    },

    /// Malformed approximant range.
    #[error("invalid approximant range '{value}': {reason}")]
    InvalidApproximantRange {
        /// The offending range text.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Failed to open or read the template bank.
    #[error("failed to read template bank '{path}'")]
    BankRead {
        /// Path to the bank file.
        path: std::path::PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// Template bank content is malformed.
    #[error("invalid template bank format: {message}")]
    InvalidBankFormat {
        /// Description of the format error.
        message: String,
    },

    /// Template bank contains no templates.
    #[error("template bank '{path}' contains no templates")]
    EmptyBank {
        /// Path to the bank file.
        path: std::path::PathBuf,
    },

    /// A column needed for sorting is absent for some template.
    #[error("column '{column}' is missing for template {row}")]
    MissingColumn {
        /// Column name.
        column: String,
        /// Zero-based template position in the bank.
        row: usize,
    },

    /// A split group fell below half of the requested size.
    #[error(
        "too few templates in this chi interval: requested {requested}, have {available}"
    )]
    InsufficientTemplates {
        /// Requested number of templates per sub-bank.
        requested: usize,
        /// Number of templates the group actually received.
        available: usize,
    },

    /// No approximant range covers a chirp mass.
    #[error("no valid approximant for chirp mass {mchirp}")]
    NoApproximant {
        /// The chirp mass that matched no range.
        mchirp: f64,
    },

    /// Failed to create output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreateFailed {
        /// Path to the output directory.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a CSV sub-bank.
    #[error("failed to write CSV sub-bank '{path}'")]
    CsvWrite {
        /// Path to the sub-bank file.
        path: std::path::PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// Failed to create Parquet output file.
    #[error("failed to create Parquet file '{path}'")]
    ParquetFileCreate {
        /// Path to the Parquet file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write Parquet data.
    #[error("failed to write Parquet data: {context}")]
    ParquetWrite {
        /// What was being written.
        context: String,
        /// Underlying Parquet error.
        #[source]
        source: parquet::errors::ParquetError,
    },

    /// Failed to write the cache manifest.
    #[error("failed to write cache manifest '{path}'")]
    ManifestWrite {
        /// Path to the manifest file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write JSON summary file.
    #[error("failed to write JSON summary '{path}'")]
    JsonWrite {
        /// Path to the JSON file.
        path: std::path::PathBuf,
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}
