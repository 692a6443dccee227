//! Sub-bank file naming.
//!
//! Names follow the `OBSERVATORY-DESCRIPTION-GPSSTART-DURATION.ext`
//! convention, with the zero-padded sub-bank index leading the description.

use crate::config::OutputFormat;
use crate::constants::cache::{DURATION, GPS_START, INDEX_WIDTH};

/// Description field for a sub-bank, e.g. `0007_SPLIT_BANK`.
///
/// Hyphens and whitespace in the label are replaced by underscores so the
/// name still splits into exactly four hyphen-separated fields.
pub fn sub_bank_description(index: usize, label: &str) -> String {
    let label: String = label
        .trim()
        .chars()
        .map(|c| if c == '-' || c.is_whitespace() { '_' } else { c })
        .collect();
    format!("{index:0width$}_{label}", width = INDEX_WIDTH)
}

/// File name for a sub-bank, e.g. `H1-0007_SPLIT_BANK-0-0.csv`.
pub fn sub_bank_file_name(ifo: &str, index: usize, label: &str, format: OutputFormat) -> String {
    format!(
        "{ifo}-{}-{GPS_START}-{DURATION}.{}",
        sub_bank_description(index, label),
        format.extension()
    )
}
