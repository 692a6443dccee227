//! LAL cache manifest listing every sub-bank.
//!
//! One line per sub-bank: `OBSERVATORY DESCRIPTION GPSSTART DURATION URL`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::naming::sub_bank_description;
use crate::constants::cache::{DURATION, GPS_START, URL_PREFIX};
use crate::error::{Error, Result};

/// One manifest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// Instrument label.
    pub observatory: String,
    /// Sub-bank description, `{index:04}_{LABEL}`.
    pub description: String,
    /// Absolute path of the sub-bank file.
    pub path: PathBuf,
}

impl CacheEntry {
    /// Entry for sub-bank `index` written to `path`.
    ///
    /// Relative paths are made absolute against the current directory.
    pub fn new(observatory: &str, index: usize, label: &str, path: &Path) -> Result<Self> {
        Ok(Self {
            observatory: observatory.to_string(),
            description: sub_bank_description(index, label),
            path: std::path::absolute(path)?,
        })
    }

    /// `file://localhost` URL of the sub-bank file.
    pub fn url(&self) -> String {
        format!("{URL_PREFIX}{}", self.path.display())
    }
}

impl std::fmt::Display for CacheEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {GPS_START} {DURATION} {}",
            self.observatory,
            self.description,
            self.url()
        )
    }
}

/// Writes manifest lines in sub-bank order.
pub struct CacheWriter {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl CacheWriter {
    /// Create (or truncate) the manifest at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| Error::ManifestWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
        })
    }

    /// Append one entry.
    pub fn write_entry(&mut self, entry: &CacheEntry) -> Result<()> {
        writeln!(self.writer, "{entry}").map_err(|e| Error::ManifestWrite {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Flush the manifest to disk.
    pub fn finalize(mut self) -> Result<()> {
        self.writer.flush().map_err(|e| Error::ManifestWrite {
            path: self.path.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_entry_format() {
        let entry = CacheEntry::new(
            "H1",
            3,
            "SPLIT_BANK",
            Path::new("/data/H1-0003_SPLIT_BANK-0-0.csv"),
        )
        .unwrap();
        assert_eq!(
            entry.to_string(),
            "H1 0003_SPLIT_BANK 0 0 file://localhost/data/H1-0003_SPLIT_BANK-0-0.csv"
        );
    }

    #[test]
    fn test_relative_path_made_absolute() {
        let entry = CacheEntry::new("L1", 0, "X", Path::new("sub.csv")).unwrap();
        assert!(entry.path.is_absolute());
        assert!(entry.url().ends_with("/sub.csv"));
    }

    #[test]
    fn test_writer_one_line_per_entry() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("banks.cache");
        let mut writer = CacheWriter::create(&path).unwrap();
        for i in 0..3 {
            let file = dir.path().join(format!("{i}.csv"));
            writer
                .write_entry(&CacheEntry::new("V1", i, "L", &file).unwrap())
                .unwrap();
        }
        writer.finalize().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[2].starts_with("V1 0002_L 0 0 file://localhost/"));
    }
}
