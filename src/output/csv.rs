//! CSV sub-bank writer.

use std::fs::File;
use std::path::{Path, PathBuf};

use super::columns::{header, numeric_values, text_values};
use crate::bank::Template;
use crate::error::{Error, Result};
use crate::output::BankWriter;

/// CSV format sub-bank writer.
///
/// Missing optional values are written as empty fields so the table reads
/// back with the same columns it was written with.
pub struct CsvBankWriter {
    writer: csv::Writer<File>,
    path: PathBuf,
    extra_columns: Vec<String>,
}

impl CsvBankWriter {
    /// Create a new CSV writer.
    pub fn new(path: &Path, extra_columns: &[String]) -> Result<Self> {
        let writer = csv::Writer::from_path(path).map_err(|e| Error::CsvWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self {
            writer,
            path: path.to_path_buf(),
            extra_columns: extra_columns.to_vec(),
        })
    }

    fn wrap(&self, source: csv::Error) -> Error {
        Error::CsvWrite {
            path: self.path.clone(),
            source,
        }
    }
}

impl BankWriter for CsvBankWriter {
    fn write_header(&mut self) -> Result<()> {
        self.writer
            .write_record(header(&self.extra_columns))
            .map_err(|e| self.wrap(e))
    }

    fn write_template(&mut self, template: &Template) -> Result<()> {
        let mut row: Vec<String> = numeric_values(template)
            .iter()
            .map(|v| v.map(|x| x.to_string()).unwrap_or_default())
            .collect();
        row.extend(
            text_values(template)
                .iter()
                .map(|v| v.unwrap_or_default().to_string()),
        );
        row.extend(template.extra.iter().cloned());

        self.writer.write_record(&row).map_err(|e| self.wrap(e))
    }

    fn finalize(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| self.wrap(e.into()))
    }
}
