//! Sub-bank writer trait definition.

use std::path::Path;

use super::{CsvBankWriter, ParquetBankWriter};
use crate::bank::Template;
use crate::config::OutputFormat;
use crate::error::Result;

/// Trait for writing one sub-bank table.
pub trait BankWriter {
    /// Write the file header (if applicable).
    fn write_header(&mut self) -> Result<()>;

    /// Write a single template row.
    fn write_template(&mut self, template: &Template) -> Result<()>;

    /// Finalize the output (flush, close, etc.).
    fn finalize(&mut self) -> Result<()>;
}

/// Create a writer for `format` at `path`.
pub fn create_writer(
    format: OutputFormat,
    path: &Path,
    extra_columns: &[String],
) -> Result<Box<dyn BankWriter>> {
    Ok(match format {
        OutputFormat::Csv => Box::new(CsvBankWriter::new(path, extra_columns)?),
        OutputFormat::Parquet => Box::new(ParquetBankWriter::new(path, extra_columns)?),
    })
}

/// Write a complete sub-bank table to `path`.
pub fn write_sub_bank(
    format: OutputFormat,
    path: &Path,
    extra_columns: &[String],
    templates: &[Template],
) -> Result<()> {
    let mut writer = create_writer(format, path, extra_columns)?;
    writer.write_header()?;
    for template in templates {
        writer.write_template(template)?;
    }
    writer.finalize()
}
