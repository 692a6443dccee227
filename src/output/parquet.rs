//! Parquet sub-bank writer.
//!
//! Writes sub-banks in Apache Parquet format for columnar tooling. Numeric
//! columns are nullable `Float64`, text and pass-through columns nullable
//! `Utf8`.

use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::{WriterProperties, WriterVersion};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use super::columns::{NUMERIC_COLUMNS, TEXT_COLUMNS, numeric_values, text_values};
use crate::bank::Template;
use crate::error::{Error, Result};
use crate::output::BankWriter;

const BATCH_SIZE: usize = 1024;

/// Parquet writer for sub-banks.
///
/// Buffers templates and writes them in record batches.
pub struct ParquetBankWriter {
    writer: Option<ArrowWriter<File>>,
    schema: Arc<Schema>,
    templates: Vec<Template>,
}

impl ParquetBankWriter {
    /// Create a new Parquet writer.
    ///
    /// # Errors
    ///
    /// Returns error if file creation or writer initialization fails.
    pub fn new(output_path: &Path, extra_columns: &[String]) -> Result<Self> {
        let schema = build_schema(extra_columns);
        let props = WriterProperties::builder()
            .set_compression(Compression::SNAPPY)
            .set_writer_version(WriterVersion::PARQUET_2_0)
            .build();

        let file = File::create(output_path).map_err(|e| Error::ParquetFileCreate {
            path: output_path.to_path_buf(),
            source: e,
        })?;

        let writer = ArrowWriter::try_new(file, schema.clone(), Some(props)).map_err(|e| {
            Error::ParquetWrite {
                context: "Failed to initialize Parquet writer".to_string(),
                source: e,
            }
        })?;

        Ok(Self {
            writer: Some(writer),
            schema,
            templates: Vec::new(),
        })
    }

    fn flush_batch(&mut self) -> Result<()> {
        if self.templates.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.writer.as_mut() else {
            return Err(closed());
        };

        let batch = build_record_batch(&self.templates, &self.schema)?;
        writer.write(&batch).map_err(|e| Error::ParquetWrite {
            context: "Failed to write Parquet record batch".to_string(),
            source: e,
        })?;
        self.templates.clear();

        Ok(())
    }
}

impl BankWriter for ParquetBankWriter {
    fn write_header(&mut self) -> Result<()> {
        // Schema is embedded in the file footer
        Ok(())
    }

    fn write_template(&mut self, template: &Template) -> Result<()> {
        self.templates.push(template.clone());
        if self.templates.len() >= BATCH_SIZE {
            self.flush_batch()?;
        }
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.flush_batch()?;
        let writer = self.writer.take().ok_or_else(closed)?;
        writer.close().map_err(|e| Error::ParquetWrite {
            context: "Failed to close Parquet writer".to_string(),
            source: e,
        })?;
        Ok(())
    }
}

fn closed() -> Error {
    Error::ParquetWrite {
        context: "writer already finalized".to_string(),
        source: parquet::errors::ParquetError::General("closed".to_string()),
    }
}

/// Build the Arrow schema: numeric, text, then pass-through columns.
fn build_schema(extra_columns: &[String]) -> Arc<Schema> {
    let fields: Vec<Field> = NUMERIC_COLUMNS
        .iter()
        .map(|name| Field::new(*name, DataType::Float64, true))
        .chain(
            TEXT_COLUMNS
                .iter()
                .map(|name| Field::new(*name, DataType::Utf8, true)),
        )
        .chain(
            extra_columns
                .iter()
                .map(|name| Field::new(name.as_str(), DataType::Utf8, true)),
        )
        .collect();

    Arc::new(Schema::new(fields))
}

/// Build an Arrow `RecordBatch` from templates.
fn build_record_batch(templates: &[Template], schema: &Arc<Schema>) -> Result<RecordBatch> {
    let numeric: Vec<[Option<f64>; 15]> = templates.iter().map(numeric_values).collect();
    let text: Vec<[Option<&str>; 2]> = templates.iter().map(text_values).collect();

    let mut columns: Vec<ArrayRef> = Vec::with_capacity(schema.fields().len());
    for idx in 0..NUMERIC_COLUMNS.len() {
        let values: Float64Array = numeric.iter().map(|row| row[idx]).collect();
        columns.push(Arc::new(values));
    }
    for idx in 0..TEXT_COLUMNS.len() {
        let values: StringArray = text.iter().map(|row| row[idx]).collect();
        columns.push(Arc::new(values));
    }
    let extra_count = schema.fields().len() - NUMERIC_COLUMNS.len() - TEXT_COLUMNS.len();
    for idx in 0..extra_count {
        let values: StringArray = templates
            .iter()
            .map(|t| t.extra.get(idx).map(String::as_str))
            .collect();
        columns.push(Arc::new(values));
    }

    RecordBatch::try_new(schema.clone(), columns).map_err(|e| Error::ParquetWrite {
        context: format!("Failed to build record batch: {e}"),
        source: parquet::errors::ParquetError::General(e.to_string()),
    })
}
