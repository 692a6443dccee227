//! Template bank parsing.
//!
//! Reads CSV template tables with a header row. Uses the `csv` crate for
//! quoting, BOM handling and whitespace trimming.

use std::collections::HashMap;
use std::path::Path;

use csv::StringRecord;
use tracing::debug;

use super::{SpinVector, Template, TemplateBank};
use crate::error::{Error, Result};

/// Columns the reader maps onto [`Template`] fields.
const KNOWN_COLUMNS: [&str; 17] = [
    "mass1",
    "mass2",
    "spin1x",
    "spin1y",
    "spin1z",
    "spin2x",
    "spin2y",
    "spin2z",
    "mchirp",
    "eta",
    "tau0",
    "tau3",
    "f_final",
    "template_duration",
    "mtotal",
    "ifo",
    "process_id",
];

/// Where each column lives in a record.
struct ColumnLayout {
    known: HashMap<&'static str, usize>,
    extra: Vec<(String, usize)>,
}

impl ColumnLayout {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let mut known = HashMap::new();
        let mut extra = Vec::new();

        for (idx, header) in headers.iter().enumerate() {
            match KNOWN_COLUMNS.iter().find(|name| **name == header) {
                Some(name) => {
                    if known.insert(*name, idx).is_some() {
                        return Err(Error::InvalidBankFormat {
                            message: format!("duplicate column '{header}'"),
                        });
                    }
                }
                None => extra.push((header.to_string(), idx)),
            }
        }

        for required in ["mass1", "mass2"] {
            if !known.contains_key(required) {
                return Err(Error::InvalidBankFormat {
                    message: format!("missing required column '{required}'"),
                });
            }
        }

        Ok(Self { known, extra })
    }

    fn text<'r>(&self, record: &'r StringRecord, name: &str) -> Option<&'r str> {
        self.known
            .get(name)
            .and_then(|&idx| record.get(idx))
            .filter(|s| !s.is_empty())
    }

    fn number(&self, record: &StringRecord, name: &str, line: usize) -> Result<Option<f64>> {
        self.text(record, name)
            .map(|s| {
                s.parse::<f64>().map_err(|e| Error::InvalidBankFormat {
                    message: format!("line {line}: column '{name}': {e}"),
                })
            })
            .transpose()
    }

    fn required(&self, record: &StringRecord, name: &str, line: usize) -> Result<f64> {
        self.number(record, name, line)?
            .ok_or_else(|| Error::InvalidBankFormat {
                message: format!("line {line}: column '{name}' is empty"),
            })
    }

    fn spin(&self, record: &StringRecord, prefix: &str, line: usize) -> Result<SpinVector> {
        let component = |axis: &str| -> Result<f64> {
            Ok(self
                .number(record, &format!("{prefix}{axis}"), line)?
                .unwrap_or(0.0))
        };
        Ok(SpinVector::new(component("x")?, component("y")?, component("z")?))
    }

    fn parse(&self, record: &StringRecord, line: usize) -> Result<Template> {
        let mass1 = self.required(record, "mass1", line)?;
        let mass2 = self.required(record, "mass2", line)?;
        if mass1 <= 0.0 || mass2 <= 0.0 {
            return Err(Error::InvalidBankFormat {
                message: format!("line {line}: masses must be positive, got {mass1} and {mass2}"),
            });
        }

        let mut template = Template::new(
            mass1,
            mass2,
            self.spin(record, "spin1", line)?,
            self.spin(record, "spin2", line)?,
        );

        if let Some(mchirp) = self.number(record, "mchirp", line)? {
            template.mchirp = mchirp;
        }
        if let Some(eta) = self.number(record, "eta", line)? {
            template.eta = eta;
        }
        template.tau0 = self.number(record, "tau0", line)?;
        template.tau3 = self.number(record, "tau3", line)?;
        template.f_final = self.number(record, "f_final", line)?;
        template.template_duration = self.number(record, "template_duration", line)?;
        template.mtotal = self.number(record, "mtotal", line)?;
        template.ifo = self.text(record, "ifo").map(str::to_string);
        template.process_id = self.text(record, "process_id").map(str::to_string);
        template.extra = self
            .extra
            .iter()
            .map(|(_, idx)| record.get(*idx).unwrap_or_default().to_string())
            .collect();

        Ok(template)
    }
}

/// Read a template bank from a CSV file.
///
/// Requires `mass1` and `mass2` columns. Spin components default to zero;
/// `mchirp` and `eta` are derived from the masses when absent. Columns the
/// reader does not recognise are kept verbatim and written back out with
/// every sub-bank.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or read
/// - Required columns are missing
/// - A numeric value cannot be parsed
/// - The table holds no templates
pub fn read_bank(path: &Path) -> Result<TemplateBank> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| Error::BankRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    let headers = reader
        .headers()
        .map_err(|e| Error::BankRead {
            path: path.to_path_buf(),
            source: e,
        })?
        .clone();
    let layout = ColumnLayout::from_headers(&headers)?;

    let mut templates = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let line = row + 2;
        let record = result.map_err(|e| Error::InvalidBankFormat {
            message: format!("line {line}: {e}"),
        })?;
        templates.push(layout.parse(&record, line)?);
    }

    if templates.is_empty() {
        return Err(Error::EmptyBank {
            path: path.to_path_buf(),
        });
    }

    debug!(
        "Read {} templates with {} pass-through column(s) from {}",
        templates.len(),
        layout.extra.len(),
        path.display()
    );

    Ok(TemplateBank {
        extra_columns: layout.extra.into_iter().map(|(name, _)| name).collect(),
        templates,
    })
}
