//! Sub-bank, manifest and summary writers.

mod cache;
mod columns;
mod csv;
mod naming;
mod parquet;
pub mod progress;
mod summary;
mod writer;

pub use self::csv::CsvBankWriter;
pub use self::parquet::ParquetBankWriter;
pub use cache::{CacheEntry, CacheWriter};
pub use naming::{sub_bank_description, sub_bank_file_name};
pub use summary::{RunSummary, SubBankSummary, SummarySettings, write_summary};
pub use writer::{BankWriter, create_writer, write_sub_bank};
