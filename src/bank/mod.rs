//! Template bank model and loading.

mod column;
mod reader;
mod template;

pub use column::Column;
pub use reader::read_bank;
pub use template::{SpinVector, Template};

/// A template bank as loaded from disk.
#[derive(Debug, Clone, Default)]
pub struct TemplateBank {
    /// Names of columns carried through unchanged, in input order.
    pub extra_columns: Vec<String>,
    /// Templates in file order.
    pub templates: Vec<Template>,
}
