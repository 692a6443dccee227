//! Column layout shared by the sub-bank writers.

use crate::bank::Template;

/// Numeric columns, in output order.
pub const NUMERIC_COLUMNS: [&str; 15] = [
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
    "mtotal",
    "tau0",
    "tau3",
    "f_final",
    "template_duration",
];

/// Text columns written after the numeric ones.
pub const TEXT_COLUMNS: [&str; 2] = ["ifo", "process_id"];

/// Numeric values of a template in [`NUMERIC_COLUMNS`] order.
pub fn numeric_values(t: &Template) -> [Option<f64>; 15] {
    [
        Some(t.mass1),
        Some(t.mass2),
        Some(t.spin1.x),
        Some(t.spin1.y),
        Some(t.spin1.z),
        Some(t.spin2.x),
        Some(t.spin2.y),
        Some(t.spin2.z),
        Some(t.mchirp),
        Some(t.eta),
        t.mtotal,
        t.tau0,
        t.tau3,
        t.f_final,
        t.template_duration,
    ]
}

/// Text values of a template in [`TEXT_COLUMNS`] order.
pub fn text_values(t: &Template) -> [Option<&str>; 2] {
    [t.ifo.as_deref(), t.process_id.as_deref()]
}

/// Full header: numeric, text, then pass-through columns.
pub fn header<'a>(extra_columns: &'a [String]) -> impl Iterator<Item = &'a str> {
    NUMERIC_COLUMNS
        .iter()
        .chain(TEXT_COLUMNS.iter())
        .copied()
        .chain(extra_columns.iter().map(String::as_str))
}
