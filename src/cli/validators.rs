//! CLI argument validators.
//!
//! Shared validation functions for CLI argument parsing.

use crate::annotate::ApproximantRange;
use crate::bank::Column;

/// Parse and validate a bounded float value.
///
/// # Arguments
///
/// * `s` - The string to parse
/// * `min` - Minimum allowed value (exclusive)
/// * `max` - Maximum allowed value (inclusive)
/// * `name` - Name of the parameter for error messages
pub fn parse_bounded_float(s: &str, min: f64, max: f64, name: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !(value > min && value <= max) {
        return Err(format!(
            "{name} must be above {min} and at most {max}, got {value}"
        ));
    }

    Ok(value)
}

/// Parse a frequency in Hz (positive and finite).
pub fn parse_frequency(s: &str) -> Result<f64, String> {
    parse_bounded_float(s, 0.0, f64::MAX, "frequency")
}

/// Parse an even, non-negative template count.
pub fn parse_even(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid non-negative integer"))?;

    if value % 2 != 0 {
        return Err(format!("overlap must be an even number, got {value}"));
    }

    Ok(value)
}

/// Parse a sort column name.
pub fn parse_column(s: &str) -> Result<Column, String> {
    s.parse().map_err(|e: crate::Error| e.to_string())
}

/// Parse a `MIN:MAX:APPROXIMANT` chirp-mass range.
pub fn parse_approximant_range(s: &str) -> Result<ApproximantRange, String> {
    s.parse().map_err(|e: crate::Error| e.to_string())
}
