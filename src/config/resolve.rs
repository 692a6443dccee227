//! Merging command-line arguments with the configuration file.

use super::validate::{validate_approximants, validate_frequency, validate_split_sizes};
use super::{Config, SplitConfig};
use crate::cli::SplitArgs;
use crate::error::{Error, Result};

/// Resolve the settings of one split run.
///
/// Command-line values (and their environment fallbacks) take precedence
/// over the `[defaults]` table. Approximant ranges given on the command
/// line replace those of the file rather than extending them.
///
/// # Errors
///
/// Returns a configuration error if a required setting is missing or the
/// combined settings are inconsistent.
pub fn build_split_config(args: &SplitArgs, config: &Config) -> Result<SplitConfig> {
    let defaults = &config.defaults;

    let templates_per_bank = args
        .templates_per_bank
        .or(defaults.templates_per_bank)
        .ok_or_else(|| missing("templates_per_bank", "-n"))?;
    let overlap = args.overlap.unwrap_or(defaults.overlap);
    validate_split_sizes(templates_per_bank, overlap)?;

    let sort_by = args
        .sort_by
        .or(defaults.sort_by)
        .ok_or_else(|| missing("sort_by", "--sort-by"))?;

    let group_by_chi = match args.group_by_chi {
        Some(bins) => usize::try_from(bins).map_err(|_| Error::ConfigValidation {
            message: format!("group_by_chi is too large: {bins}"),
        })?,
        None => defaults.group_by_chi,
    };
    if group_by_chi == 0 {
        return Err(Error::ConfigValidation {
            message: "group_by_chi must be at least 1".to_string(),
        });
    }

    let approximants = if args.approximants.is_empty() {
        config.approximants.clone()
    } else {
        args.approximants.clone()
    };
    if approximants.is_empty() {
        return Err(missing("approximants", "--approximant"));
    }
    validate_approximants(&approximants)?;

    let instrument = args
        .instrument
        .clone()
        .or_else(|| defaults.instrument.clone())
        .filter(|ifo| !ifo.trim().is_empty())
        .ok_or_else(|| missing("instrument", "--instrument"))?;

    let f_low = args
        .f_low
        .or(defaults.f_low)
        .ok_or_else(|| missing("f_low", "--f-low"))?;
    validate_frequency("f_low", f_low)?;

    let max_f_final = args.max_f_final.or(defaults.max_f_final);
    if let Some(max) = max_f_final {
        validate_frequency("max_f_final", max)?;
    }

    let output_cache = args
        .output_cache
        .clone()
        .ok_or_else(|| missing("output_cache", "--output-cache"))?;

    let bank_label = args
        .bank_label
        .clone()
        .unwrap_or_else(|| defaults.bank_label.clone());
    if bank_label.trim().is_empty() {
        return Err(Error::ConfigValidation {
            message: "bank_label must not be empty".to_string(),
        });
    }

    Ok(SplitConfig {
        templates_per_bank,
        overlap,
        sort_by,
        group_by_chi,
        approximants,
        instrument,
        f_low,
        max_f_final,
        output_dir: args
            .output_dir
            .clone()
            .unwrap_or_else(|| defaults.output_dir.clone()),
        output_cache,
        format: args.format.unwrap_or(defaults.format),
        bank_label,
        summary: args.summary.clone(),
    })
}

fn missing(setting: &str, flag: &str) -> Error {
    Error::ConfigValidation {
        message: format!("no {setting} specified (use {flag} or set it in the config file)"),
    }
}
