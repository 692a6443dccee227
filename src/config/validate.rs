//! Configuration validation.

use crate::annotate::ApproximantRange;
use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the settings stored in a configuration file.
///
/// Settings that may still be supplied on the command line are only
/// checked when present.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_defaults(config)?;
    validate_approximants(&config.approximants)?;
    Ok(())
}

fn validate_defaults(config: &Config) -> Result<()> {
    let defaults = &config.defaults;

    if let Some(n) = defaults.templates_per_bank {
        validate_split_sizes(n, defaults.overlap)?;
    } else if defaults.overlap % 2 != 0 {
        return Err(odd_overlap(defaults.overlap));
    }

    if defaults.group_by_chi == 0 {
        return Err(Error::ConfigValidation {
            message: "group_by_chi must be at least 1".to_string(),
        });
    }

    if let Some(f_low) = defaults.f_low {
        validate_frequency("f_low", f_low)?;
    }
    if let Some(max_f_final) = defaults.max_f_final {
        validate_frequency("max_f_final", max_f_final)?;
    }

    if let Some(ifo) = &defaults.instrument
        && ifo.trim().is_empty()
    {
        return Err(Error::ConfigValidation {
            message: "instrument must not be empty".to_string(),
        });
    }

    if defaults.bank_label.trim().is_empty() {
        return Err(Error::ConfigValidation {
            message: "bank_label must not be empty".to_string(),
        });
    }

    Ok(())
}

/// Check target size and overlap against each other.
pub(super) fn validate_split_sizes(templates_per_bank: usize, overlap: usize) -> Result<()> {
    if templates_per_bank == 0 {
        return Err(Error::ConfigValidation {
            message: "templates_per_bank must be at least 1".to_string(),
        });
    }
    if overlap % 2 != 0 {
        return Err(odd_overlap(overlap));
    }
    if overlap >= templates_per_bank {
        return Err(Error::ConfigValidation {
            message: format!(
                "overlap ({overlap}) must be smaller than templates_per_bank ({templates_per_bank})"
            ),
        });
    }
    Ok(())
}

/// Check that a frequency is finite and positive.
pub(super) fn validate_frequency(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::ConfigValidation {
            message: format!("{name} must be a positive frequency in Hz, got {value}"),
        })
    }
}

/// Check that every approximant range is a non-empty interval.
pub(super) fn validate_approximants(ranges: &[ApproximantRange]) -> Result<()> {
    for range in ranges {
        if range.min.is_nan() || range.max.is_nan() || range.min >= range.max {
            return Err(Error::InvalidApproximantRange {
                value: range.to_string(),
                reason: "minimum must be smaller than maximum".to_string(),
            });
        }
    }
    Ok(())
}

fn odd_overlap(overlap: usize) -> Error {
    Error::ConfigValidation {
        message: format!("overlap must be an even number, got {overlap}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::Approximant;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_odd_overlap() {
        let mut config = Config::default();
        config.defaults.overlap = 3;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_overlap_not_below_target() {
        let mut config = Config::default();
        config.defaults.templates_per_bank = Some(10);
        config.defaults.overlap = 10;
        assert!(validate_config(&config).is_err());
        config.defaults.overlap = 8;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_zero_chi_bins() {
        let mut config = Config::default();
        config.defaults.group_by_chi = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_negative_frequency() {
        let mut config = Config::default();
        config.defaults.f_low = Some(-10.0);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_inverted_range() {
        let mut config = Config::default();
        config.approximants.push(ApproximantRange {
            min: 5.0,
            max: 1.0,
            approximant: Approximant::TaylorF2,
        });
        assert!(matches!(
            validate_config(&config),
            Err(Error::InvalidApproximantRange { .. })
        ));
    }
}
