//! Binning templates by effective spin.

use tracing::debug;

use super::split_groups_by_size;
use crate::bank::Template;
use crate::error::{Error, Result};

/// Sort templates by effective spin and cut them into `bins` contiguous,
/// non-overlapping bins of near-equal size.
///
/// Bins come back in ascending order of effective spin. One bin returns the
/// whole (sorted) bank.
///
/// # Errors
///
/// Returns a configuration error if `bins` is zero or exceeds the number of
/// templates.
pub fn bin_by_chi(mut templates: Vec<Template>, bins: usize) -> Result<Vec<Vec<Template>>> {
    if bins == 0 || bins > templates.len() {
        return Err(Error::ConfigValidation {
            message: format!(
                "group_by_chi must be between 1 and the number of templates ({}), got {bins}",
                templates.len()
            ),
        });
    }

    templates.sort_by(|a, b| a.chi().total_cmp(&b.chi()));

    #[allow(clippy::cast_precision_loss)]
    let target = templates.len() as f64 / bins as f64;
    let chi_bins: Vec<Vec<Template>> = split_groups_by_size(&templates, target, 0)
        .map(<[Template]>::to_vec)
        .collect();

    debug!(
        "Binned {} templates into {} chi bin(s) of ~{:.1} templates",
        templates.len(),
        chi_bins.len(),
        target
    );

    Ok(chi_bins)
}
