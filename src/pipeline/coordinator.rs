//! Planning sub-banks from a loaded template bank.

use crate::annotate::{Approximant, select_approximant};
use crate::bank::Template;
use crate::config::SplitConfig;
use crate::error::{Error, Result};
use crate::split::{Group, SplitParams, bin_by_chi, order_sub_banks, split_bin};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A finalized sub-bank ready for annotation and output.
#[derive(Debug, Clone, PartialEq)]
pub struct SubBank {
    /// Sequential index in output order, starting at zero.
    pub index: usize,
    /// Approximant selected from the representative's chirp mass.
    pub approximant: Approximant,
    /// Template that stands for the sub-bank.
    pub representative: Template,
    /// Templates of the sub-bank, including edge padding.
    pub templates: Vec<Template>,
}

/// Pick the single input bank from the positional arguments.
pub fn single_input(inputs: &[PathBuf]) -> Result<&Path> {
    match inputs {
        [input] => Ok(input.as_path()),
        _ => Err(Error::InputCount {
            count: inputs.len(),
        }),
    }
}

/// Split a bank into ordered, indexed sub-banks.
///
/// Templates are binned by effective spin, each bin is sorted and split on
/// its own, and the groups of all bins are then ordered together by the
/// sort-column value of their representatives. The approximant of each
/// sub-bank is chosen from the representative's chirp mass.
///
/// # Errors
///
/// Fails if the sort column is missing for some template, a bin is too
/// small for the requested sub-bank size, or no approximant range covers a
/// representative chirp mass.
pub fn plan_sub_banks(templates: Vec<Template>, config: &SplitConfig) -> Result<Vec<SubBank>> {
    config.sort_by.require(&templates)?;

    let params = SplitParams {
        templates_per_bank: config.templates_per_bank,
        overlap: config.overlap,
        sort_by: config.sort_by,
    };

    let mut groups: Vec<Group> = Vec::new();
    for (bin_index, bin) in bin_by_chi(templates, config.group_by_chi)?
        .into_iter()
        .enumerate()
    {
        let bin_groups = split_bin(bin, &params)?;
        debug!("Chi bin {bin_index}: {} sub-bank(s)", bin_groups.len());
        groups.extend(bin_groups);
    }

    order_sub_banks(&mut groups, config.sort_by);

    groups
        .into_iter()
        .enumerate()
        .map(|(index, group)| {
            let approximant =
                select_approximant(group.representative.mchirp, &config.approximants)?;
            Ok(SubBank {
                index,
                approximant,
                representative: group.representative,
                templates: group.templates,
            })
        })
        .collect()
}
