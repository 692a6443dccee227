//! Splitting spin bins into padded sub-banks and ordering the result.

use super::split_groups;
use crate::bank::{Column, Template};
use crate::error::{Error, Result};

/// Parameters for splitting one spin bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitParams {
    /// Target number of templates per sub-bank.
    pub templates_per_bank: usize,
    /// Templates shared between neighbouring sub-banks (even).
    pub overlap: usize,
    /// Column templates are ordered by before splitting.
    pub sort_by: Column,
}

/// A candidate sub-bank and the template that stands for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// First template of the group before edge padding.
    pub representative: Template,
    /// Templates of the group, including any edge padding.
    pub templates: Vec<Template>,
}

/// Sort a spin bin by the sort column and split it into overlapping groups.
///
/// The first group of the bin is padded at the front with copies of its own
/// first `overlap / 2` templates and the last group is padded at the back
/// with copies of its own last `overlap / 2` templates, so edge groups see
/// the same amount of overlap as interior ones without borrowing from a
/// neighbouring bin.
///
/// # Errors
///
/// Returns [`Error::InsufficientTemplates`] if any group holds fewer than
/// half of `templates_per_bank` templates.
pub fn split_bin(mut bin: Vec<Template>, params: &SplitParams) -> Result<Vec<Group>> {
    let column = params.sort_by;
    bin.sort_by(|a, b| column.key(a).total_cmp(&column.key(b)));

    let pad = params.overlap / 2;
    let mut groups: Vec<Group> = Vec::new();
    let mut front_pad = 0;

    for rows in split_groups(&bin, params.templates_per_bank, params.overlap) {
        let insufficient = || Error::InsufficientTemplates {
            requested: params.templates_per_bank,
            available: rows.len(),
        };
        // |group| >= n / 2 without truncating odd n
        if 2 * rows.len() < params.templates_per_bank {
            return Err(insufficient());
        }
        let Some(first) = rows.first() else {
            return Err(insufficient());
        };

        let mut templates = Vec::with_capacity(rows.len() + 2 * pad);
        if groups.is_empty() {
            front_pad = pad.min(rows.len());
            templates.extend_from_slice(&rows[..front_pad]);
        }
        templates.extend_from_slice(rows);

        groups.push(Group {
            representative: first.clone(),
            templates,
        });
    }

    let single = groups.len() == 1;
    if let Some(last) = groups.last_mut() {
        // skip the front padding when the bin produced only one group
        let own = if single { front_pad } else { 0 };
        let start = last.templates.len().saturating_sub(pad).max(own);
        let tail = last.templates[start..].to_vec();
        last.templates.extend(tail);
    }

    Ok(groups)
}

/// Order sub-banks by the sort-column value of their representatives.
///
/// The sort is stable, so groups with equal keys keep their relative order.
pub fn order_sub_banks(groups: &mut [Group], column: Column) {
    groups.sort_by(|a, b| {
        column
            .key(&a.representative)
            .total_cmp(&column.key(&b.representative))
    });
}
