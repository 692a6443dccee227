//! Binning and splitting of template banks.
//!
//! The pieces compose as: [`bin_by_chi`] cuts the bank into spin bins,
//! [`split_bin`] cuts each bin into padded, overlapping groups, and
//! [`order_sub_banks`] fixes the final order across all bins.

mod chi;
mod groups;
mod subbank;

pub use chi::bin_by_chi;
pub use groups::{Groups, split_groups, split_groups_by_size};
pub use subbank::{Group, SplitParams, order_sub_banks, split_bin};
