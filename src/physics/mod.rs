//! Physical formulas used to annotate templates.
//!
//! Masses are in kilograms unless a function says otherwise; frequencies are
//! in Hz and durations in seconds.

mod duration;
mod frequency;
mod mass;

pub use duration::{chirp_time_bound, imr_time, merge_time_bound, ringdown_time_bound};
pub use frequency::{final_spin_upper_bound, isco_frequency, ringdown_frequency};
pub use mass::{chi_effective, chirp_mass, solar_to_si, symmetric_mass_ratio};
