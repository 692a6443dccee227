//! Characteristic frequencies of a compact binary.

use std::f64::consts::PI;

use crate::constants::physics::{
    MAX_FINAL_SPIN, MSUN_SI, MTSUN_SI, RINGDOWN_FREQ_FIT,
};

/// Overestimate the dimensionless spin of the final black hole.
///
/// Uses the aligned-spin fit `0.686 + 0.15 (s1 + s2)` with both component
/// spins set to `chi`, never below `|chi|` and never above 0.998.
pub fn final_spin_upper_bound(chi: f64) -> f64 {
    (0.686 + 0.15 * (chi + chi))
        .max(chi.abs())
        .min(MAX_FINAL_SPIN)
}

/// Fundamental quasinormal-mode frequency of a black hole of mass
/// `total_mass` (kg) and dimensionless spin `spin`.
pub fn ringdown_frequency(total_mass: f64, spin: f64) -> f64 {
    let [f0, f1, f2] = RINGDOWN_FREQ_FIT;
    let mass_seconds = total_mass * MTSUN_SI / MSUN_SI;
    (f0 + f1 * (1.0 - spin).powf(f2)) / (2.0 * PI * mass_seconds)
}

/// Gravitational-wave frequency at the Schwarzschild innermost stable
/// circular orbit. Masses are in solar masses.
pub fn isco_frequency(m1: f64, m2: f64) -> f64 {
    1.0 / (6f64.powf(1.5) * PI * (m1 + m2) * MTSUN_SI)
}
