//! Mass and spin combinations.

use crate::constants::physics::MSUN_SI;

/// Convert a mass in solar masses to kilograms.
pub fn solar_to_si(mass: f64) -> f64 {
    mass * MSUN_SI
}

/// Chirp mass `(m1 m2)^(3/5) / (m1 + m2)^(1/5)`, in the units of the inputs.
pub fn chirp_mass(m1: f64, m2: f64) -> f64 {
    (m1 * m2).powf(0.6) / (m1 + m2).powf(0.2)
}

/// Symmetric mass ratio `m1 m2 / (m1 + m2)^2`.
pub fn symmetric_mass_ratio(m1: f64, m2: f64) -> f64 {
    let total = m1 + m2;
    m1 * m2 / (total * total)
}

/// Mass-weighted effective aligned spin `(m1 s1z + m2 s2z) / (m1 + m2)`.
pub fn chi_effective(m1: f64, m2: f64, s1z: f64, s2z: f64) -> f64 {
    (m1 * s1z + m2 * s2z) / (m1 + m2)
}
