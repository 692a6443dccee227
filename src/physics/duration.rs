//! Upper bounds on the duration of inspiral, merger and ringdown.
//!
//! These follow the `XLALSimInspiral*TimeBound` family in LALSimulation: each
//! is an overestimate intended for sizing templates, not for waveform
//! generation.

use std::f64::consts::PI;

use crate::constants::physics::{
    C_SI, G_SI, MERGER_ORBITS, MRSUN_SI, MSUN_SI, MTSUN_SI, RINGDOWN_EFOLDS, RINGDOWN_Q_FIT,
    RINGDOWN_FREQ_FIT,
};

use super::frequency::{final_spin_upper_bound, ringdown_frequency};

/// Time from frequency `f_start` to coalescence, to 2PN with the 1.5PN spin
/// term kept only where it lengthens the signal.
///
/// `m1`, `m2` are in kg; `s1`, `s2` are dimensionless aligned spins.
pub fn chirp_time_bound(f_start: f64, m1: f64, m2: f64, s1: f64, s2: f64) -> f64 {
    let total = m1 + m2;
    let eta = m1 * m2 / (total * total);
    let chi = s1.abs().max(s2.abs());

    let c0 = 5.0 * total * G_SI / C_SI.powi(3) / (256.0 * eta);
    let c2 = 743.0 / 252.0 + 11.0 / 3.0 * eta;
    // The negative eta-dependent 1.5PN spin contribution is dropped.
    let c3 = 226.0 / 15.0 * chi;
    let c4 = 3_058_673.0 / 508_032.0 + 5429.0 / 504.0 * eta + 617.0 / 72.0 * eta * eta;

    let v = (PI * G_SI * total * f_start).cbrt() / C_SI;
    c0 * v.powi(-8) * (1.0 + (c2 + (c3 + c4 * v) * v) * v * v)
}

/// Time for one orbit at `r = 9M` moving at `c/3`.
pub fn merge_time_bound(m1: f64, m2: f64) -> f64 {
    let total = m1 + m2;
    let r = 9.0 * total * MRSUN_SI / MSUN_SI;
    let v = C_SI / 3.0;
    MERGER_ORBITS * (2.0 * PI * r / v)
}

/// Time for the fundamental ringdown mode of a black hole of mass
/// `total_mass` (kg) and spin `spin` to decay by 11 e-folds.
pub fn ringdown_time_bound(total_mass: f64, spin: f64) -> f64 {
    let [f0, f1, f2] = RINGDOWN_FREQ_FIT;
    let [q0, q1, q2] = RINGDOWN_Q_FIT;
    let omega = (f0 + f1 * (1.0 - spin).powf(f2)) / (total_mass * MTSUN_SI / MSUN_SI);
    let quality = q0 + q1 * (1.0 - spin).powf(q2);
    let tau = 2.0 * quality / omega;
    RINGDOWN_EFOLDS * tau
}

/// Overestimated inspiral-merger-ringdown duration from `f_low`.
///
/// When `f_max` cuts the signal off below the ringdown frequency only the
/// inspiral between `f_low` and `f_max` is counted. A cutoff at or below
/// `f_low` gives zero.
pub fn imr_time(f_low: f64, m1: f64, m2: f64, s1: f64, s2: f64, f_max: Option<f64>) -> f64 {
    let total = m1 + m2;
    let spin = final_spin_upper_bound(s1.max(s2));
    let f_ring = ringdown_frequency(total, spin);

    if let Some(f_max) = f_max
        && f_max <= f_low
    {
        return 0.0;
    }

    let merger_ringdown = merge_time_bound(m1, m2) + ringdown_time_bound(total, spin);
    if f_low >= f_ring {
        return merger_ringdown;
    }

    let inspiral = chirp_time_bound(f_low, m1, m2, s1, s2);
    match f_max {
        Some(f_max) if f_max < f_ring => {
            (inspiral - chirp_time_bound(f_max, m1, m2, s1, s2)).max(0.0)
        }
        _ => inspiral + merger_ringdown,
    }
}
