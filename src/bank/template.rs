//! Template record types.

use crate::physics::{chi_effective, chirp_mass, symmetric_mass_ratio};

/// Dimensionless spin vector of one component body.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpinVector {
    /// x component.
    pub x: f64,
    /// y component.
    pub y: f64,
    /// z component (along the orbital angular momentum).
    pub z: f64,
}

impl SpinVector {
    /// Create a spin vector from its components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Spin aligned with the orbital angular momentum.
    pub const fn aligned(z: f64) -> Self {
        Self { x: 0.0, y: 0.0, z }
    }

    /// Euclidean norm of the vector.
    pub fn magnitude(&self) -> f64 {
        self.z.mul_add(self.z, self.x.mul_add(self.x, self.y * self.y)).sqrt()
    }
}

/// A single waveform template.
///
/// Masses and spins are the intrinsic parameters and are never changed once
/// read. The `Option` fields are either carried over from the input table or
/// filled in by [`crate::annotate::Annotator`].
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    /// Primary component mass in solar masses.
    pub mass1: f64,
    /// Secondary component mass in solar masses.
    pub mass2: f64,
    /// Spin of the primary.
    pub spin1: SpinVector,
    /// Spin of the secondary.
    pub spin2: SpinVector,
    /// Chirp mass in solar masses.
    pub mchirp: f64,
    /// Symmetric mass ratio.
    pub eta: f64,
    /// Leading-order chirp time.
    pub tau0: Option<f64>,
    /// 1.5PN chirp time.
    pub tau3: Option<f64>,
    /// Upper frequency cutoff in Hz.
    pub f_final: Option<f64>,
    /// Estimated waveform duration in seconds.
    pub template_duration: Option<f64>,
    /// Total mass in solar masses.
    pub mtotal: Option<f64>,
    /// Instrument label.
    pub ifo: Option<String>,
    /// Tag of the run that produced the derived fields.
    pub process_id: Option<String>,
    /// Values of the bank's pass-through columns, in
    /// [`super::TemplateBank::extra_columns`] order.
    pub extra: Vec<String>,
}

impl Template {
    /// Create a template from its intrinsic parameters, deriving chirp mass
    /// and symmetric mass ratio.
    pub fn new(mass1: f64, mass2: f64, spin1: SpinVector, spin2: SpinVector) -> Self {
        Self {
            mass1,
            mass2,
            spin1,
            spin2,
            mchirp: chirp_mass(mass1, mass2),
            eta: symmetric_mass_ratio(mass1, mass2),
            tau0: None,
            tau3: None,
            f_final: None,
            template_duration: None,
            mtotal: None,
            ifo: None,
            process_id: None,
            extra: Vec::new(),
        }
    }

    /// Mass-weighted effective aligned spin.
    pub fn chi(&self) -> f64 {
        chi_effective(self.mass1, self.mass2, self.spin1.z, self.spin2.z)
    }
}
