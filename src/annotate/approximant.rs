//! Waveform approximants and chirp-mass based selection.

use serde::{Deserialize, Serialize};

use crate::bank::Template;
use crate::error::{Error, Result};
use crate::physics::{final_spin_upper_bound, isco_frequency, ringdown_frequency, solar_to_si};

/// Headroom factor applied above the estimated ringdown frequency.
const RINGDOWN_MARGIN: f64 = 2.0;

/// Physical regime a waveform model covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelClass {
    /// Models that include merger and ringdown.
    InspiralMergerRingdown,
    /// Models that stop at the end of the inspiral.
    Inspiral,
}

impl ModelClass {
    /// Upper frequency cutoff for a template, in Hz.
    ///
    /// Full IMR models extend to twice the ringdown frequency of the remnant,
    /// using an overestimate of its spin. Inspiral-only models stop at the
    /// Schwarzschild ISCO.
    pub fn upper_frequency(self, template: &Template) -> f64 {
        match self {
            Self::InspiralMergerRingdown => {
                let total = solar_to_si(template.mass1) + solar_to_si(template.mass2);
                let chi = template
                    .spin1
                    .magnitude()
                    .max(template.spin2.magnitude());
                RINGDOWN_MARGIN * ringdown_frequency(total, final_spin_upper_bound(chi))
            }
            Self::Inspiral => isco_frequency(template.mass1, template.mass2),
        }
    }
}

/// Waveform approximant, named as in LALSimulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Approximant {
    /// Frequency-domain post-Newtonian inspiral.
    TaylorF2,
    /// `TaylorF2` with reduced-spin corrections.
    TaylorF2RedSpin,
    /// Time-domain post-Newtonian inspiral.
    TaylorT4,
    /// Precessing time-domain inspiral.
    SpinTaylorT4,
    /// Single-spin precessing frequency-domain inspiral.
    SpinTaylorF2,
    /// Non-spinning effective-one-body IMR.
    #[serde(rename = "EOBNRv2")]
    EobnrV2,
    /// Reduced-order double-spin SEOBNRv2.
    #[serde(rename = "SEOBNRv2_ROM_DoubleSpin")]
    SeobnrV2RomDoubleSpin,
    /// Aligned-spin effective-one-body IMR.
    #[serde(rename = "SEOBNRv4")]
    SeobnrV4,
    /// Reduced-order SEOBNRv4.
    #[serde(rename = "SEOBNRv4_ROM")]
    SeobnrV4Rom,
    /// Phenomenological aligned-spin IMR, version C.
    #[serde(rename = "IMRPhenomC")]
    ImrPhenomC,
    /// Phenomenological aligned-spin IMR, version D.
    #[serde(rename = "IMRPhenomD")]
    ImrPhenomD,
    /// Phenomenological precessing IMR.
    #[serde(rename = "IMRPhenomPv2")]
    ImrPhenomPv2,
    /// Phenomenological aligned-spin IMR, X family.
    #[serde(rename = "IMRPhenomXAS")]
    ImrPhenomXas,
}

impl Approximant {
    /// Every known approximant.
    pub const ALL: [Self; 13] = [
        Self::TaylorF2,
        Self::TaylorF2RedSpin,
        Self::TaylorT4,
        Self::SpinTaylorT4,
        Self::SpinTaylorF2,
        Self::EobnrV2,
        Self::SeobnrV2RomDoubleSpin,
        Self::SeobnrV4,
        Self::SeobnrV4Rom,
        Self::ImrPhenomC,
        Self::ImrPhenomD,
        Self::ImrPhenomPv2,
        Self::ImrPhenomXas,
    ];

    /// LALSimulation name of the approximant.
    pub const fn name(self) -> &'static str {
        match self {
            Self::TaylorF2 => "TaylorF2",
            Self::TaylorF2RedSpin => "TaylorF2RedSpin",
            Self::TaylorT4 => "TaylorT4",
            Self::SpinTaylorT4 => "SpinTaylorT4",
            Self::SpinTaylorF2 => "SpinTaylorF2",
            Self::EobnrV2 => "EOBNRv2",
            Self::SeobnrV2RomDoubleSpin => "SEOBNRv2_ROM_DoubleSpin",
            Self::SeobnrV4 => "SEOBNRv4",
            Self::SeobnrV4Rom => "SEOBNRv4_ROM",
            Self::ImrPhenomC => "IMRPhenomC",
            Self::ImrPhenomD => "IMRPhenomD",
            Self::ImrPhenomPv2 => "IMRPhenomPv2",
            Self::ImrPhenomXas => "IMRPhenomXAS",
        }
    }

    /// Regime this approximant models.
    pub const fn class(self) -> ModelClass {
        match self {
            Self::TaylorF2
            | Self::TaylorF2RedSpin
            | Self::TaylorT4
            | Self::SpinTaylorT4
            | Self::SpinTaylorF2 => ModelClass::Inspiral,
            Self::EobnrV2
            | Self::SeobnrV2RomDoubleSpin
            | Self::SeobnrV4
            | Self::SeobnrV4Rom
            | Self::ImrPhenomC
            | Self::ImrPhenomD
            | Self::ImrPhenomPv2
            | Self::ImrPhenomXas => ModelClass::InspiralMergerRingdown,
        }
    }
}

impl std::fmt::Display for Approximant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Approximant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownApproximant {
                name: s.to_string(),
            })
    }
}

/// Half-open chirp-mass interval `[min, max)` mapped to an approximant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApproximantRange {
    /// Inclusive lower chirp-mass bound.
    pub min: f64,
    /// Exclusive upper chirp-mass bound.
    pub max: f64,
    /// Approximant used inside the interval.
    pub approximant: Approximant,
}

impl ApproximantRange {
    /// Whether `mchirp` falls in `[min, max)`.
    pub fn contains(&self, mchirp: f64) -> bool {
        self.min <= mchirp && mchirp < self.max
    }
}

impl std::fmt::Display for ApproximantRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.min, self.max, self.approximant)
    }
}

impl std::str::FromStr for ApproximantRange {
    type Err = Error;

    /// Parse `MIN:MAX:APPROXIMANT`, e.g. `0.0:1.73:TaylorF2`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidApproximantRange {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = s.splitn(3, ':');
        let (Some(min), Some(max), Some(name)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid("expected MIN:MAX:APPROXIMANT"));
        };

        let min: f64 = min
            .trim()
            .parse()
            .map_err(|_| invalid("lower bound is not a number"))?;
        let max: f64 = max
            .trim()
            .parse()
            .map_err(|_| invalid("upper bound is not a number"))?;
        if min.is_nan() || max.is_nan() || min >= max {
            return Err(invalid("lower bound must be below upper bound"));
        }

        Ok(Self {
            min,
            max,
            approximant: name.parse()?,
        })
    }
}

/// Pick the approximant of the first range containing `mchirp`.
///
/// # Errors
///
/// Returns [`Error::NoApproximant`] if no range contains `mchirp`.
pub fn select_approximant(mchirp: f64, ranges: &[ApproximantRange]) -> Result<Approximant> {
    ranges
        .iter()
        .find(|r| r.contains(mchirp))
        .map(|r| r.approximant)
        .ok_or(Error::NoApproximant { mchirp })
}
