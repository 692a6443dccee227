//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "banksplit";

/// Default number of spin bins.
pub const DEFAULT_GROUP_BY_CHI: usize = 1;

/// Default overlap between neighbouring sub-banks, in templates.
pub const DEFAULT_OVERLAP: usize = 0;

/// Default description label used in sub-bank file names and cache entries.
pub const DEFAULT_BANK_LABEL: &str = "SPLIT_BANK";

/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Output file extensions by format.
pub mod output_extensions {
    /// CSV output extension.
    pub const CSV: &str = "csv";
    /// Parquet output extension.
    pub const PARQUET: &str = "parquet";
}

/// LAL cache manifest constants.
pub mod cache {
    /// GPS start written for every sub-bank entry.
    pub const GPS_START: u32 = 0;
    /// Duration written for every sub-bank entry.
    pub const DURATION: u32 = 0;
    /// URL scheme and host prefix for local files.
    pub const URL_PREFIX: &str = "file://localhost";
    /// Width of the zero-padded sub-bank index.
    pub const INDEX_WIDTH: usize = 4;
}

/// Physical constants, matching the values used by LAL.
pub mod physics {
    /// Solar mass in kg.
    pub const MSUN_SI: f64 = 1.988_409_902_147_041_6e30;
    /// Geometrized solar mass in seconds, `G M_sun / c^3`.
    pub const MTSUN_SI: f64 = 4.925_490_947_641_267e-6;
    /// Geometrized solar mass in metres, `G M_sun / c^2`.
    pub const MRSUN_SI: f64 = 1.476_625_038_050_124_7e3;
    /// Newton's gravitational constant in m^3 kg^-1 s^-2.
    pub const G_SI: f64 = 6.674_30e-11;
    /// Speed of light in vacuum in m/s.
    pub const C_SI: f64 = 299_792_458.0;

    /// Largest final black-hole spin assumed when overestimating.
    pub const MAX_FINAL_SPIN: f64 = 0.998;

    /// Berti, Cardoso & Will (2006) fit for the l=m=2, n=0 quasinormal mode
    /// frequency: `f0 + f1 * (1 - j)^f2`.
    pub const RINGDOWN_FREQ_FIT: [f64; 3] = [1.5251, -1.1568, 0.1292];

    /// Berti, Cardoso & Will (2006) fit for the quality factor of the same
    /// mode: `q0 + q1 * (1 - j)^q2`.
    pub const RINGDOWN_Q_FIT: [f64; 3] = [0.7000, 1.4187, -0.4990];

    /// Number of e-folds the ringdown is followed for.
    pub const RINGDOWN_EFOLDS: f64 = 11.0;

    /// Number of orbits attributed to the plunge/merger.
    pub const MERGER_ORBITS: f64 = 1.0;
}
