//! Physical constants and default device values.
//!
//! The values are the rounded figures used for hand calculations rather than
//! CODATA values, so the default characteristic stays reproducible.

use serde::{Deserialize, Serialize};

/// Vacuum permittivity (F/m).
pub const VACUUM_PERMITTIVITY: f64 = 8.85e-12;
/// Boltzmann constant (J/K).
pub const BOLTZMANN: f64 = 1.38e-23;
/// Elementary charge (C).
pub const ELEMENTARY_CHARGE: f64 = 1.6e-19;
/// Temperature at which the mobility figure is specified (K).
pub const MOBILITY_REFERENCE_TEMP: f64 = 300.0;
/// Relative permittivity of SiO2.
pub const SIO2_RELATIVE_PERMITTIVITY: f64 = 3.9;
/// Absolute permittivity of silicon (F/m).
pub const SILICON_PERMITTIVITY: f64 = 1.05e-10;

/// The set of physical constants used by one evaluation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalConstants {
    /// Vacuum permittivity ε₀ (F/m). Default: 8.85e-12
    pub vacuum_permittivity: f64,
    /// Boltzmann constant k_B (J/K). Default: 1.38e-23
    pub boltzmann: f64,
    /// Elementary charge q (C). Default: 1.6e-19
    pub elementary_charge: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            vacuum_permittivity: VACUUM_PERMITTIVITY,
            boltzmann: BOLTZMANN,
            elementary_charge: ELEMENTARY_CHARGE,
        }
    }
}
