//! Threshold voltage from the depletion approximation.
//!
//! V_t = V_FB + 2φ_F + (Q_dep + Q_ss) / C_ox, with the depletion charge
//! evaluated at the strong-inversion surface potential 2φ_F.

use serde::{Deserialize, Serialize};

use super::transconductance::oxide_capacitance;
use crate::error::{Error, Result, require_divisor, require_finite, require_non_negative};

/// Inputs to the threshold voltage calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdParams {
    /// Gate (metal) work function φ_m (V).
    pub metal_work_function: f64,
    /// Semiconductor work function φ_s (V).
    pub semiconductor_work_function: f64,
    /// Surface/interface charge density Q_ss (C/m^2).
    pub surface_charge: f64,
    /// Channel doping density N_d (m^-3).
    pub doping: f64,
    /// Intrinsic carrier concentration n_i (m^-3).
    pub intrinsic_concentration: f64,
    /// Gate oxide thickness (m).
    pub oxide_thickness: f64,
    /// Absolute oxide permittivity ε_ox (F/m).
    pub oxide_permittivity: f64,
    /// Absolute semiconductor permittivity ε_s (F/m).
    pub semiconductor_permittivity: f64,
    /// Elementary charge q (C).
    pub elementary_charge: f64,
    /// Boltzmann constant k_B (J/K).
    pub boltzmann: f64,
    /// Temperature at which V_t is evaluated (K).
    pub temperature: f64,
}

impl ThresholdParams {
    fn validate(&self) -> Result<()> {
        require_finite("metal_work_function", self.metal_work_function)?;
        require_finite("semiconductor_work_function", self.semiconductor_work_function)?;
        require_finite("surface_charge", self.surface_charge)?;
        require_positive("doping", self.doping)?;
        require_positive("intrinsic_concentration", self.intrinsic_concentration)?;
        if self.doping <= self.intrinsic_concentration {
            return Err(Error::InvalidParameter {
                name: "doping",
                value: self.doping,
                reason: "must exceed the intrinsic concentration",
            });
        }
        require_non_negative("semiconductor_permittivity", self.semiconductor_permittivity)?;
        require_divisor("elementary_charge", self.elementary_charge)?;
        require_non_negative("boltzmann", self.boltzmann)?;
        require_non_negative("temperature", self.temperature)?;
        Ok(())
    }

    /// Evaluate the threshold voltage and its intermediate terms.
    pub fn evaluate(&self) -> Result<ThresholdVoltage> {
        self.validate()?;

        let q = self.elementary_charge;
        let thermal_voltage = self.boltzmann * self.temperature / q;
        let work_function_diff = self.metal_work_function - self.semiconductor_work_function;

        let cox = oxide_capacitance(self.oxide_permittivity, self.oxide_thickness)?;
        if cox == 0.0 {
            return Err(Error::DivisionByZero("oxide_permittivity"));
        }

        let flat_band = work_function_diff - self.surface_charge / cox;
        let fermi_potential = thermal_voltage * (self.doping / self.intrinsic_concentration).ln();
        // Depletion charge at surface potential 2φ_F (strong inversion)
        let depletion_charge = (2.0
            * q
            * self.semiconductor_permittivity
            * self.doping
            * 2.0
            * fermi_potential)
            .sqrt();
        let vth =
            flat_band + 2.0 * fermi_potential + (depletion_charge + self.surface_charge) / cox;

        Ok(ThresholdVoltage {
            thermal_voltage,
            work_function_diff,
            cox,
            flat_band,
            fermi_potential,
            depletion_charge,
            vth,
        })
    }
}

/// Threshold voltage with the terms it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdVoltage {
    /// k_B·T/q (V)
    pub thermal_voltage: f64,
    /// φ_m − φ_s (V)
    pub work_function_diff: f64,
    /// Oxide capacitance per unit area (F/m^2)
    pub cox: f64,
    /// Flat-band voltage (V)
    pub flat_band: f64,
    /// Fermi potential φ_F (V)
    pub fermi_potential: f64,
    /// Depletion charge at strong inversion (C/m^2)
    pub depletion_charge: f64,
    /// Threshold voltage (V)
    pub vth: f64,
}

/// Threshold voltage V_t (V).
pub fn threshold_voltage(params: &ThresholdParams) -> Result<f64> {
    params.evaluate().map(|t| t.vth)
}

fn require_positive(name: &'static str, value: f64) -> Result<f64> {
    require_finite(name, value)?;
    if value <= 0.0 {
        return Err(Error::InvalidParameter {
            name,
            value,
            reason: "must be positive",
        });
    }
    Ok(value)
}
