//! Process transconductance coefficient.

use crate::constants::MOBILITY_REFERENCE_TEMP;
use crate::error::{Result, require_divisor, require_non_negative};

/// Mobility scaled to the operating temperature: μ·(T/300)².
#[inline]
pub fn adjusted_mobility(mobility: f64, temp: f64) -> f64 {
    let ratio = temp / MOBILITY_REFERENCE_TEMP;
    mobility * ratio * ratio
}

/// Oxide capacitance per unit area C_ox = ε / t_ox (F/m^2).
///
/// `permittivity` is the absolute oxide permittivity in F/m.
pub fn oxide_capacitance(permittivity: f64, oxide_thickness: f64) -> Result<f64> {
    require_non_negative("oxide_permittivity", permittivity)?;
    require_divisor("oxide_thickness", oxide_thickness)?;
    Ok(permittivity / oxide_thickness)
}

/// Process transconductance coefficient k = μ(T)·C_ox (A/V^2).
///
/// # Arguments
/// * `mobility` - Carrier mobility at 300 K (m^2/V-s)
/// * `temp` - Operating temperature (K)
/// * `vacuum_permittivity` - ε₀ (F/m)
/// * `oxide_permittivity_rel` - Relative oxide permittivity (e.g. 3.9 for SiO2)
/// * `oxide_thickness` - Gate oxide thickness (m), must be non-zero
pub fn transconductance(
    mobility: f64,
    temp: f64,
    vacuum_permittivity: f64,
    oxide_permittivity_rel: f64,
    oxide_thickness: f64,
) -> Result<f64> {
    require_non_negative("mobility", mobility)?;
    require_non_negative("temperature", temp)?;
    require_non_negative("vacuum_permittivity", vacuum_permittivity)?;
    require_non_negative("oxide_permittivity_rel", oxide_permittivity_rel)?;

    let cox = oxide_capacitance(vacuum_permittivity * oxide_permittivity_rel, oxide_thickness)?;
    Ok(adjusted_mobility(mobility, temp) * cox)
}
