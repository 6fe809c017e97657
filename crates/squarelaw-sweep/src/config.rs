//! Run configuration.
//!
//! Every physical and device constant of a run lives in one immutable
//! [`SweepConfig`]. The defaults reproduce the reference N-MOSFET: a 10 µm /
//! 1 µm device on 5 nm SiO2 swept at V_GS = 2 V and 3 V.

use std::path::Path;

use serde::{Deserialize, Serialize};
use squarelaw_devices::ThresholdParams;
use squarelaw_devices::constants::{
    PhysicalConstants, SILICON_PERMITTIVITY, SIO2_RELATIVE_PERMITTIVITY,
};

use crate::error::{Error, Result};
use crate::linspace::Linspace;

/// Device and technology parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Electron mobility at 300 K (m^2/V-s). Default: 600e-4
    pub mobility: f64,
    /// Operating temperature for the mobility scaling (K). Default: 298.15
    pub temperature: f64,
    /// Relative oxide permittivity. Default: 3.9
    pub oxide_permittivity_rel: f64,
    /// Gate oxide thickness (m). Default: 5e-9
    pub oxide_thickness: f64,
    /// Channel width (m). Default: 10e-6
    pub channel_width: f64,
    /// Channel length (m). Default: 1e-6
    pub channel_length: f64,
    /// Channel-length modulation (1/V). Default: 0.02
    pub lambda: f64,
    /// Gate work function (V). Default: 4.1
    pub metal_work_function: f64,
    /// Semiconductor work function (V). Default: 4.05
    pub semiconductor_work_function: f64,
    /// Interface charge density (C/m^2). Default: 1e-8
    pub surface_charge: f64,
    /// Channel doping (m^-3). Default: 1e22
    pub doping: f64,
    /// Intrinsic carrier concentration (m^-3). Default: 1.5e16
    pub intrinsic_concentration: f64,
    /// Semiconductor permittivity (F/m). Default: 1.05e-10
    pub semiconductor_permittivity: f64,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            mobility: 600e-4,
            temperature: 298.15,
            oxide_permittivity_rel: SIO2_RELATIVE_PERMITTIVITY,
            oxide_thickness: 5e-9,
            channel_width: 10e-6,
            channel_length: 1e-6,
            lambda: 0.02,
            metal_work_function: 4.1,
            semiconductor_work_function: 4.05,
            surface_charge: 1e-8,
            doping: 1e22,
            intrinsic_concentration: 1.5e16,
            semiconductor_permittivity: SILICON_PERMITTIVITY,
        }
    }
}

/// Drain-source sweep range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VdsRange {
    /// First V_DS value (V). Default: 0
    pub start: f64,
    /// Last V_DS value (V), included. Default: 2
    pub stop: f64,
    /// Number of samples. Default: 100
    pub samples: usize,
}

impl Default for VdsRange {
    fn default() -> Self {
        Self {
            start: 0.0,
            stop: 2.0,
            samples: 100,
        }
    }
}

impl VdsRange {
    pub fn linspace(&self) -> Linspace {
        Linspace::new(self.start, self.stop, self.samples)
    }
}

/// Chart presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Width in pixels. Default: 800
    pub width: u32,
    /// Height in pixels. Default: 600
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "I_D vs V_DS for different V_GS (N-type MOSFET)".to_string(),
            x_label: "V_DS (V)".to_string(),
            y_label: "I_D (A)".to_string(),
            width: 800,
            height: 600,
        }
    }
}

/// Complete configuration for one sweep run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub constants: PhysicalConstants,
    pub device: DeviceConfig,
    /// Temperature used for the thermal voltage in V_t (K). Default: 300
    ///
    /// Kept separate from `device.temperature`: the threshold is
    /// characterised at room temperature while mobility is scaled to the
    /// operating point.
    pub threshold_temperature: f64,
    /// Gate-source voltages, one curve each, in plotting order (V).
    pub vgs_values: Vec<f64>,
    pub vds_range: VdsRange,
    pub chart: ChartConfig,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            constants: PhysicalConstants::default(),
            device: DeviceConfig::default(),
            threshold_temperature: 300.0,
            vgs_values: vec![2.0, 3.0],
            vds_range: VdsRange::default(),
            chart: ChartConfig::default(),
        }
    }
}

impl SweepConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Replace the V_GS set.
    pub fn with_vgs_values(mut self, vgs_values: Vec<f64>) -> Self {
        self.vgs_values = vgs_values;
        self
    }

    /// Absolute oxide permittivity ε₀·ε_ox,rel (F/m).
    pub fn oxide_permittivity(&self) -> f64 {
        self.constants.vacuum_permittivity * self.device.oxide_permittivity_rel
    }

    /// Inputs to the threshold voltage model.
    pub fn threshold_params(&self) -> ThresholdParams {
        let d = &self.device;
        ThresholdParams {
            metal_work_function: d.metal_work_function,
            semiconductor_work_function: d.semiconductor_work_function,
            surface_charge: d.surface_charge,
            doping: d.doping,
            intrinsic_concentration: d.intrinsic_concentration,
            oxide_thickness: d.oxide_thickness,
            oxide_permittivity: self.oxide_permittivity(),
            semiconductor_permittivity: d.semiconductor_permittivity,
            elementary_charge: self.constants.elementary_charge,
            boltzmann: self.constants.boltzmann,
            temperature: self.threshold_temperature,
        }
    }

    /// Check the sweep settings.
    ///
    /// Device parameters are checked by the device models themselves.
    pub fn validate(&self) -> Result<()> {
        if self.vgs_values.is_empty() {
            return Err(Error::InvalidSweep("no V_GS values given".to_string()));
        }
        if let Some(v) = self.vgs_values.iter().find(|v| !v.is_finite()) {
            return Err(Error::InvalidSweep(format!("V_GS value {v} is not finite")));
        }

        let range = &self.vds_range;
        if range.samples == 0 {
            return Err(Error::InvalidSweep("V_DS range has no samples".to_string()));
        }
        if !range.start.is_finite() || !range.stop.is_finite() {
            return Err(Error::InvalidSweep(format!(
                "V_DS range [{}, {}] is not finite",
                range.start, range.stop
            )));
        }
        if range.stop < range.start {
            return Err(Error::InvalidSweep(format!(
                "V_DS range stop {} is below start {}",
                range.stop, range.start
            )));
        }
        Ok(())
    }
}
