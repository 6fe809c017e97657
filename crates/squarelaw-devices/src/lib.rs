//! Square-law MOSFET device equations for Squarelaw.
//!
//! This crate provides the closed-form device models used to build an
//! N-channel I_D vs V_DS characteristic:
//! - Process transconductance coefficient k (mobility scaled by temperature)
//! - Threshold voltage V_t from the depletion approximation
//! - Drain current with cutoff / linear / saturation region selection

pub mod constants;
pub mod error;
pub mod mosfet;

pub use error::{Error, Result};
pub use mosfet::{
    MosfetRegion, SquareLawMosfet, ThresholdParams, ThresholdVoltage, drain_current,
    oxide_capacitance, threshold_voltage, transconductance,
};
