//! N-channel MOSFET square-law model.
//!
//! The model is split the way it is evaluated: the process coefficient k and
//! the threshold voltage V_t are derived once from technology parameters,
//! then the drain current is evaluated per bias point.

pub mod drain;
pub mod threshold;
pub mod transconductance;

pub use drain::{MosfetRegion, SquareLawMosfet, drain_current};
pub use threshold::{ThresholdParams, ThresholdVoltage, threshold_voltage};
pub use transconductance::{adjusted_mobility, oxide_capacitance, transconductance};
