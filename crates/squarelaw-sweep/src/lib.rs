//! Bias sweep driver and chart data model for Squarelaw.
//!
//! A run is one deterministic pass: the configuration fixes every constant,
//! the driver derives k and V_t once, and each V_GS curve is a lazy sweep
//! over V_DS. Collected curves become a [`Chart`] that any
//! [`ChartRenderer`] can draw.

pub mod chart;
pub mod config;
pub mod driver;
pub mod error;
pub mod linspace;

pub use chart::{Chart, ChartRenderer, Series, TableRenderer};
pub use config::{ChartConfig, DeviceConfig, SweepConfig, VdsRange};
pub use driver::{
    Curve, CurvePoints, CurveSweep, OperatingPoint, RegionCounts, SweepDriver, SweepResult,
};
pub use error::{Error, Result};
pub use linspace::{Linspace, LinspaceIter};
