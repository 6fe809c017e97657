//! Sweep driver.
//!
//! The driver derives k and V_t exactly once when it is built. Every curve it
//! hands out carries a copy of the same validated device, so no sweep point
//! can observe different derived values.

use serde::Serialize;
use squarelaw_devices::{MosfetRegion, SquareLawMosfet, ThresholdVoltage, transconductance};

use crate::config::SweepConfig;
use crate::error::Result;
use crate::linspace::{Linspace, LinspaceIter};

/// One evaluated bias point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OperatingPoint {
    /// Gate-source voltage (V).
    pub vgs: f64,
    /// Drain-source voltage (V).
    pub vds: f64,
    /// Drain current (A).
    pub ids: f64,
    /// Operating region.
    pub region: MosfetRegion,
}

/// Number of points in each operating region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RegionCounts {
    pub cutoff: usize,
    pub linear: usize,
    pub saturation: usize,
}

impl RegionCounts {
    pub fn record(&mut self, region: MosfetRegion) {
        match region {
            MosfetRegion::Cutoff => self.cutoff += 1,
            MosfetRegion::Linear => self.linear += 1,
            MosfetRegion::Saturation => self.saturation += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.cutoff + self.linear + self.saturation
    }
}

/// A lazy V_DS sweep at fixed V_GS.
///
/// Nothing is evaluated until [`CurveSweep::points`] is iterated, and each
/// call to `points` starts the sweep again from the first V_DS sample.
#[derive(Debug, Clone, Copy)]
pub struct CurveSweep {
    device: SquareLawMosfet,
    vgs: f64,
    vds: Linspace,
}

impl CurveSweep {
    pub fn vgs(&self) -> f64 {
        self.vgs
    }

    /// Legend label, e.g. `V_GS = 2 V`.
    pub fn label(&self) -> String {
        format!("V_GS = {} V", self.vgs)
    }

    pub fn len(&self) -> usize {
        self.vds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vds.is_empty()
    }

    /// Iterate the operating points of this curve.
    pub fn points(&self) -> CurvePoints {
        CurvePoints {
            device: self.device,
            vgs: self.vgs,
            vds: self.vds.iter(),
        }
    }

    /// Iterate (V_DS, I_D) pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + Clone {
        self.points().map(|p| (p.vds, p.ids))
    }

    /// Evaluate the whole curve.
    pub fn evaluate(&self) -> Curve {
        let mut curve = Curve {
            vgs: self.vgs,
            label: self.label(),
            vds: Vec::with_capacity(self.len()),
            ids: Vec::with_capacity(self.len()),
            regions: RegionCounts::default(),
        };
        for point in self.points() {
            curve.vds.push(point.vds);
            curve.ids.push(point.ids);
            curve.regions.record(point.region);
        }

        log::debug!(
            "{}: {} cutoff, {} linear, {} saturation points",
            curve.label,
            curve.regions.cutoff,
            curve.regions.linear,
            curve.regions.saturation
        );
        curve
    }
}

/// Iterator over the operating points of a [`CurveSweep`].
#[derive(Debug, Clone)]
pub struct CurvePoints {
    device: SquareLawMosfet,
    vgs: f64,
    vds: LinspaceIter,
}

impl Iterator for CurvePoints {
    type Item = OperatingPoint;

    fn next(&mut self) -> Option<OperatingPoint> {
        let vds = self.vds.next()?;
        let (ids, region) = self.device.evaluate(self.vgs, vds);
        Some(OperatingPoint {
            vgs: self.vgs,
            vds,
            ids,
            region,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.vds.size_hint()
    }
}

impl ExactSizeIterator for CurvePoints {}

/// A fully evaluated curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Curve {
    /// Gate-source voltage of this curve (V).
    pub vgs: f64,
    /// Legend label.
    pub label: String,
    /// Drain-source voltages (V), in sweep order.
    pub vds: Vec<f64>,
    /// Drain currents (A), one per V_DS value.
    pub ids: Vec<f64>,
    /// Operating region tally.
    pub regions: RegionCounts,
}

impl Curve {
    /// Largest drain current on the curve (A).
    pub fn max_current(&self) -> f64 {
        self.ids.iter().copied().fold(0.0, f64::max)
    }
}

/// Output of a complete run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepResult {
    /// Process transconductance coefficient (A/V^2).
    pub k: f64,
    /// Threshold voltage (V).
    pub vth: f64,
    /// One curve per V_GS, in configuration order.
    pub curves: Vec<Curve>,
}

impl SweepResult {
    pub fn curve(&self, vgs: f64) -> Option<&Curve> {
        self.curves.iter().find(|c| c.vgs == vgs)
    }
}

/// Derives the device once and produces a curve for each V_GS.
#[derive(Debug, Clone)]
pub struct SweepDriver {
    config: SweepConfig,
    threshold: ThresholdVoltage,
    device: SquareLawMosfet,
}

impl SweepDriver {
    /// Validate the configuration and derive k and V_t.
    ///
    /// Any invalid parameter fails the whole run here; once built, the
    /// driver cannot fail.
    pub fn new(config: SweepConfig) -> Result<Self> {
        config.validate()?;

        let d = &config.device;
        let k = transconductance(
            d.mobility,
            d.temperature,
            config.constants.vacuum_permittivity,
            d.oxide_permittivity_rel,
            d.oxide_thickness,
        )?;
        let threshold = config.threshold_params().evaluate()?;
        let device = SquareLawMosfet::new(
            k,
            d.channel_width,
            d.channel_length,
            threshold.vth,
            d.lambda,
        )?;

        log::info!("k = {:.4e} A/V^2, V_t = {:.4} V", k, threshold.vth);
        log::debug!(
            "V_T = {:.5} V, V_FB = {:.5} V, phi_F = {:.5} V, Q_dep = {:.4e} C/m^2, C_ox = {:.4e} F/m^2",
            threshold.thermal_voltage,
            threshold.flat_band,
            threshold.fermi_potential,
            threshold.depletion_charge,
            threshold.cox
        );
        if config.vgs_values.iter().all(|&vgs| vgs < threshold.vth) {
            log::warn!(
                "every V_GS is below V_t = {:.4} V; all curves are in cutoff",
                threshold.vth
            );
        }

        Ok(Self {
            config,
            threshold,
            device,
        })
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Process transconductance coefficient (A/V^2).
    pub fn k(&self) -> f64 {
        self.device.k
    }

    /// Threshold voltage (V).
    pub fn vth(&self) -> f64 {
        self.threshold.vth
    }

    pub fn threshold(&self) -> &ThresholdVoltage {
        &self.threshold
    }

    pub fn device(&self) -> &SquareLawMosfet {
        &self.device
    }

    /// The shared V_DS samples.
    pub fn vds_values(&self) -> Linspace {
        self.config.vds_range.linspace()
    }

    /// Lazy sweep at one V_GS.
    pub fn curve(&self, vgs: f64) -> CurveSweep {
        CurveSweep {
            device: self.device,
            vgs,
            vds: self.vds_values(),
        }
    }

    /// Lazy sweeps for every configured V_GS, in order.
    pub fn curves(&self) -> impl Iterator<Item = CurveSweep> + '_ {
        self.config.vgs_values.iter().map(|&vgs| self.curve(vgs))
    }

    /// Evaluate every curve.
    pub fn run(&self) -> SweepResult {
        let curves: Vec<Curve> = self.curves().map(|c| c.evaluate()).collect();
        log::info!(
            "swept {} curves x {} points",
            curves.len(),
            self.vds_values().len()
        );
        SweepResult {
            k: self.k(),
            vth: self.vth(),
            curves,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VdsRange;
    use crate::error::Error;

    fn driver() -> SweepDriver {
        SweepDriver::new(SweepConfig::default()).unwrap()
    }

    #[test]
    fn test_derived_values() {
        let d = driver();
        assert!((d.k() - 4.0909e-4).abs() < 1e-7);
        assert!((d.vth() - 0.814).abs() < 5e-3);
        assert_eq!(d.device().vth, d.vth());
        assert_eq!(d.device().lambda, 0.02);
    }

    #[test]
    fn test_curve_is_lazy_and_restartable() {
        let d = driver();
        let sweep = d.curve(3.0);
        let first: Vec<(f64, f64)> = sweep.pairs().collect();
        let second: Vec<(f64, f64)> = sweep.pairs().collect();
        assert_eq!(first.len(), 100);
        assert_eq!(first, second);
        assert_eq!(sweep.points().len(), 100);
    }

    #[test]
    fn test_vgs3_starts_at_zero_current() {
        let d = driver();
        let first = d.curve(3.0).points().next().unwrap();
        assert_eq!(first.vds, 0.0);
        assert_eq!(first.region, MosfetRegion::Linear);
        assert_eq!(first.ids, 0.0);
    }

    #[test]
    fn test_vgs2_ends_in_saturation() {
        let d = driver();
        let last = d.curve(2.0).points().last().unwrap();
        assert_eq!(last.vds, 2.0);
        assert_eq!(last.region, MosfetRegion::Saturation);
        assert!(last.ids > 0.0);
    }

    #[test]
    fn test_region_counts() {
        let d = driver();
        let curve = d.curve(2.0).evaluate();
        assert_eq!(curve.regions.total(), 100);
        assert_eq!(curve.regions.cutoff, 0);
        assert!(curve.regions.linear > 0);
        assert!(curve.regions.saturation > 0);

        // V_DS sat ≈ 1.186 V: samples below it are linear
        let vdsat = 2.0 - d.vth();
        let expected_linear = curve.vds.iter().filter(|&&v| v < vdsat).count();
        assert_eq!(curve.regions.linear, expected_linear);
    }

    #[test]
    fn test_cutoff_curve() {
        let d = driver();
        let curve = d.curve(0.5).evaluate();
        assert_eq!(curve.regions.cutoff, 100);
        assert!(curve.ids.iter().all(|&i| i == 0.0));
        assert_eq!(curve.max_current(), 0.0);
    }

    #[test]
    fn test_run_preserves_vgs_order() {
        let config = SweepConfig::default().with_vgs_values(vec![3.0, 1.0, 2.0]);
        let result = SweepDriver::new(config).unwrap().run();
        let order: Vec<f64> = result.curves.iter().map(|c| c.vgs).collect();
        assert_eq!(order, vec![3.0, 1.0, 2.0]);
        assert_eq!(result.curves[0].label, "V_GS = 3 V");
        assert!(result.curve(1.0).is_some());
        assert!(result.curve(4.0).is_none());
    }

    #[test]
    fn test_higher_vgs_more_current() {
        let result = driver().run();
        let low = result.curve(2.0).unwrap();
        let high = result.curve(3.0).unwrap();
        for (a, b) in low.ids.iter().zip(&high.ids).skip(1) {
            assert!(b > a);
        }
    }

    #[test]
    fn test_invalid_device_fails_whole_run() {
        let mut config = SweepConfig::default();
        config.device.oxide_thickness = 0.0;
        let err = SweepDriver::new(config).unwrap_err();
        assert!(matches!(
            err,
            Error::Device(squarelaw_devices::Error::DivisionByZero("oxide_thickness"))
        ));

        let mut config = SweepConfig::default();
        config.device.channel_length = 0.0;
        let err = SweepDriver::new(config).unwrap_err();
        assert!(matches!(err, Error::Device(e) if e.is_invalid_parameter()));

        let mut config = SweepConfig::default();
        config.device.doping = 1e15;
        assert!(SweepDriver::new(config).is_err());
    }

    #[test]
    fn test_invalid_sweep_fails() {
        let mut config = SweepConfig::default();
        config.vds_range = VdsRange {
            start: 0.0,
            stop: 2.0,
            samples: 0,
        };
        assert!(matches!(
            SweepDriver::new(config),
            Err(Error::InvalidSweep(_))
        ));
    }
}
