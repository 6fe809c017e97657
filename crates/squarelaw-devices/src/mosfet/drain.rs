//! Drain current and operating region selection.
//!
//! For an N-channel device with overdrive V_ov = V_GS − V_t:
//! - Cutoff:     V_GS < V_t → I_D = 0
//! - Linear:     V_GS > V_t, V_DS < V_ov → I_D = k(W/L)(V_ov·V_DS − V_DS²/2)
//! - Saturation: otherwise → I_D = ½k(W/L)·V_ov²·(1 + λ·V_DS)
//!
//! V_GS = V_t exactly is not cutoff: it lands in saturation, where the
//! current evaluates to zero because V_ov = 0.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, require_finite, require_non_negative};

/// Operating region of the MOSFET.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MosfetRegion {
    Cutoff,
    Linear,
    Saturation,
}

impl MosfetRegion {
    /// Classify a bias point against the threshold voltage.
    pub fn classify(vgs: f64, vds: f64, vth: f64) -> Self {
        if vgs < vth {
            MosfetRegion::Cutoff
        } else if vgs > vth && vds < vgs - vth {
            MosfetRegion::Linear
        } else {
            MosfetRegion::Saturation
        }
    }

    /// Region name as used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            MosfetRegion::Cutoff => "cutoff",
            MosfetRegion::Linear => "linear",
            MosfetRegion::Saturation => "saturation",
        }
    }
}

impl fmt::Display for MosfetRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A square-law N-channel MOSFET with validated parameters.
///
/// Construct once with [`SquareLawMosfet::new`], then evaluate any number of
/// bias points without further checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareLawMosfet {
    /// Process transconductance coefficient k (A/V^2).
    pub k: f64,
    /// Channel width (m).
    pub w: f64,
    /// Channel length (m).
    pub l: f64,
    /// Threshold voltage (V).
    pub vth: f64,
    /// Channel-length modulation (1/V).
    pub lambda: f64,
}

impl SquareLawMosfet {
    /// Create a device after checking the parameters are physical.
    ///
    /// Fails with `InvalidParameter` for a zero or negative channel length,
    /// negative k, W or λ, and a non-finite threshold.
    pub fn new(k: f64, w: f64, l: f64, vth: f64, lambda: f64) -> Result<Self> {
        require_non_negative("k", k)?;
        require_non_negative("channel_width", w)?;
        require_non_negative("channel_length", l)?;
        if l == 0.0 {
            return Err(Error::InvalidParameter {
                name: "channel_length",
                value: l,
                reason: "must be non-zero",
            });
        }
        require_finite("threshold_voltage", vth)?;
        require_non_negative("lambda", lambda)?;
        Ok(Self {
            k,
            w,
            l,
            vth,
            lambda,
        })
    }

    /// Device gain k·W/L (A/V^2).
    #[inline]
    pub fn beta(&self) -> f64 {
        self.k * (self.w / self.l)
    }

    /// Operating region at the given bias.
    #[inline]
    pub fn region(&self, vgs: f64, vds: f64) -> MosfetRegion {
        MosfetRegion::classify(vgs, vds, self.vth)
    }

    /// Drain current (A) within a known region.
    pub fn current_in_region(&self, region: MosfetRegion, vgs: f64, vds: f64) -> f64 {
        let vov = vgs - self.vth;
        match region {
            MosfetRegion::Cutoff => 0.0,
            MosfetRegion::Linear => self.beta() * (vov * vds - vds * vds / 2.0),
            MosfetRegion::Saturation => 0.5 * self.beta() * vov * vov * (1.0 + self.lambda * vds),
        }
    }

    /// Drain current (A) and operating region.
    pub fn evaluate(&self, vgs: f64, vds: f64) -> (f64, MosfetRegion) {
        let region = self.region(vgs, vds);
        (self.current_in_region(region, vgs, vds), region)
    }

    /// Drain current (A).
    #[inline]
    pub fn drain_current(&self, vgs: f64, vds: f64) -> f64 {
        self.evaluate(vgs, vds).0
    }

    /// Saturation voltage V_GS − V_t, the linear/saturation boundary (V).
    #[inline]
    pub fn vdsat(&self, vgs: f64) -> f64 {
        vgs - self.vth
    }
}

/// Drain current I_D (A) for a single bias point.
///
/// Validates every input on each call; use [`SquareLawMosfet`] when the
/// same device is evaluated repeatedly.
pub fn drain_current(
    vgs: f64,
    vds: f64,
    k: f64,
    w: f64,
    l: f64,
    vth: f64,
    lambda: f64,
) -> Result<f64> {
    require_finite("vgs", vgs)?;
    require_finite("vds", vds)?;
    let device = SquareLawMosfet::new(k, w, l, vth, lambda)?;
    Ok(device.drain_current(vgs, vds))
}

#[cfg(test)]
mod tests {
    use super::*;

    const K: f64 = 4.0909e-4;
    const W: f64 = 10e-6;
    const L: f64 = 1e-6;
    const VTH: f64 = 0.814;

    fn device(lambda: f64) -> SquareLawMosfet {
        SquareLawMosfet::new(K, W, L, VTH, lambda).unwrap()
    }

    #[test]
    fn test_classify_regions() {
        assert_eq!(MosfetRegion::classify(0.5, 1.0, VTH), MosfetRegion::Cutoff);
        assert_eq!(MosfetRegion::classify(2.0, 0.5, VTH), MosfetRegion::Linear);
        assert_eq!(
            MosfetRegion::classify(2.0, 1.5, VTH),
            MosfetRegion::Saturation
        );
    }

    #[test]
    fn test_threshold_boundary_is_saturation() {
        assert_eq!(
            MosfetRegion::classify(VTH, 0.0, VTH),
            MosfetRegion::Saturation
        );
        assert_eq!(
            MosfetRegion::classify(VTH, 1.0, VTH),
            MosfetRegion::Saturation
        );
        let (ids, region) = device(0.02).evaluate(VTH, 1.0);
        assert_eq!(region, MosfetRegion::Saturation);
        assert_eq!(ids, 0.0);
    }

    #[test]
    fn test_vdsat_boundary_is_saturation() {
        let vgs = 2.0;
        let vds = vgs - VTH;
        assert_eq!(
            MosfetRegion::classify(vgs, vds, VTH),
            MosfetRegion::Saturation
        );
    }

    #[test]
    fn test_cutoff_is_zero() {
        let m = device(0.02);
        for i in 0..=20 {
            let vds = 0.1 * i as f64;
            for &vgs in &[-1.0, 0.0, 0.5, VTH - 1e-9] {
                assert_eq!(m.drain_current(vgs, vds), 0.0);
            }
        }
    }

    #[test]
    fn test_linear_formula() {
        let m = device(0.02);
        let (ids, region) = m.evaluate(3.0, 0.5);
        assert_eq!(region, MosfetRegion::Linear);
        let expected = K * (W / L) * ((3.0 - VTH) * 0.5 - 0.125);
        assert!((ids - expected).abs() < 1e-15);
    }

    #[test]
    fn test_linear_ignores_lambda() {
        let a = device(0.0).drain_current(3.0, 0.5);
        let b = device(0.5).drain_current(3.0, 0.5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_vds_gives_zero_current() {
        let (ids, region) = device(0.02).evaluate(3.0, 0.0);
        assert_eq!(region, MosfetRegion::Linear);
        assert_eq!(ids, 0.0);
    }

    #[test]
    fn test_saturation_formula() {
        let m = device(0.02);
        let (ids, region) = m.evaluate(2.0, 2.0);
        assert_eq!(region, MosfetRegion::Saturation);
        let vov = 2.0 - VTH;
        let expected = 0.5 * K * (W / L) * vov * vov * (1.0 + 0.02 * 2.0);
        assert!((ids - expected).abs() < 1e-15);
        assert!(ids > 0.0);
    }

    #[test]
    fn test_saturation_increases_with_lambda() {
        let mut prev = 0.0;
        for i in 0..10 {
            let lambda = 0.01 * i as f64;
            let ids = device(lambda).drain_current(2.0, 2.0);
            assert!(ids > prev);
            prev = ids;
        }
    }

    #[test]
    fn test_continuity_at_vdsat() {
        let m = device(0.0);
        let vgs = 3.0;
        let vdsat = m.vdsat(vgs);
        let expected = 0.5 * m.beta() * vdsat * vdsat;

        let eps = 1e-9;
        let below = m.drain_current(vgs, vdsat - eps);
        let above = m.drain_current(vgs, vdsat + eps);
        assert_eq!(m.region(vgs, vdsat - eps), MosfetRegion::Linear);
        assert_eq!(m.region(vgs, vdsat + eps), MosfetRegion::Saturation);
        assert!((below - expected).abs() < 1e-12);
        assert!((above - expected).abs() < 1e-12);
    }

    #[test]
    fn test_free_function() {
        let ids = drain_current(2.0, 2.0, K, W, L, VTH, 0.02).unwrap();
        assert_eq!(ids, device(0.02).drain_current(2.0, 2.0));
    }

    #[test]
    fn test_zero_channel_length_rejected() {
        let err = drain_current(2.0, 1.0, K, W, 0.0, VTH, 0.02).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidParameter {
                name: "channel_length",
                value: 0.0,
                reason: "must be non-zero",
            }
        );
    }

    #[test]
    fn test_non_physical_inputs_rejected() {
        assert!(SquareLawMosfet::new(K, W, -L, VTH, 0.0).is_err());
        assert!(SquareLawMosfet::new(K, -W, L, VTH, 0.0).is_err());
        assert!(SquareLawMosfet::new(-K, W, L, VTH, 0.0).is_err());
        assert!(SquareLawMosfet::new(K, W, L, VTH, -0.1).is_err());
        assert!(SquareLawMosfet::new(K, W, L, f64::NAN, 0.0).is_err());
        assert!(drain_current(f64::NAN, 1.0, K, W, L, VTH, 0.0).is_err());
        assert!(drain_current(2.0, f64::INFINITY, K, W, L, VTH, 0.0).is_err());
    }

    #[test]
    fn test_region_display() {
        assert_eq!(MosfetRegion::Cutoff.to_string(), "cutoff");
        assert_eq!(MosfetRegion::Linear.to_string(), "linear");
        assert_eq!(MosfetRegion::Saturation.to_string(), "saturation");
    }
}
