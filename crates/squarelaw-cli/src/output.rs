//! Run summary formatting.

use std::io::{self, Write};

use squarelaw_sweep::{SweepDriver, SweepResult};

/// Print the derived device values and a per-curve region summary.
pub fn print_summary(driver: &SweepDriver, result: &SweepResult) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_summary(&mut out, driver, result)
}

pub fn write_summary(
    out: &mut impl Write,
    driver: &SweepDriver,
    result: &SweepResult,
) -> io::Result<()> {
    let device = driver.device();
    let threshold = driver.threshold();

    writeln!(out, "Square-Law N-MOSFET Characteristic")?;
    writeln!(out, "==================================")?;
    writeln!(out)?;
    writeln!(out, "  k       = {:.6e} A/V^2", result.k)?;
    writeln!(out, "  k*W/L   = {:.6e} A/V^2", device.beta())?;
    writeln!(out, "  V_t     = {:.6} V", result.vth)?;
    writeln!(out, "  V_FB    = {:.6} V", threshold.flat_band)?;
    writeln!(out, "  phi_F   = {:.6} V", threshold.fermi_potential)?;
    writeln!(out, "  lambda  = {} 1/V", device.lambda)?;
    writeln!(out)?;

    writeln!(
        out,
        "{:>12}{:>12}{:>10}{:>10}{:>12}{:>16}",
        "V_GS (V)", "V_DSsat", "cutoff", "linear", "saturation", "I_D max (A)"
    )?;
    writeln!(out, "{}", "-".repeat(72))?;
    for curve in &result.curves {
        writeln!(
            out,
            "{:>12.4}{:>12.4}{:>10}{:>10}{:>12}{:>16.6e}",
            curve.vgs,
            device.vdsat(curve.vgs).max(0.0),
            curve.regions.cutoff,
            curve.regions.linear,
            curve.regions.saturation,
            curve.max_current()
        )?;
    }
    writeln!(out)?;
    Ok(())
}
