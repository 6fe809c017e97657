//! SVG chart rendering.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plotters::prelude::*;
use squarelaw_sweep::{Chart, ChartRenderer};

/// Fraction of the data span added above the largest y value.
const Y_HEADROOM: f64 = 0.05;

/// Draws a [`Chart`] as an SVG line chart with grid and legend.
pub struct SvgRenderer {
    path: PathBuf,
}

impl SvgRenderer {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChartRenderer for SvgRenderer {
    type Error = anyhow::Error;

    fn render(&mut self, chart: &Chart) -> Result<()> {
        let (x_min, x_max) = chart.x_range().context("chart has no data points")?;
        let (y_min, y_max) = chart.y_range().context("chart has no data points")?;
        let (x_min, x_max) = padded(x_min, x_max, 0.0);
        let (y_min, y_max) = padded(y_min, y_max, Y_HEADROOM);

        let root = SVGBackend::new(&self.path, (chart.width, chart.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut ctx = ChartBuilder::on(&root)
            .caption(&chart.title, ("sans-serif", 22))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(80)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        ctx.configure_mesh()
            .x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .y_label_formatter(&|v| format!("{:.1e}", v))
            .draw()?;

        for (i, series) in chart.series().iter().enumerate() {
            let color = Palette99::pick(i).to_rgba();
            ctx.draw_series(LineSeries::new(
                series.points(),
                ShapeStyle::from(&color).stroke_width(2),
            ))?
            .label(series.name())
            .legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 20, y)],
                    ShapeStyle::from(&color).stroke_width(2),
                )
            });
        }

        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;

        root.present()
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        log::info!("chart written to {}", self.path.display());
        Ok(())
    }
}

/// Widen a range so it is never empty, adding `headroom` of the span on top.
fn padded(min: f64, max: f64, headroom: f64) -> (f64, f64) {
    let span = max - min;
    if span > 0.0 {
        (min, max + span * headroom)
    } else {
        let pad = if max.abs() > 0.0 { max.abs() * 0.1 } else { 1e-12 };
        (min - pad, max + pad)
    }
}
