//! Chart data model and the renderer interface.

use std::io::Write;

use serde::Serialize;

use crate::config::ChartConfig;
use crate::driver::SweepResult;
use crate::error::{Error, Result};

/// A named line series with equal-length x and y values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    name: String,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        let name = name.into();
        if x.len() != y.len() {
            return Err(Error::SeriesLength {
                name,
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(Self { name, x, y })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate (x, y) pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Everything a renderer needs to draw a legend-annotated line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    series: Vec<Series>,
}

impl Chart {
    pub fn new(config: &ChartConfig) -> Self {
        Self {
            title: config.title.clone(),
            x_label: config.x_label.clone(),
            y_label: config.y_label.clone(),
            width: config.width,
            height: config.height,
            series: Vec::new(),
        }
    }

    /// One series per curve, labelled by V_GS, in sweep order.
    pub fn from_sweep(result: &SweepResult, config: &ChartConfig) -> Result<Self> {
        let mut chart = Self::new(config);
        for curve in &result.curves {
            chart.add_series(Series::new(
                curve.label.clone(),
                curve.vds.clone(),
                curve.ids.clone(),
            )?);
        }
        Ok(chart)
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Min and max x over all series, or `None` if there are no points.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        value_range(self.series.iter().flat_map(|s| s.x.iter().copied()))
    }

    /// Min and max y over all series, or `None` if there are no points.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        value_range(self.series.iter().flat_map(|s| s.y.iter().copied()))
    }
}

fn value_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// A collaborator that draws and displays a [`Chart`].
pub trait ChartRenderer {
    type Error;

    fn render(&mut self, chart: &Chart) -> std::result::Result<(), Self::Error>;
}

/// Renders a chart as a fixed-width text table.
///
/// The first column is the x value of the first series; each series then
/// gets one y column headed by its name.
pub struct TableRenderer<W: Write> {
    out: W,
}

impl<W: Write> TableRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

const COLUMN_WIDTH: usize = 14;

impl<W: Write> ChartRenderer for TableRenderer<W> {
    type Error = std::io::Error;

    fn render(&mut self, chart: &Chart) -> std::io::Result<()> {
        let Some(first) = chart.series.first() else {
            return Ok(());
        };
        let w = COLUMN_WIDTH;

        writeln!(self.out, "{}", chart.title)?;
        writeln!(self.out)?;

        // Header
        write!(self.out, "{:>w$}", chart.x_label)?;
        for s in &chart.series {
            write!(self.out, "{:>w$}", s.name)?;
        }
        writeln!(self.out)?;

        // Separator
        let width = COLUMN_WIDTH * (1 + chart.series.len());
        writeln!(self.out, "{}", "-".repeat(width))?;

        for (row, x) in first.x.iter().enumerate() {
            write!(self.out, "{:>w$.4}", x)?;
            for s in &chart.series {
                match s.y.get(row) {
                    Some(y) => write!(self.out, "{:>w$.6e}", y)?,
                    None => write!(self.out, "{:>w$}", "")?,
                }
            }
            writeln!(self.out)?;
        }

        writeln!(self.out)?;
        writeln!(self.out, "{} points per series.", first.len())?;
        Ok(())
    }
}
