//! Error types for squarelaw-sweep.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring or running a sweep.
#[derive(Debug, Error)]
pub enum Error {
    /// A device equation rejected its inputs.
    #[error("device model error: {0}")]
    Device(#[from] squarelaw_devices::Error),

    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for this schema.
    #[error("invalid config JSON: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The sweep settings cannot produce a usable series.
    #[error("invalid sweep: {0}")]
    InvalidSweep(String),

    /// A chart series has mismatched x and y lengths.
    #[error("series {name} has {x_len} x values but {y_len} y values")]
    SeriesLength {
        name: String,
        x_len: usize,
        y_len: usize,
    },
}

/// Result type for sweep operations.
pub type Result<T> = std::result::Result<T, Error>;
