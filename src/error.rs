use std::path::PathBuf;
use thiserror::Error;

/// Errors raised outside the numeric core: config validation and chart output.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to render chart to {path:?}: {message}")]
    Render { path: PathBuf, message: String },

    #[error("Perturbation must be positive and finite, got {0}")]
    InvalidEps(f64),

    #[error("Empty or non-finite plot domain: start {start}, stop {stop}, step {step}")]
    InvalidDomain { start: f64, stop: f64, step: f64 },

    #[error("Empty or non-finite y range: {y_min}..{y_max}")]
    InvalidRange { y_min: f64, y_max: f64 },

    #[error("Series {label:?} has {actual} points, expected {expected}")]
    SeriesLength {
        label: String,
        expected: usize,
        actual: usize,
    },

    #[error("Malformed config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
