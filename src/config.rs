use crate::activation::arange;
use crate::error::{Error, Result};
use ndarray::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Domain, axis bounds, grid and output location of a chart.
/// Fields missing from a config file keep their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub x_label: String,
    pub y_label: String,
    pub grid: bool,
    pub out_dir: PathBuf,
}

impl Default for PlotConfig {
    fn default() -> PlotConfig {
        PlotConfig {
            start: -5.0,
            stop: 5.0,
            step: 0.1,
            y_min: -0.1,
            y_max: 1.1,
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            grid: true,
            out_dir: PathBuf::from("plots"),
        }
    }
}

impl PlotConfig {
    pub fn from_json(s: &str) -> Result<PlotConfig> {
        let config: PlotConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<PlotConfig> {
        let s = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        PlotConfig::from_json(&s)
    }

    pub fn validate(&self) -> Result<()> {
        let (start, stop, step) = (self.start, self.stop, self.step);
        if !(start.is_finite() && stop.is_finite() && step.is_finite())
            || step <= 0.
            || start >= stop
        {
            return Err(Error::InvalidDomain { start, stop, step });
        }
        if !(self.y_min.is_finite() && self.y_max.is_finite()) || self.y_min >= self.y_max {
            return Err(Error::InvalidRange {
                y_min: self.y_min,
                y_max: self.y_max,
            });
        }
        Ok(())
    }

    /// Sample points `start, start + step, ...` below `stop`.
    pub fn domain(&self) -> Array1<f64> {
        arange(self.start, self.stop, self.step)
    }
}

#[test]
fn test_default_domain() {
    let config = PlotConfig::default();
    assert!(config.validate().is_ok());
    let xs = config.domain();
    assert_eq!(xs.len(), 100);
    assert_eq!(xs[0], -5.0);
    assert!(xs[99] < 5.0);
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config = PlotConfig::from_json(r#"{ "step": 0.5, "out_dir": "out" }"#).unwrap();
    assert_eq!(config.step, 0.5);
    assert_eq!(config.out_dir, PathBuf::from("out"));
    assert_eq!(config.start, -5.0);
    assert_eq!(config.y_label, "y");
    assert!(config.grid);

    let config = PlotConfig::from_json(r#"{ "grid": false }"#).unwrap();
    assert!(!config.grid);
}

#[test]
fn test_invalid_configs() {
    assert!(matches!(
        PlotConfig::from_json(r#"{ "step": 0.0 }"#),
        Err(Error::InvalidDomain { .. })
    ));
    assert!(matches!(
        PlotConfig::from_json(r#"{ "start": 3.0, "stop": 1.0 }"#),
        Err(Error::InvalidDomain { .. })
    ));
    assert!(matches!(
        PlotConfig::from_json(r#"{ "y_min": 2.0 }"#),
        Err(Error::InvalidRange { .. })
    ));
    assert!(matches!(
        PlotConfig::from_json("{ step: "),
        Err(Error::Config(_))
    ));
}

#[test]
fn test_load_missing_file() {
    let err = PlotConfig::load(Path::new("/nonexistent/plot.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
