use crate::config::PlotConfig;
use crate::error::{Error, Result};
use log::info;
use ndarray::prelude::*;
use plotlib::grid::Grid;
use plotlib::page::Page;
use plotlib::repr::Plot;
use plotlib::style::LineStyle;
use plotlib::view::{ContinuousView, View};
use std::path::PathBuf;

/// One labeled line of a comparison chart, sampled at the chart's domain.
#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub colour: String,
    pub ys: Array1<f64>,
}

impl Series {
    pub fn new(label: &str, colour: &str, ys: Array1<f64>) -> Series {
        Series {
            label: label.to_string(),
            colour: colour.to_string(),
            ys,
        }
    }
}

/// Draws every series against `xs` on one chart with a legend.
pub fn compare_plot(
    name: &str,
    xs: ArrayView1<f64>,
    series: &[Series],
    config: &PlotConfig,
) -> Result<PathBuf> {
    config.validate()?;
    let mut v = view(config);
    for s in series {
        if s.ys.len() != xs.len() {
            return Err(Error::SeriesLength {
                label: s.label.clone(),
                expected: xs.len(),
                actual: s.ys.len(),
            });
        }
        let data = xs.iter().copied().zip(s.ys.iter().copied()).collect();
        let p = Plot::new(data)
            .line_style(LineStyle::new().colour(s.colour.as_str()))
            .legend(s.label.clone());
        v = v.add(p);
    }
    save(name, &v, config)
}

fn view(config: &PlotConfig) -> ContinuousView {
    let mut v = ContinuousView::new()
        .x_range(config.start, config.stop)
        .y_range(config.y_min, config.y_max)
        .x_label(config.x_label.as_str())
        .y_label(config.y_label.as_str());
    if config.grid {
        v.add_grid(Grid::new(10, 6));
    }
    v
}

fn save(name: &str, v: &ContinuousView, config: &PlotConfig) -> Result<PathBuf> {
    std::fs::create_dir_all(&config.out_dir).map_err(|source| Error::Io {
        path: config.out_dir.clone(),
        source,
    })?;
    let path = config.out_dir.join(format!("{}.svg", name));
    Page::single(v)
        .save(&path)
        .map_err(|e| Error::Render {
            path: path.clone(),
            message: format!("{:?}", e),
        })?;
    info!("wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
fn test_config(name: &str) -> PlotConfig {
    PlotConfig {
        out_dir: std::env::temp_dir().join(format!(
            "zero-dl-numdiff-{}-{}",
            name,
            std::process::id()
        )),
        ..PlotConfig::default()
    }
}

#[test]
fn test_compare_plot_writes_svg() {
    use crate::activation::{sigmoid_arr1, step_arr1};

    let config = test_config("compare");
    let xs = config.domain();
    let series = [
        Series::new("sigmoid", "#1f77b4", sigmoid_arr1(xs.view())),
        Series::new("step", "#000000", step_arr1(xs.view())),
    ];
    let path = compare_plot("sig_step_compare", xs.view(), &series, &config).unwrap();
    assert!(path.exists());
    std::fs::remove_dir_all(&config.out_dir).unwrap();
}

#[test]
fn test_compare_plot_rejects_short_series() {
    let config = test_config("short");
    let xs = config.domain();
    let series = [Series::new("short", "#000000", array![0., 1.])];
    let err = compare_plot("short", xs.view(), &series, &config).unwrap_err();
    assert!(matches!(
        err,
        Error::SeriesLength {
            expected: 100,
            actual: 2,
            ..
        }
    ));
}

#[test]
fn test_compare_plot_draws_grid() {
    use crate::activation::sigmoid_arr1;

    let with_grid = test_config("grid");
    let without_grid = PlotConfig {
        grid: false,
        ..test_config("nogrid")
    };
    let render = |config: &PlotConfig| {
        let xs = config.domain();
        let series = [Series::new("sigmoid", "#1f77b4", sigmoid_arr1(xs.view()))];
        let path = compare_plot("sigmoid", xs.view(), &series, config).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_dir_all(&config.out_dir).unwrap();
        svg
    };
    let a = render(&with_grid);
    let b = render(&without_grid);
    // same series and axes, plus the grid lines
    assert!(a.matches('<').count() > b.matches('<').count());
    assert!(a.len() > b.len());
}

#[test]
fn test_plot_rejects_bad_domain() {
    let config = PlotConfig {
        step: -0.1,
        ..test_config("bad")
    };
    let xs = array![0., 1.];
    let series = [Series::new("step", "#000000", array![0., 1.])];
    assert!(matches!(
        compare_plot("bad", xs.view(), &series, &config),
        Err(Error::InvalidDomain { .. })
    ));
}
