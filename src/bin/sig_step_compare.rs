use clap::Parser;
use std::path::PathBuf;
use zero_dl_numdiff::activation::{sigmoid_arr1, step_arr1};
use zero_dl_numdiff::plot::{compare_plot, Series};
use zero_dl_numdiff::PlotConfig;

/// Plots the sigmoid against the step function.
#[derive(Parser, Debug)]
struct Args {
    /// JSON file overriding the domain, y range, labels, grid or output directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the SVG file is written to
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => PlotConfig::load(path)?,
        None => PlotConfig::default(),
    };
    if let Some(out_dir) = args.out_dir {
        config.out_dir = out_dir;
    }

    let xs = config.domain();
    let series = [
        Series::new("sigmoid", "#1f77b4", sigmoid_arr1(xs.view())),
        Series::new("step", "#000000", step_arr1(xs.view())),
    ];
    let path = compare_plot("sig_step_compare", xs.view(), &series, &config)?;
    println!("{}", path.display());

    Ok(())
}
