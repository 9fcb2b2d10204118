use anyhow::Result;
use log::info;
use structopt::StructOpt;

use perf::Series;
use perf_data::{LABELS, POSITIONS};

mod perf;
mod perf_data;
mod plot;
mod stats;
mod window;

/// Plots interval tree benchmark latencies against B-tree degree.
#[derive(Debug, StructOpt)]
#[structopt(name = "interval-tree-chart")]
struct Opt {}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let opt = Opt::from_args();
    log::debug!("{opt:?}");

    if let Err(error) = run() {
        log::error!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut series = perf_data::measured_series();

    let inputs: Vec<&[f64]> = series.iter().map(|s| s.latencies.as_slice()).collect();
    let average = stats::mean_series(&inputs)?;
    println!("{:?}", average);

    series.push(Series {
        name: "Average",
        latencies: average,
    });

    info!(
        "rendering {} series over {} categories",
        series.len(),
        LABELS.len()
    );
    let bitmap = plot::render_bitmap(&series, &POSITIONS, &LABELS)?;

    info!("showing chart, close the window or press Esc to exit");
    window::show(
        plot::CAPTION,
        &bitmap,
        plot::PLOT_WIDTH as usize,
        plot::PLOT_HEIGHT as usize,
    )
}
