use std::collections::HashMap;
use std::ops::Range;

use anyhow::{bail, Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;

use crate::perf::Series;

pub const CAPTION: &str = "Interval tree benchmarks";
pub const PLOT_WIDTH: u32 = 800;
pub const PLOT_HEIGHT: u32 = 600;

const FONT: &str = "sans-serif";
const Y_LABEL: &str = "Latency";
const X_LABEL: &str = "B-tree degree";

// Share of the data extent added on each side of both axes.
const MARGIN_FRACTION: f64 = 0.2;
// Share of the figure height kept for the rotated tick labels.
const BOTTOM_FRACTION: f64 = 0.15;
const MARKER_SIZE: i32 = 3;

fn color_map() -> HashMap<&'static str, RGBColor> {
    let mut color_map = HashMap::new();
    color_map.insert("Insert", RED);
    color_map.insert("FastInsert", BLUE);
    color_map.insert("Delete", RGBColor(0, 128, 0));
    color_map.insert("Get", RGBColor(191, 191, 0));
    color_map.insert("Average", RGBColor(255, 165, 0));
    color_map
}

/// Range covering `values`, widened by `fraction` of its span on both ends.
pub fn padded_range(values: impl Iterator<Item = f64>, fraction: f64) -> Option<Range<f64>> {
    let (min, max) = values.fold(None, |acc: Option<(f64, f64)>, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })?;

    let span = max - min;
    let padding = if span > 0.0 { span * fraction } else { fraction };

    Some(min - padding..max + padding)
}

/// Category label drawn under the tick at `v`, or nothing between categories.
pub fn tick_label(positions: &[u32], labels: &[&str], v: f64) -> String {
    positions
        .iter()
        .zip(labels.iter())
        .find(|(x, _)| (f64::from(**x) - v).abs() < 1e-6)
        .map(|(_, label)| label.to_string())
        .unwrap_or_default()
}

fn check_lengths(series: &[Series], positions: &[u32], labels: &[&str]) -> Result<()> {
    if positions.len() != labels.len() {
        bail!(
            "{} category positions do not match {} labels",
            positions.len(),
            labels.len()
        );
    }

    for s in series {
        if s.len() != labels.len() {
            bail!(
                "series {} has {} points, but there are {} categories",
                s.name,
                s.len(),
                labels.len()
            );
        }
    }

    Ok(())
}

pub fn write_plot<DB>(
    root: &DrawingArea<DB, Shift>,
    series: &[Series],
    positions: &[u32],
    labels: &[&str],
    caption: &str,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    check_lengths(series, positions, labels)?;

    let colors = color_map();

    let x_range = padded_range(positions.iter().map(|x| f64::from(*x)), MARGIN_FRACTION)
        .context("no categories to plot")?;
    let y_range = padded_range(
        series.iter().flat_map(|s| s.latencies.iter().copied()),
        MARGIN_FRACTION,
    )
    .context("no latencies to plot")?;
    log::debug!("x range {x_range:?}, y range {y_range:?}");

    let (_, height) = root.dim_in_pixel();
    let bottom = (f64::from(height) * BOTTOM_FRACTION) as u32;

    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .caption(caption, (FONT, 20))
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, bottom)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_label_formatter(&|v| tick_label(positions, labels, *v))
        .y_label_formatter(&|v| format!("{:.1}", v))
        .x_label_style((FONT, 13).into_font().transform(FontTransform::Rotate270))
        .x_labels(12)
        .y_labels(10)
        .y_desc(Y_LABEL)
        .x_desc(X_LABEL)
        .draw()?;

    for s in series {
        let color = colors.get(s.name).copied().unwrap_or(BLACK);

        chart
            .draw_series(LineSeries::new(s.points(positions), color.stroke_width(2)))?
            .label(s.name)
            .legend(move |(x, y)| {
                EmptyElement::at((x, y))
                    + PathElement::new(vec![(0, 0), (20, 0)], color.stroke_width(2))
                    + Rectangle::new(
                        [(10 - MARKER_SIZE, -MARKER_SIZE), (10 + MARKER_SIZE, MARKER_SIZE)],
                        color.filled(),
                    )
            });

        chart.draw_series(s.points(positions).map(|point| {
            EmptyElement::at(point)
                + Rectangle::new(
                    [(-MARKER_SIZE, -MARKER_SIZE), (MARKER_SIZE, MARKER_SIZE)],
                    color.filled(),
                )
        }))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperMiddle)
        .label_font((FONT, 13))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present().context("failed to finish chart")?;

    Ok(())
}

/// Renders the chart into an RGB24 buffer (3 bytes per pixel) of `PLOT_WIDTH` x `PLOT_HEIGHT` pixels.
pub fn render_bitmap(series: &[Series], positions: &[u32], labels: &[&str]) -> Result<Vec<u8>> {
    let mut buffer = vec![0u8; (PLOT_WIDTH * PLOT_HEIGHT * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (PLOT_WIDTH, PLOT_HEIGHT))
            .into_drawing_area();
        write_plot(&root, series, positions, labels, CAPTION).context("failed to plot")?;
    }
    Ok(buffer)
}
