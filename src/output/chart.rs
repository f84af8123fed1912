//! The two-panel SVG summary chart.
//!
//! Left panel: mean usage across all countries per year, as a line. Right
//! panel: the ranked countries as horizontal bars, highest on top. Rendering
//! uses the SVG backend only; text lands as SVG text elements.

use crate::stats::{CountryAverage, YearlyAverage};
use anyhow::{anyhow, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use tracing::{info, warn};

/// File name of the rendered chart.
pub const SUMMARY_CHART: &str = "internet_usage_summary.svg";

const WIDTH: u32 = 1400;
const HEIGHT: u32 = 700;

/// Render the summary chart to `path`.
///
/// With nothing to plot the file is skipped, with a warning, rather than
/// failed.
#[tracing::instrument(level = "info", skip(yearly, top), fields(path = %path.as_ref().display()))]
pub fn render<P: AsRef<Path>>(
    path: P,
    yearly: &[YearlyAverage],
    top: &[CountryAverage],
) -> Result<()> {
    if yearly.is_empty() || top.is_empty() {
        warn!("nothing to plot, skipping the summary chart");
        return Ok(());
    }
    let path = path.as_ref();

    let root = SVGBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| anyhow!("filling the chart background: {}", e))?;
    let (left, right) = root.split_horizontally((WIDTH / 2) as i32);

    draw_average_line(&left, yearly)?;
    draw_top_bars(&right, top)?;

    root.present()
        .map_err(|e| anyhow!("writing {}: {}", path.display(), e))?;
    info!("rendered the summary chart");
    Ok(())
}

fn draw_average_line(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    yearly: &[YearlyAverage],
) -> Result<()> {
    let min_year = yearly.iter().map(|r| r.year).min().unwrap_or(0);
    let max_year = yearly.iter().map(|r| r.year).max().unwrap_or(0);
    let y_max = yearly
        .iter()
        .filter_map(|r| r.average_usage)
        .fold(0.0_f64, f64::max)
        .max(1.0)
        * 1.05;

    let mut chart = ChartBuilder::on(area)
        .caption(
            "Average Internet Usage Over Time",
            ("sans-serif", 22).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(min_year..(max_year + 1), 0.0..y_max)
        .map_err(|e| anyhow!("building the usage-over-time axes: {}", e))?;
    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Average Internet Usage (%)")
        .draw()
        .map_err(|e| anyhow!("drawing the usage-over-time mesh: {}", e))?;

    // years with a missing average leave a gap in the markers
    let points: Vec<(i32, f64)> = yearly
        .iter()
        .filter_map(|r| r.average_usage.map(|avg| (r.year, avg)))
        .collect();
    chart
        .draw_series(LineSeries::new(points.iter().copied(), &BLUE))
        .map_err(|e| anyhow!("drawing the usage-over-time line: {}", e))?;
    chart
        .draw_series(
            points
                .iter()
                .map(|&(year, avg)| Circle::new((year, avg), 3, BLUE.filled())),
        )
        .map_err(|e| anyhow!("drawing the usage-over-time markers: {}", e))?;
    Ok(())
}

fn draw_top_bars(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    top: &[CountryAverage],
) -> Result<()> {
    let n = top.len();
    let x_max = top
        .iter()
        .filter_map(|c| c.average_usage)
        .fold(0.0_f64, f64::max)
        .max(1.0)
        * 1.05;

    let mut chart = ChartBuilder::on(area)
        .caption(
            "Top 10 Countries by Average Internet Usage",
            ("sans-serif", 22).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(10)
        .build_cartesian_2d(0.0..x_max, 0.0..n as f64)
        .map_err(|e| anyhow!("building the ranking axes: {}", e))?;
    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(0)
        .x_desc("Average Internet Usage (%)")
        .draw()
        .map_err(|e| anyhow!("drawing the ranking mesh: {}", e))?;

    // rank 0 sits in the topmost band
    chart
        .draw_series(top.iter().enumerate().map(|(i, country)| {
            let band = (n - 1 - i) as f64;
            let value = country.average_usage.unwrap_or(0.0);
            Rectangle::new(
                [(0.0, band + 0.15), (value, band + 0.85)],
                Palette99::pick(i).filled(),
            )
        }))
        .map_err(|e| anyhow!("drawing the ranking bars: {}", e))?;
    chart
        .draw_series(top.iter().enumerate().map(|(i, country)| {
            let band = (n - 1 - i) as f64;
            Text::new(
                country.country_name.clone(),
                (x_max * 0.02, band + 0.62),
                ("sans-serif", 14).into_font(),
            )
        }))
        .map_err(|e| anyhow!("labelling the ranking bars: {}", e))?;
    Ok(())
}
