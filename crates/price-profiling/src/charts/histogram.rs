//! Price histogram with a Gaussian density overlay.

use super::{PRICE_DISTRIBUTION_FILE, bin_counts, render_err};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::stats::descriptive::gaussian_kde;
use plotters::prelude::*;
use std::path::Path;

const SIZE: (u32, u32) = (1000, 600);

pub(crate) fn render(config: &AnalysisConfig, prices: &[f64], path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| render_err(PRICE_DISTRIBUTION_FILE, e))?;

    let bins = bin_counts(prices, config.histogram_bins);
    let x_min = bins.first().map(|b| b.lo).unwrap_or(0.0);
    let x_max = bins.last().map(|b| b.hi).unwrap_or(1.0);
    let max_count = bins.iter().map(|b| b.count).max().unwrap_or(1);
    let y_max = max_count as f64 * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Distribution of Laptop Prices", ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(|e| render_err(PRICE_DISTRIBUTION_FILE, e))?;

    chart
        .configure_mesh()
        .x_desc("Price (Euro)")
        .y_desc("Frequency")
        .draw()
        .map_err(|e| render_err(PRICE_DISTRIBUTION_FILE, e))?;

    chart
        .draw_series(bins.iter().map(|bin| {
            Rectangle::new(
                [(bin.lo, 0.0), (bin.hi, bin.count as f64)],
                BLUE.mix(0.45).filled(),
            )
        }))
        .map_err(|e| render_err(PRICE_DISTRIBUTION_FILE, e))?;

    // Density curve scaled to the count axis, the way seaborn overlays
    // a KDE on a count histogram.
    let curve = gaussian_kde(prices, config.kde_grid_points);
    if !curve.is_empty() {
        let n = prices.len() as f64;
        let bin_width = bins.first().map(|b| b.hi - b.lo).unwrap_or(1.0);
        chart
            .draw_series(LineSeries::new(
                curve.into_iter().map(|(x, d)| (x, d * n * bin_width)),
                BLUE.stroke_width(2),
            ))
            .map_err(|e| render_err(PRICE_DISTRIBUTION_FILE, e))?;
    }

    root.present()
        .map_err(|e| render_err(PRICE_DISTRIBUTION_FILE, e))?;
    Ok(())
}
