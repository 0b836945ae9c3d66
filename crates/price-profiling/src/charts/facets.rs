//! Per-OS price histograms laid out in a single row.

use super::{OPSYS_DISTRIBUTION_FILE, bin_counts, render_err};
use crate::config::AnalysisConfig;
use crate::error::Result;
use plotters::prelude::*;
use std::path::Path;

const FACET_WIDTH: u32 = 400;
const HEIGHT: u32 = 500;

/// Render one histogram per group, all sharing the vertical count scale.
pub(crate) fn render(
    config: &AnalysisConfig,
    groups: &[(String, Vec<f64>)],
    path: &Path,
) -> Result<()> {
    let width = FACET_WIDTH * groups.len().max(1) as u32;
    let root = BitMapBackend::new(path, (width, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| render_err(OPSYS_DISTRIBUTION_FILE, e))?;

    // Shared y scale: tallest bin across every facet.
    let per_facet_bins: Vec<_> = groups
        .iter()
        .map(|(_, prices)| bin_counts(prices, config.histogram_bins))
        .collect();
    let global_max = per_facet_bins
        .iter()
        .flat_map(|bins| bins.iter().map(|b| b.count))
        .max()
        .unwrap_or(1);
    let y_max = global_max as f64 * 1.1;

    let areas = root.split_evenly((1, groups.len().max(1)));

    for (i, ((label, _), bins)) in groups.iter().zip(per_facet_bins.iter()).enumerate() {
        let area = &areas[i];
        let x_min = bins.first().map(|b| b.lo).unwrap_or(0.0);
        let x_max = bins.last().map(|b| b.hi).unwrap_or(1.0);

        let mut chart = ChartBuilder::on(area)
            .caption(format!("Distribution: {}", label), ("sans-serif", 18))
            .margin(8)
            .x_label_area_size(35)
            .y_label_area_size(45)
            .build_cartesian_2d(x_min..x_max, 0.0..y_max)
            .map_err(|e| render_err(OPSYS_DISTRIBUTION_FILE, e))?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc("Price (Euro)");
        // Only the leftmost facet carries the count label.
        if i == 0 {
            mesh.y_desc("Number of Laptops");
        }
        mesh.draw()
            .map_err(|e| render_err(OPSYS_DISTRIBUTION_FILE, e))?;

        chart
            .draw_series(bins.iter().map(|bin| {
                Rectangle::new(
                    [(bin.lo, 0.0), (bin.hi, bin.count as f64)],
                    BLUE.mix(0.45).filled(),
                )
            }))
            .map_err(|e| render_err(OPSYS_DISTRIBUTION_FILE, e))?;
    }

    root.present()
        .map_err(|e| render_err(OPSYS_DISTRIBUTION_FILE, e))?;
    Ok(())
}
