//! Price-by-RAM boxplot.

use super::{RAM_VS_PRICE_FILE, render_err};
use crate::error::Result;
use plotters::prelude::*;
use std::path::Path;

const SIZE: (u32, u32) = (1000, 600);

pub(crate) fn render(groups: &[(String, Vec<f64>)], path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| render_err(RAM_VS_PRICE_FILE, e))?;

    let labels: Vec<String> = groups.iter().map(|(label, _)| label.clone()).collect();
    let quartiles: Vec<(&String, Quartiles)> = groups
        .iter()
        .map(|(label, prices)| (label, Quartiles::new(prices)))
        .collect();

    let y_max = quartiles
        .iter()
        .flat_map(|(_, q)| q.values())
        .fold(f32::NEG_INFINITY, f32::max)
        * 1.05;
    let y_max = if y_max.is_finite() { y_max } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Relationship between RAM and Price (with Outliers)",
            ("sans-serif", 28),
        )
        .margin(12)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(labels[..].into_segmented(), 0f32..y_max)
        .map_err(|e| render_err(RAM_VS_PRICE_FILE, e))?;

    chart
        .configure_mesh()
        .x_desc("RAM (GB)")
        .y_desc("Price (Euro)")
        .draw()
        .map_err(|e| render_err(RAM_VS_PRICE_FILE, e))?;

    chart
        .draw_series(quartiles.iter().map(|(label, quartiles)| {
            Boxplot::new_vertical(SegmentValue::CenterOf(*label), quartiles)
                .width(20)
                .whisker_width(0.5)
                .style(BLUE)
        }))
        .map_err(|e| render_err(RAM_VS_PRICE_FILE, e))?;

    root.present()
        .map_err(|e| render_err(RAM_VS_PRICE_FILE, e))?;
    Ok(())
}
