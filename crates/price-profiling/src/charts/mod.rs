//! Static chart rendering with plotters.
//!
//! Three charts are produced, mirroring the console analysis:
//! - price histogram with a density overlay
//! - per-OS price histograms in one row, sharing the count axis
//! - price-by-RAM boxplot

mod boxplot;
mod facets;
mod histogram;

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::types::columns;
use crate::utils::{numeric_non_null, require_column};
use polars::prelude::*;
use std::path::PathBuf;
use tracing::info;

/// File name of the price histogram.
pub const PRICE_DISTRIBUTION_FILE: &str = "price_distribution.png";
/// File name of the per-OS histogram row.
pub const OPSYS_DISTRIBUTION_FILE: &str = "opsys_distribution_row.png";
/// File name of the RAM/price boxplot.
pub const RAM_VS_PRICE_FILE: &str = "ram_vs_price.png";

/// Renders the analysis charts into the configured output directory.
pub struct ChartRenderer {
    config: AnalysisConfig,
}

impl ChartRenderer {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Histogram of all laptop prices with a density overlay.
    pub fn render_price_distribution(&self, df: &DataFrame) -> Result<PathBuf> {
        let prices = numeric_non_null(require_column(df, columns::PRICE)?)?;
        let path = self.target_path(PRICE_DISTRIBUTION_FILE)?;
        histogram::render(&self.config, &prices, &path)?;
        info!("Wrote {}", path.display());
        Ok(path)
    }

    /// One price histogram per OS category, sharing the vertical scale.
    ///
    /// Expects the `OpSys` column to be normalized already; raw values
    /// would produce one facet per distinct string.
    pub fn render_os_facets(&self, df: &DataFrame) -> Result<PathBuf> {
        let groups = prices_by_key(df, columns::OPSYS)?;
        let path = self.target_path(OPSYS_DISTRIBUTION_FILE)?;
        facets::render(&self.config, &groups, &path)?;
        info!("Wrote {}", path.display());
        Ok(path)
    }

    /// Vertical boxplot of price grouped by RAM size.
    pub fn render_ram_boxplot(&self, df: &DataFrame) -> Result<PathBuf> {
        let groups = prices_by_ram(df)?;
        let path = self.target_path(RAM_VS_PRICE_FILE)?;
        boxplot::render(&groups, &path)?;
        info!("Wrote {}", path.display());
        Ok(path)
    }

    fn target_path(&self, file_name: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.config.output_dir)?;
        Ok(self.config.output_dir.join(file_name))
    }
}

/// A single histogram bucket.
pub(crate) struct Bin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

/// Bucket `values` into `bins` equal-width bins spanning the data range.
pub(crate) fn bin_counts(values: &[f64], bins: usize) -> Vec<Bin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let mut min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max <= min {
        // All values identical; widen so the single bar is visible.
        min -= 0.5;
        max += 0.5;
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| Bin {
            lo: min + width * i as f64,
            hi: min + width * (i + 1) as f64,
            count,
        })
        .collect()
}

/// Non-null `(key, price)` pairs grouped by a string column, in order of
/// first appearance.
pub(crate) fn prices_by_key(df: &DataFrame, key_column: &str) -> Result<Vec<(String, Vec<f64>)>> {
    let keys = require_column(df, key_column)?.str()?.clone();
    let price_float = require_column(df, columns::PRICE)?.cast(&DataType::Float64)?;
    let prices = price_float.f64()?;

    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();
    for (key, price) in keys.into_iter().zip(prices.into_iter()) {
        if let (Some(key), Some(price)) = (key, price) {
            match groups.iter_mut().find(|(k, _)| k.as_str() == key) {
                Some((_, values)) => values.push(price),
                None => groups.push((key.to_string(), vec![price])),
            }
        }
    }

    if groups.is_empty() {
        return Err(AnalysisError::NoValidValues(key_column.to_string()));
    }

    Ok(groups)
}

/// Non-null prices grouped by RAM size, sorted ascending by RAM.
pub(crate) fn prices_by_ram(df: &DataFrame) -> Result<Vec<(String, Vec<f64>)>> {
    let ram_float = require_column(df, columns::RAM)?.cast(&DataType::Float64)?;
    let rams = ram_float.f64()?.clone();
    let price_float = require_column(df, columns::PRICE)?.cast(&DataType::Float64)?;
    let prices = price_float.f64()?;

    let mut groups: Vec<(f64, Vec<f64>)> = Vec::new();
    for (ram, price) in rams.into_iter().zip(prices.into_iter()) {
        if let (Some(ram), Some(price)) = (ram, price) {
            match groups.iter_mut().find(|(r, _)| *r == ram) {
                Some((_, values)) => values.push(price),
                None => groups.push((ram, vec![price])),
            }
        }
    }

    if groups.is_empty() {
        return Err(AnalysisError::NoValidValues(columns::RAM.to_string()));
    }

    groups.sort_by(|a, b| a.0.total_cmp(&b.0));
    Ok(groups
        .into_iter()
        .map(|(ram, values)| (format_ram_label(ram), values))
        .collect())
}

fn format_ram_label(ram: f64) -> String {
    if ram.fract() == 0.0 {
        format!("{}", ram as i64)
    } else {
        format!("{}", ram)
    }
}

/// Map a plotters drawing error into [`AnalysisError::ChartRenderFailed`].
pub(crate) fn render_err(chart: &str, e: impl std::fmt::Display) -> AnalysisError {
    AnalysisError::ChartRenderFailed {
        chart: chart.to_string(),
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_frame() -> DataFrame {
        df![
            "Company" => ["Apple", "Dell", "HP", "Dell", "Apple", "Acer"],
            "Price (Euro)" => [1339.69, 575.0, 899.0, 750.0, 1800.0, 389.0],
            "RAM (GB)" => [8i64, 4, 8, 8, 16, 4],
            "OpSys" => ["Mac", "Windows", "Windows", "Linux", "Mac", "Windows"],
            "Memory" => ["128GB SSD", "500GB HDD", "256GB SSD", "1TB HDD", "512GB SSD", "128GB SSD"],
        ]
        .unwrap()
    }

    #[test]
    fn test_bin_counts_cover_all_values() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 5.0, 5.0];
        let bins = bin_counts(&values, 4);
        assert_eq!(bins.len(), 4);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, values.len());
        // Maximum lands in the last bin, not out of range.
        assert_eq!(bins.last().unwrap().count, 3);
    }

    #[test]
    fn test_bin_counts_degenerate_range() {
        let bins = bin_counts(&[7.0, 7.0], 5);
        let total: usize = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn test_prices_by_key_keeps_appearance_order() {
        let df = sample_frame();
        let groups = prices_by_key(&df, "OpSys").unwrap();
        let keys: Vec<&str> = groups.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Mac", "Windows", "Linux"]);
        assert_eq!(groups[0].1, vec![1339.69, 1800.0]);
    }

    #[test]
    fn test_prices_by_ram_sorted_ascending() {
        let df = sample_frame();
        let groups = prices_by_ram(&df).unwrap();
        let labels: Vec<&str> = groups.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(labels, vec!["4", "8", "16"]);
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn test_renderer_writes_all_charts() {
        let dir = tempfile::tempdir().unwrap();
        let config = AnalysisConfig::builder()
            .output_dir(dir.path())
            .histogram_bins(5)
            .build()
            .unwrap();
        let df = sample_frame();

        let renderer = ChartRenderer::new(&config);
        let hist = renderer.render_price_distribution(&df).unwrap();
        let facets = renderer.render_os_facets(&df).unwrap();
        let boxplot = renderer.render_ram_boxplot(&df).unwrap();

        for path in [hist, facets, boxplot] {
            let meta = std::fs::metadata(&path).unwrap();
            assert!(meta.len() > 0, "{} is empty", path.display());
        }
    }
}
