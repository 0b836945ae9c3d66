//! Configuration types for the analysis.
//!
//! This module provides configuration options using the builder pattern
//! for flexible and ergonomic setup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Character encoding used to decode the source CSV.
///
/// The original dataset ships as Latin-1; decoding falls back to the
/// alternate encoding when the configured one cannot decode the bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SourceEncoding {
    /// ISO-8859-1, one byte per character. Decoding never fails.
    #[default]
    Latin1,
    /// Strict UTF-8. Fails on invalid byte sequences.
    Utf8,
}

impl SourceEncoding {
    /// Human-readable label used in logs and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Latin1 => "latin-1",
            Self::Utf8 => "utf-8",
        }
    }

    /// The encoding tried when this one fails to decode.
    pub fn fallback(&self) -> SourceEncoding {
        match self {
            Self::Latin1 => Self::Utf8,
            Self::Utf8 => Self::Latin1,
        }
    }
}

/// Configuration for the analysis run.
///
/// Use [`AnalysisConfig::builder()`] to create a configuration with a
/// fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use price_profiling::config::AnalysisConfig;
///
/// let config = AnalysisConfig::builder()
///     .iqr_multiplier(3.0)
///     .histogram_bins(20)
///     .output_dir("charts")
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Encoding tried first when decoding the CSV bytes.
    /// Default: Latin-1
    pub encoding: SourceEncoding,

    /// Multiplier applied to the IQR when computing outlier bounds.
    /// Default: 1.5
    pub iqr_multiplier: f64,

    /// Number of bins in the price histograms.
    /// Default: 30
    pub histogram_bins: usize,

    /// Number of evaluation points for the density overlay.
    /// Default: 200
    pub kde_grid_points: usize,

    /// Directory chart images and reports are written to.
    /// Default: "outputs"
    pub output_dir: PathBuf,

    /// Whether to render chart images at all.
    /// Default: true
    pub render_charts: bool,

    /// Number of `Memory` / `Storage Type` rows shown in the sample.
    /// Default: 5
    pub sample_rows: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            encoding: SourceEncoding::default(),
            iqr_multiplier: 1.5,
            histogram_bins: 30,
            kde_grid_points: 200,
            output_dir: PathBuf::from("outputs"),
            render_charts: true,
            sample_rows: 5,
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration builder.
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !self.iqr_multiplier.is_finite() || self.iqr_multiplier <= 0.0 {
            return Err(ConfigValidationError::InvalidIqrMultiplier(
                self.iqr_multiplier,
            ));
        }

        if self.histogram_bins == 0 {
            return Err(ConfigValidationError::InvalidBinCount(self.histogram_bins));
        }

        if self.kde_grid_points < 2 {
            return Err(ConfigValidationError::InvalidKdeGrid(self.kde_grid_points));
        }

        if self.sample_rows == 0 {
            return Err(ConfigValidationError::InvalidSampleRows(self.sample_rows));
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid IQR multiplier: {0} (must be a positive finite number)")]
    InvalidIqrMultiplier(f64),

    #[error("Invalid histogram bin count: {0} (must be at least 1)")]
    InvalidBinCount(usize),

    #[error("Invalid KDE grid size: {0} (must be at least 2)")]
    InvalidKdeGrid(usize),

    #[error("Invalid sample row count: {0} (must be at least 1)")]
    InvalidSampleRows(usize),
}

/// Builder for [`AnalysisConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    encoding: Option<SourceEncoding>,
    iqr_multiplier: Option<f64>,
    histogram_bins: Option<usize>,
    kde_grid_points: Option<usize>,
    output_dir: Option<PathBuf>,
    render_charts: Option<bool>,
    sample_rows: Option<usize>,
}

impl AnalysisConfigBuilder {
    /// Set the encoding tried first when decoding the CSV.
    pub fn encoding(mut self, encoding: SourceEncoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Set the IQR multiplier for outlier bounds.
    ///
    /// # Arguments
    /// * `multiplier` - Positive factor (1.5 is the conventional value)
    pub fn iqr_multiplier(mut self, multiplier: f64) -> Self {
        self.iqr_multiplier = Some(multiplier);
        self
    }

    /// Set the number of histogram bins.
    pub fn histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = Some(bins);
        self
    }

    /// Set the number of evaluation points for the density overlay.
    pub fn kde_grid_points(mut self, points: usize) -> Self {
        self.kde_grid_points = Some(points);
        self
    }

    /// Set the output directory for charts and reports.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Enable or disable chart rendering.
    pub fn render_charts(mut self, enabled: bool) -> Self {
        self.render_charts = Some(enabled);
        self
    }

    /// Set the number of rows in the storage-type sample.
    pub fn sample_rows(mut self, rows: usize) -> Self {
        self.sample_rows = Some(rows);
        self
    }

    /// Build the configuration, validating all fields.
    pub fn build(self) -> Result<AnalysisConfig, ConfigValidationError> {
        let defaults = AnalysisConfig::default();
        let config = AnalysisConfig {
            encoding: self.encoding.unwrap_or(defaults.encoding),
            iqr_multiplier: self.iqr_multiplier.unwrap_or(defaults.iqr_multiplier),
            histogram_bins: self.histogram_bins.unwrap_or(defaults.histogram_bins),
            kde_grid_points: self.kde_grid_points.unwrap_or(defaults.kde_grid_points),
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
            render_charts: self.render_charts.unwrap_or(defaults.render_charts),
            sample_rows: self.sample_rows.unwrap_or(defaults.sample_rows),
        };
        config.validate()?;
        Ok(config)
    }
}

// Config values cross thread boundaries when callers parallelize runs.
static_assertions::assert_impl_all!(AnalysisConfig: Send, Sync);
