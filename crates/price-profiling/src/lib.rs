//! Laptop Pricing Analysis Library
//!
//! Exploratory analysis of a laptop pricing dataset built with Rust and
//! Polars.
//!
//! # Overview
//!
//! This library provides the building blocks of the analysis:
//!
//! - **Loading**: CSV loading with encoding and parse fallbacks
//! - **Group statistics**: Average price per company
//! - **Cleaning**: Operating-system category normalization
//! - **Outlier detection**: IQR bounds and counts for the price column
//! - **Feature derivation**: Storage type extracted from the `Memory` text
//! - **Charts**: Price histogram, per-OS facets, price-by-RAM boxplot
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use price_profiling::{
//!     AnalysisConfig, ChartRenderer, company_price_averages, derive_storage_column,
//!     load_dataset, normalize_os_column, price_outlier_summary,
//! };
//! use std::path::Path;
//!
//! let config = AnalysisConfig::default();
//! let mut df = load_dataset(Path::new("laptop_price.csv"), config.encoding)?;
//!
//! let averages = company_price_averages(&df)?;
//! let os_outcome = normalize_os_column(&mut df)?;
//! let outliers = price_outlier_summary(&df, config.iqr_multiplier)?;
//! derive_storage_column(&mut df)?;
//!
//! let charts = ChartRenderer::new(&config);
//! charts.render_price_distribution(&df)?;
//! ```

pub mod charts;
pub mod cleaner;
pub mod config;
pub mod error;
pub mod loader;
pub mod report;
pub mod stats;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use charts::{
    ChartRenderer, OPSYS_DISTRIBUTION_FILE, PRICE_DISTRIBUTION_FILE, RAM_VS_PRICE_FILE,
};
pub use cleaner::{
    OsCategory, derive_storage_column, normalize_os_column, storage_sample, storage_type_of,
};
pub use config::{AnalysisConfig, AnalysisConfigBuilder, ConfigValidationError, SourceEncoding};
pub use error::{AnalysisError, Result as AnalysisResult, ResultExt};
pub use loader::{decode_with_fallback, load_dataset};
pub use report::AnalysisReport;
pub use stats::{company_price_averages, most_expensive_company, price_outlier_summary};
pub use types::{CompanyAverage, OsNormalization, OutlierSummary, StorageSampleRow, columns};
