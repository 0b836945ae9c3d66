//! Descriptive statistics over the dataset.
//!
//! This module provides:
//! - Scalar statistics (mean, R-7 quantiles, standard deviation, KDE)
//! - Group-wise average price per company
//! - IQR-based outlier bounds for the price column

pub mod descriptive;
mod group;
mod outliers;

pub use group::{company_price_averages, most_expensive_company};
pub use outliers::price_outlier_summary;
