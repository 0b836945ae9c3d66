//! Shared data types describing the analysis results.

use serde::{Deserialize, Serialize};

/// Column names of the laptop pricing dataset.
///
/// The loader keeps whatever columns the file carries; the analysis only
/// touches the ones named here.
pub mod columns {
    pub const COMPANY: &str = "Company";
    pub const PRICE: &str = "Price (Euro)";
    pub const RAM: &str = "RAM (GB)";
    pub const OPSYS: &str = "OpSys";
    pub const MEMORY: &str = "Memory";
    pub const STORAGE_TYPE: &str = "Storage Type";
}

/// Average price for one manufacturer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyAverage {
    pub company: String,
    pub average_price: f64,
    /// Number of laptops that went into the average.
    pub laptop_count: usize,
}

/// IQR-based outlier summary for the price column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OutlierSummary {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub outlier_count: usize,
}

/// Before/after view of the operating-system normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OsNormalization {
    /// Distinct raw values, sorted, as found in the file.
    pub values_before: Vec<String>,
    /// Distinct category labels after rewriting.
    pub values_after: Vec<String>,
    /// Number of cells whose value actually changed.
    pub rewritten: usize,
}

/// One row of the `Memory` / `Storage Type` sample printed at the end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSampleRow {
    pub memory: String,
    pub storage_type: String,
}
