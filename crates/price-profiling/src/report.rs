//! Analysis report assembly and output.
//!
//! The report carries everything the console prints, in a serializable
//! form, so runs can be piped to other tools (`--json`) or archived next
//! to the charts (`--emit-report`).

use crate::error::{AnalysisError, Result};
use crate::types::{CompanyAverage, OsNormalization, OutlierSummary, StorageSampleRow};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Full result of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Timestamp when the report was generated.
    pub generated_at: String,
    /// Path of the input CSV.
    pub input_file: String,
    /// Dataset shape as (rows, columns) after loading.
    pub shape: (usize, usize),
    /// Encoding that decoded the file.
    pub encoding_used: String,

    /// Mean price per company, sorted descending.
    pub company_averages: Vec<CompanyAverage>,
    /// The company topping the average-price ranking.
    pub most_expensive_company: Option<String>,

    /// Distinct OpSys values before and after normalization.
    pub os_normalization: OsNormalization,

    /// IQR outlier bounds and count for the price column.
    pub price_outliers: OutlierSummary,

    /// Head of the `Memory` / `Storage Type` columns.
    pub storage_sample: Vec<StorageSampleRow>,

    /// Chart files written during the run; empty when charts are disabled.
    pub chart_files: Vec<String>,
}

impl AnalysisReport {
    /// Timestamp string used for `generated_at`.
    pub fn timestamp() -> String {
        Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
    }

    /// Write the report as pretty-printed JSON into `output_dir`.
    ///
    /// The file is named `<input_stem>_report.json`; the path written to
    /// is returned.
    pub fn write_to_file(&self, output_dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(output_dir)?;

        let stem = Path::new(&self.input_file)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("analysis");
        let path = output_dir.join(format!("{}_report.json", stem));

        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(&path).map_err(|e| {
            AnalysisError::ReportGenerationFailed(format!(
                "cannot create {}: {}",
                path.display(),
                e
            ))
        })?;
        file.write_all(json.as_bytes())?;

        debug!("Report written to {}", path.display());
        Ok(path)
    }
}

// Reports cross thread boundaries when callers parallelize runs.
static_assertions::assert_impl_all!(AnalysisReport: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_report() -> AnalysisReport {
        AnalysisReport {
            generated_at: AnalysisReport::timestamp(),
            input_file: "data/laptop_price.csv".to_string(),
            shape: (1303, 13),
            encoding_used: "latin-1".to_string(),
            company_averages: vec![CompanyAverage {
                company: "Razer".to_string(),
                average_price: 3346.14,
                laptop_count: 7,
            }],
            most_expensive_company: Some("Razer".to_string()),
            os_normalization: OsNormalization {
                values_before: vec!["Windows 10".to_string(), "macOS".to_string()],
                values_after: vec!["Mac".to_string(), "Windows".to_string()],
                rewritten: 2,
            },
            price_outliers: OutlierSummary {
                q1: 599.0,
                q3: 1487.88,
                iqr: 888.88,
                lower_bound: -734.32,
                upper_bound: 2821.2,
                outlier_count: 51,
            },
            storage_sample: vec![StorageSampleRow {
                memory: "128GB SSD".to_string(),
                storage_type: "SSD".to_string(),
            }],
            chart_files: vec!["outputs/price_distribution.png".to_string()],
        }
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        let back: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.shape, (1303, 13));
        assert_eq!(back.company_averages[0].company, "Razer");
        assert_eq!(back.price_outliers.outlier_count, 51);
    }

    #[test]
    fn test_write_to_file_uses_input_stem() {
        let dir = tempfile::tempdir().unwrap();
        let report = sample_report();

        let path = report.write_to_file(dir.path()).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "laptop_price_report.json"
        );

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("most_expensive_company"));
    }
}
