//! IQR-based outlier detection for the price column.

use crate::error::{AnalysisError, Result};
use crate::stats::descriptive::quantile;
use crate::types::{OutlierSummary, columns};
use crate::utils::{numeric_non_null, require_column};
use polars::prelude::*;
use tracing::debug;

/// Compute IQR outlier bounds and the outlier count for `Price (Euro)`.
///
/// Bounds are `[Q1 − k·IQR, Q3 + k·IQR]` with quartiles per the R-7
/// definition; values strictly outside count as outliers. Nulls are
/// ignored on both sides.
pub fn price_outlier_summary(df: &DataFrame, multiplier: f64) -> Result<OutlierSummary> {
    let series = require_column(df, columns::PRICE)?;
    let prices = numeric_non_null(series)?;

    let q1 = quantile(&prices, 0.25)
        .ok_or_else(|| AnalysisError::NoValidValues(columns::PRICE.to_string()))?;
    let q3 = quantile(&prices, 0.75)
        .ok_or_else(|| AnalysisError::NoValidValues(columns::PRICE.to_string()))?;

    let iqr = q3 - q1;
    let lower_bound = q1 - multiplier * iqr;
    let upper_bound = q3 + multiplier * iqr;

    let outlier_count = prices
        .iter()
        .filter(|&&p| p < lower_bound || p > upper_bound)
        .count();

    debug!(
        "IQR outlier bounds [{:.2}, {:.2}], {} outliers of {} prices",
        lower_bound,
        upper_bound,
        outlier_count,
        prices.len()
    );

    Ok(OutlierSummary {
        q1,
        q3,
        iqr,
        lower_bound,
        upper_bound,
        outlier_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn price_frame(prices: &[f64]) -> DataFrame {
        df!["Price (Euro)" => prices].unwrap()
    }

    #[test]
    fn test_summary_for_known_dataset() {
        // Q1 = 225, Q3 = 475 under R-7, so the bounds are [-150, 850]
        // and only the million-euro laptop falls outside.
        let df = price_frame(&[100.0, 200.0, 300.0, 400.0, 500.0, 1_000_000.0]);
        let summary = price_outlier_summary(&df, 1.5).unwrap();

        assert_eq!(summary.q1, 225.0);
        assert_eq!(summary.q3, 475.0);
        assert_eq!(summary.iqr, 250.0);
        assert_eq!(summary.lower_bound, -150.0);
        assert_eq!(summary.upper_bound, 850.0);
        assert_eq!(summary.outlier_count, 1);
    }

    #[test]
    fn test_no_outliers_in_tight_data() {
        let df = price_frame(&[500.0, 520.0, 540.0, 560.0, 580.0]);
        let summary = price_outlier_summary(&df, 1.5).unwrap();
        assert_eq!(summary.outlier_count, 0);
    }

    #[test]
    fn test_identical_prices_zero_iqr() {
        // IQR collapses to zero; the bounds pin to the single value and
        // nothing is strictly outside.
        let df = price_frame(&[999.0, 999.0, 999.0, 999.0]);
        let summary = price_outlier_summary(&df, 1.5).unwrap();
        assert_eq!(summary.iqr, 0.0);
        assert_eq!(summary.outlier_count, 0);
    }

    #[test]
    fn test_multiplier_widens_bounds() {
        let prices = [100.0, 200.0, 300.0, 400.0, 500.0, 2000.0];
        let narrow = price_outlier_summary(&price_frame(&prices), 1.5).unwrap();
        let wide = price_outlier_summary(&price_frame(&prices), 10.0).unwrap();
        assert!(narrow.outlier_count >= wide.outlier_count);
        assert!(wide.upper_bound > narrow.upper_bound);
    }

    #[test]
    fn test_nulls_are_not_outliers() {
        let df = df![
            "Price (Euro)" => [Some(100.0), Some(200.0), Some(300.0), Some(400.0), None],
        ]
        .unwrap();
        let summary = price_outlier_summary(&df, 1.5).unwrap();
        assert_eq!(summary.outlier_count, 0);
    }

    #[test]
    fn test_all_null_prices_error() {
        let df = df![
            "Price (Euro)" => [None::<f64>, None, None],
        ]
        .unwrap();
        let err = price_outlier_summary(&df, 1.5).unwrap_err();
        assert_eq!(err.error_code(), "NO_VALID_VALUES");
    }
}
