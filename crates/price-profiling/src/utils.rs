//! Shared helpers used across the analysis modules.

use crate::error::{AnalysisError, Result};
use polars::prelude::*;

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Fetch a column by name, mapping the miss to [`AnalysisError::ColumnNotFound`].
pub fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Series> {
    df.column(name)
        .map(|col| col.as_materialized_series())
        .map_err(|_| AnalysisError::ColumnNotFound(name.to_string()))
}

/// Collect the non-null values of a column as `f64`.
///
/// Returns [`AnalysisError::NoValidValues`] for non-numeric columns and
/// when nothing remains after dropping nulls.
pub fn numeric_non_null(series: &Series) -> Result<Vec<f64>> {
    if !is_numeric_dtype(series.dtype()) {
        return Err(AnalysisError::NoValidValues(series.name().to_string()));
    }

    let float_series = series.cast(&DataType::Float64)?;
    let values: Vec<f64> = float_series.f64()?.into_iter().flatten().collect();

    if values.is_empty() {
        return Err(AnalysisError::NoValidValues(series.name().to_string()));
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_numeric_dtype() {
        assert!(is_numeric_dtype(&DataType::Int64));
        assert!(is_numeric_dtype(&DataType::Float64));
        assert!(!is_numeric_dtype(&DataType::String));
        assert!(!is_numeric_dtype(&DataType::Boolean));
    }

    #[test]
    fn test_require_column_missing() {
        let df = df!["a" => [1, 2, 3]].unwrap();
        let err = require_column(&df, "b").unwrap_err();
        assert_eq!(err.error_code(), "COLUMN_NOT_FOUND");
    }

    #[test]
    fn test_numeric_non_null_drops_nulls() {
        let series = Series::new("val".into(), &[Some(1.0f64), None, Some(3.0)]);
        let values = numeric_non_null(&series).unwrap();
        assert_eq!(values, vec![1.0, 3.0]);
    }

    #[test]
    fn test_numeric_non_null_rejects_text_columns() {
        let series = Series::new("Memory".into(), &["128GB SSD", "1TB HDD"]);
        let err = numeric_non_null(&series).unwrap_err();
        assert_eq!(err.error_code(), "NO_VALID_VALUES");
    }

    #[test]
    fn test_numeric_non_null_empty_errors() {
        let series: Series = Series::new("val".into(), Vec::<f64>::new());
        let err = numeric_non_null(&series).unwrap_err();
        assert_eq!(err.error_code(), "NO_VALID_VALUES");
    }
}
