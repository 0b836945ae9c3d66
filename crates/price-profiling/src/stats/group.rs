//! Group-wise average price per company.

use crate::error::{AnalysisError, Result};
use crate::types::{CompanyAverage, columns};
use crate::utils::require_column;
use polars::prelude::*;
use std::collections::BTreeMap;
use tracing::debug;

/// Mean `Price (Euro)` per `Company`, sorted descending by average.
///
/// Rows with a null company or price are skipped. Ties are broken by
/// company name so the ordering is deterministic.
pub fn company_price_averages(df: &DataFrame) -> Result<Vec<CompanyAverage>> {
    let company_series = require_column(df, columns::COMPANY)?;
    let companies = company_series.str()?;

    let price_series = require_column(df, columns::PRICE)?;
    let price_float = price_series.cast(&DataType::Float64)?;
    let prices = price_float.f64()?;

    let mut sums: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for (company, price) in companies.into_iter().zip(prices.into_iter()) {
        if let (Some(company), Some(price)) = (company, price) {
            let entry = sums.entry(company.to_string()).or_insert((0.0, 0));
            entry.0 += price;
            entry.1 += 1;
        }
    }

    if sums.is_empty() {
        return Err(AnalysisError::NoValidValues(columns::COMPANY.to_string()));
    }

    let mut averages: Vec<CompanyAverage> = sums
        .into_iter()
        .map(|(company, (sum, count))| CompanyAverage {
            company,
            average_price: sum / count as f64,
            laptop_count: count,
        })
        .collect();

    averages.sort_by(|a, b| {
        b.average_price
            .total_cmp(&a.average_price)
            .then_with(|| a.company.cmp(&b.company))
    });

    debug!("Computed average price for {} companies", averages.len());
    Ok(averages)
}

/// The company with the highest average price.
///
/// Expects the output of [`company_price_averages`]; `None` on empty input.
pub fn most_expensive_company(averages: &[CompanyAverage]) -> Option<&CompanyAverage> {
    averages.first()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_averages_sorted_descending() {
        let df = df![
            "Company" => ["Acer", "Razer", "Acer", "Razer", "Dell"],
            "Price (Euro)" => [400.0, 2500.0, 600.0, 3500.0, 900.0],
        ]
        .unwrap();

        let averages = company_price_averages(&df).unwrap();
        let names: Vec<&str> = averages.iter().map(|a| a.company.as_str()).collect();
        assert_eq!(names, vec!["Razer", "Dell", "Acer"]);
        assert_eq!(averages[0].average_price, 3000.0);
        assert_eq!(averages[0].laptop_count, 2);
        assert_eq!(averages[2].average_price, 500.0);
    }

    #[test]
    fn test_tied_averages_rank_together() {
        let df = df![
            "Company" => ["CompanyA", "CompanyA", "CompanyB"],
            "Price (Euro)" => [1000.0, 2000.0, 1500.0],
        ]
        .unwrap();

        let averages = company_price_averages(&df).unwrap();
        assert_eq!(averages[0].average_price, 1500.0);
        assert_eq!(averages[1].average_price, 1500.0);
        // Tie broken by name for a stable ordering.
        assert_eq!(averages[0].company, "CompanyA");
        assert_eq!(averages[1].company, "CompanyB");
    }

    #[test]
    fn test_null_rows_skipped() {
        let df = df![
            "Company" => [Some("HP"), None, Some("HP")],
            "Price (Euro)" => [Some(500.0), Some(999.0), None],
        ]
        .unwrap();

        let averages = company_price_averages(&df).unwrap();
        assert_eq!(averages.len(), 1);
        assert_eq!(averages[0].average_price, 500.0);
        assert_eq!(averages[0].laptop_count, 1);
    }

    #[test]
    fn test_integer_prices_are_cast() {
        let df = df![
            "Company" => ["Asus", "Asus"],
            "Price (Euro)" => [1000i64, 2000i64],
        ]
        .unwrap();

        let averages = company_price_averages(&df).unwrap();
        assert_eq!(averages[0].average_price, 1500.0);
    }

    #[test]
    fn test_most_expensive_company() {
        let df = df![
            "Company" => ["MSI", "Chuwi"],
            "Price (Euro)" => [1700.0, 300.0],
        ]
        .unwrap();

        let averages = company_price_averages(&df).unwrap();
        let top = most_expensive_company(&averages).unwrap();
        assert_eq!(top.company, "MSI");
        assert!(most_expensive_company(&[]).is_none());
    }

    #[test]
    fn test_missing_price_column_errors() {
        let df = df!["Company" => ["Dell"]].unwrap();
        let err = company_price_averages(&df).unwrap_err();
        assert_eq!(err.error_code(), "COLUMN_NOT_FOUND");
    }
}
