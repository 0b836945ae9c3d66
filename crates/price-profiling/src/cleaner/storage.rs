//! Storage-type extraction from the free-text `Memory` column.

use crate::error::Result;
use crate::types::{StorageSampleRow, columns};
use crate::utils::require_column;
use polars::prelude::*;
use tracing::debug;

/// Storage keywords scanned for, in output order.
///
/// "128GB SSD + 1TB HDD" yields "SSD + HDD" regardless of which drive is
/// listed first in the description.
const STORAGE_KEYWORDS: [&str; 4] = ["SSD", "HDD", "Flash Storage", "Hybrid"];

/// Label used when no keyword matches.
const UNKNOWN_STORAGE: &str = "Unknown";

/// Extract the storage type from a `Memory` description.
///
/// All matching keywords are joined with `" + "`; descriptions matching
/// none of them yield "Unknown".
pub fn storage_type_of(memory: &str) -> String {
    let matches: Vec<&str> = STORAGE_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| memory.contains(keyword))
        .collect();

    if matches.is_empty() {
        UNKNOWN_STORAGE.to_string()
    } else {
        matches.join(" + ")
    }
}

/// Append the derived `Storage Type` column to the dataset.
pub fn derive_storage_column(df: &mut DataFrame) -> Result<()> {
    let series = require_column(df, columns::MEMORY)?;
    let str_series = series.str()?;

    let mut derived = Vec::with_capacity(str_series.len());
    let mut unknown_count = 0usize;

    for opt_val in str_series.into_iter() {
        let storage = match opt_val {
            Some(memory) => storage_type_of(memory),
            None => UNKNOWN_STORAGE.to_string(),
        };
        if storage == UNKNOWN_STORAGE {
            unknown_count += 1;
        }
        derived.push(Some(storage));
    }

    let derived = Series::new(columns::STORAGE_TYPE.into(), derived);
    df.with_column(derived)?;

    debug!(
        "Derived '{}' column ({} unknown descriptions)",
        columns::STORAGE_TYPE,
        unknown_count
    );

    Ok(())
}

/// The first `n` `Memory` / `Storage Type` pairs, for console display.
pub fn storage_sample(df: &DataFrame, n: usize) -> Result<Vec<StorageSampleRow>> {
    let memory = require_column(df, columns::MEMORY)?.str()?.clone();
    let storage = require_column(df, columns::STORAGE_TYPE)?.str()?.clone();

    let sample = memory
        .into_iter()
        .zip(storage.into_iter())
        .take(n)
        .map(|(memory, storage_type)| StorageSampleRow {
            memory: memory.unwrap_or_default().to_string(),
            storage_type: storage_type.unwrap_or_default().to_string(),
        })
        .collect();

    Ok(sample)
}
