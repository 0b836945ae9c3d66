//! Operating-system category normalization.

use crate::error::Result;
use crate::types::{OsNormalization, columns};
use crate::utils::require_column;
use polars::prelude::*;
use std::collections::BTreeSet;
use tracing::debug;

/// The fixed operating-system category set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsCategory {
    Windows,
    Mac,
    Linux,
    Android,
    ChromeOs,
    /// Everything that matches none of the known families.
    Other,
}

impl OsCategory {
    /// The label written back into the `OpSys` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::Mac => "Mac",
            Self::Linux => "Linux",
            Self::Android => "Android",
            Self::ChromeOs => "Chrome OS",
            Self::Other => "No OS/Other",
        }
    }

    /// Classify a raw `OpSys` value.
    ///
    /// The substring checks run in a fixed order and the first match wins;
    /// a value containing both "Windows" and "Linux" maps to Windows.
    /// Changing the order changes results for such values.
    pub fn from_raw(raw: &str) -> Self {
        if raw.contains("Windows") {
            Self::Windows
        } else if raw.contains("Mac") || raw.contains("macOS") {
            Self::Mac
        } else if raw.contains("Linux") {
            Self::Linux
        } else if raw.contains("Android") {
            Self::Android
        } else if raw.contains("Chrome") {
            Self::ChromeOs
        } else {
            Self::Other
        }
    }
}

impl std::fmt::Display for OsCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rewrite the `OpSys` column in place to category labels.
///
/// Returns the distinct values seen before and after the rewrite plus the
/// number of cells that changed. Running this on an already-normalized
/// column is the identity: every label maps back onto itself.
pub fn normalize_os_column(df: &mut DataFrame) -> Result<OsNormalization> {
    let series = require_column(df, columns::OPSYS)?;
    let str_series = series.str()?;

    let mut values_before = BTreeSet::new();
    let mut values_after = BTreeSet::new();
    let mut rewritten = 0usize;
    let mut normalized = Vec::with_capacity(str_series.len());

    for opt_val in str_series.into_iter() {
        let label = match opt_val {
            Some(raw) => {
                values_before.insert(raw.to_string());
                let label = OsCategory::from_raw(raw).as_str();
                if label != raw {
                    rewritten += 1;
                }
                label
            }
            // The dataset carries no null OpSys rows; classify them as
            // unmatched if they ever appear.
            None => {
                rewritten += 1;
                OsCategory::Other.as_str()
            }
        };
        values_after.insert(label.to_string());
        normalized.push(Some(label));
    }

    let normalized = Series::new(columns::OPSYS.into(), normalized);
    df.replace(columns::OPSYS, normalized)?;

    debug!(
        "Normalized OpSys: {} distinct values -> {} categories ({} cells rewritten)",
        values_before.len(),
        values_after.len(),
        rewritten
    );

    Ok(OsNormalization {
        values_before: values_before.into_iter().collect(),
        values_after: values_after.into_iter().collect(),
        rewritten,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_category_mapping() {
        assert_eq!(OsCategory::from_raw("Windows 10").as_str(), "Windows");
        assert_eq!(OsCategory::from_raw("Windows 10 S").as_str(), "Windows");
        assert_eq!(OsCategory::from_raw("macOS X").as_str(), "Mac");
        assert_eq!(OsCategory::from_raw("Mac OS X").as_str(), "Mac");
        assert_eq!(OsCategory::from_raw("Linux").as_str(), "Linux");
        assert_eq!(OsCategory::from_raw("Android").as_str(), "Android");
        assert_eq!(OsCategory::from_raw("Chrome OS").as_str(), "Chrome OS");
        assert_eq!(OsCategory::from_raw("No OS").as_str(), "No OS/Other");
        assert_eq!(OsCategory::from_raw("").as_str(), "No OS/Other");
    }

    #[test]
    fn test_first_match_wins() {
        // Both families present: check order decides.
        assert_eq!(
            OsCategory::from_raw("Windows with Linux subsystem").as_str(),
            "Windows"
        );
        assert_eq!(OsCategory::from_raw("Linux (Chrome)").as_str(), "Linux");
    }

    #[test]
    fn test_labels_are_fixed_points() {
        // Idempotence of the whole normalization reduces to this.
        for label in [
            "Windows",
            "Mac",
            "Linux",
            "Android",
            "Chrome OS",
            "No OS/Other",
        ] {
            assert_eq!(OsCategory::from_raw(label).as_str(), label);
        }
    }

    #[test]
    fn test_normalize_column_rewrites_in_place() {
        let mut df = df![
            "OpSys" => ["Windows 10", "macOS", "Linux", "No OS", "Chrome OS"],
        ]
        .unwrap();

        let outcome = normalize_os_column(&mut df).unwrap();

        assert_eq!(
            outcome.values_before,
            vec!["Chrome OS", "Linux", "No OS", "Windows 10", "macOS"]
        );
        assert_eq!(
            outcome.values_after,
            vec!["Chrome OS", "Linux", "Mac", "No OS/Other", "Windows"]
        );
        // "Linux" and "Chrome OS" were already canonical.
        assert_eq!(outcome.rewritten, 3);

        let col = df.column("OpSys").unwrap();
        let values: Vec<&str> = col.str().unwrap().into_iter().flatten().collect();
        assert_eq!(
            values,
            vec!["Windows", "Mac", "Linux", "No OS/Other", "Chrome OS"]
        );
    }

    #[test]
    fn test_normalize_column_is_idempotent() {
        let mut df = df![
            "OpSys" => ["Windows 7", "Android", "Mac OS X"],
        ]
        .unwrap();

        normalize_os_column(&mut df).unwrap();
        let first: Vec<String> = df
            .column("OpSys")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .flatten()
            .map(String::from)
            .collect();

        let outcome = normalize_os_column(&mut df).unwrap();
        let second: Vec<String> = df
            .column("OpSys")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .flatten()
            .map(String::from)
            .collect();

        assert_eq!(first, second);
        assert_eq!(outcome.rewritten, 0);
    }

    #[test]
    fn test_normalize_column_missing_errors() {
        let mut df = df!["Company" => ["Dell"]].unwrap();
        let err = normalize_os_column(&mut df).unwrap_err();
        assert_eq!(err.error_code(), "COLUMN_NOT_FOUND");
    }
}
