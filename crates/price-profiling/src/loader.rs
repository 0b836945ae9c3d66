//! Dataset loading with encoding and parse fallbacks.
//!
//! The laptop pricing file ships as Latin-1, so the loader decodes raw
//! bytes with the configured encoding first and falls back to the
//! alternate encoding when that fails. Parsing then goes through multiple
//! strategies, from strict to lenient.

use crate::config::SourceEncoding;
use crate::error::{AnalysisError, Result};
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load the dataset from `path`, decoding with `encoding` first.
pub fn load_dataset(path: &Path, encoding: SourceEncoding) -> Result<DataFrame> {
    let bytes = std::fs::read(path)?;
    let (text, used) = decode_with_fallback(&bytes, encoding);
    if used != encoding {
        warn!(
            "Decoding as {} failed, fell back to {}",
            encoding.label(),
            used.label()
        );
    }

    let df = parse_csv(text)?;
    info!(
        "Dataset loaded successfully: {} rows x {} columns",
        df.height(),
        df.width()
    );
    Ok(df)
}

/// Decode `bytes` with `encoding`, falling back to the alternate encoding.
///
/// Returns the decoded text together with the encoding that actually
/// succeeded. Latin-1 maps every byte to a character, so the chain as a
/// whole cannot fail.
pub fn decode_with_fallback(bytes: &[u8], encoding: SourceEncoding) -> (String, SourceEncoding) {
    match decode(bytes, encoding) {
        Ok(text) => (text, encoding),
        Err(reason) => {
            debug!("{} decoding failed: {}", encoding.label(), reason);
            let fallback = encoding.fallback();
            match decode(bytes, fallback) {
                Ok(text) => (text, fallback),
                // Latin-1 is always one of the two, so this arm is unreachable
                // in practice; decode lossily rather than panic.
                Err(_) => (String::from_utf8_lossy(bytes).into_owned(), fallback),
            }
        }
    }
}

fn decode(bytes: &[u8], encoding: SourceEncoding) -> std::result::Result<String, String> {
    match encoding {
        SourceEncoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
        SourceEncoding::Utf8 => std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|e| e.to_string()),
    }
}

/// Parse CSV text with multiple fallback strategies.
fn parse_csv(text: String) -> Result<DataFrame> {
    // Strategy 1: strict parse with quote handling
    match CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_quote_char(Some(b'"')))
        .into_reader_with_file_handle(Cursor::new(text.clone()))
        .finish()
    {
        Ok(df) => return Ok(df),
        Err(e) => {
            debug!("Standard parse failed: {}", e);
        }
    }

    // Strategy 2: without quote handling
    match CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_quote_char(None))
        .into_reader_with_file_handle(Cursor::new(text.clone()))
        .finish()
    {
        Ok(df) => return Ok(df),
        Err(e) => {
            debug!("Parse without quotes failed: {}", e);
        }
    }

    // Strategy 3: pre-clean content
    let cleaned = clean_csv_content(&text);
    CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .into_reader_with_file_handle(Cursor::new(cleaned))
        .finish()
        .map_err(|e| AnalysisError::LoadFailed(e.to_string()))
}

/// Strip quote artifacts and blank lines before the last-resort parse.
fn clean_csv_content(content: &str) -> String {
    content
        .replace("\"\"\"", "\"")
        .replace("\"\"", "\"")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
